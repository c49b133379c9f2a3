//! Exaltation, moolatrikona, own-sign and natural friendship tables.
//!
//! All tables cover the 7 classical grahas. Rahu and Ketu have no entries
//! and fall through to the documented defaults (None, empty, Neutral).

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::rashi::{Rashi, rashi_from_longitude};

// ---------------------------------------------------------------------------
// Exaltation & Debilitation
// ---------------------------------------------------------------------------

/// Exaltation degree (absolute longitude). None for Rahu/Ketu.
///
/// Sun 10 Ari=10, Moon 3 Tau=33, Mars 28 Cap=298,
/// Mercury 15 Vir=165, Jupiter 5 Can=95, Venus 27 Pis=357, Saturn 20 Lib=200.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation degree = exaltation + 180 mod 360. None for Rahu/Ketu.
pub const fn debilitation_degree(graha: Graha) -> Option<f64> {
    match exaltation_degree(graha) {
        Some(e) => {
            let d = e + 180.0;
            if d >= 360.0 { Some(d - 360.0) } else { Some(d) }
        }
        None => None,
    }
}

/// Sign containing the exaltation degree.
pub fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    exaltation_degree(graha).map(rashi_from_longitude)
}

/// Sign containing the debilitation degree.
pub fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    debilitation_degree(graha).map(rashi_from_longitude)
}

// ---------------------------------------------------------------------------
// Moolatrikona
// ---------------------------------------------------------------------------

/// Moolatrikona range within a sign, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoolatrikonaRange {
    pub rashi: Rashi,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl MoolatrikonaRange {
    const fn new(rashi: Rashi, start_deg: f64, end_deg: f64) -> Self {
        Self {
            rashi,
            start_deg,
            end_deg,
        }
    }

    /// True if `rashi` matches and the degree lies within [start, end].
    pub fn contains(&self, rashi: Rashi, degrees_in_rashi: f64) -> bool {
        self.rashi == rashi && degrees_in_rashi >= self.start_deg && degrees_in_rashi <= self.end_deg
    }
}

/// Moolatrikona range for sapta grahas. None for Rahu/Ketu.
///
/// Sun 0-20 Leo, Moon 3-27 Tau, Mars 0-12 Ari, Mercury 15-20 Vir,
/// Jupiter 0-10 Sag, Venus 0-15 Lib, Saturn 0-20 Aqu.
pub const fn moolatrikona_range(graha: Graha) -> Option<MoolatrikonaRange> {
    match graha {
        Graha::Surya => Some(MoolatrikonaRange::new(Rashi::Simha, 0.0, 20.0)),
        Graha::Chandra => Some(MoolatrikonaRange::new(Rashi::Vrishabha, 3.0, 27.0)),
        Graha::Mangal => Some(MoolatrikonaRange::new(Rashi::Mesha, 0.0, 12.0)),
        Graha::Buddh => Some(MoolatrikonaRange::new(Rashi::Kanya, 15.0, 20.0)),
        Graha::Guru => Some(MoolatrikonaRange::new(Rashi::Dhanu, 0.0, 10.0)),
        Graha::Shukra => Some(MoolatrikonaRange::new(Rashi::Tula, 0.0, 15.0)),
        Graha::Shani => Some(MoolatrikonaRange::new(Rashi::Kumbha, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

// ---------------------------------------------------------------------------
// Own Signs
// ---------------------------------------------------------------------------

/// Own-sign rashis. Empty for Rahu/Ketu.
pub const fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

// ---------------------------------------------------------------------------
// Natural Friendship
// ---------------------------------------------------------------------------

/// Natural relationship between two grahas.
///
/// The five-fold scale (best friend .. bitter enemy) collapses onto these
/// three values for dignity purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaturalRelationship {
    Friend,
    Neutral,
    Enemy,
}

/// Natural friendship of `graha` towards `other`. Neutral for any pairing
/// involving Rahu/Ketu, and for a graha towards itself.
pub const fn natural_relationship(graha: Graha, other: Graha) -> NaturalRelationship {
    use Graha::*;
    use NaturalRelationship::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        (Chandra, Surya | Buddh) => Friend,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Benefic / Malefic
// ---------------------------------------------------------------------------

/// Natural benefic or malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

/// Jupiter, Venus, Moon and Mercury are benefic; everything else is malefic.
pub const fn natural_benefic_malefic(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Guru | Graha::Shukra | Graha::Chandra | Graha::Buddh => BeneficNature::Benefic,
        _ => BeneficNature::Malefic,
    }
}
