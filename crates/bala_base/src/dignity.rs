//! Positional dignity classification and Uccha (exaltation) strength.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, degrees_in_rashi, rashi_from_longitude};
use crate::relationships::{
    NaturalRelationship, debilitation_degree, debilitation_rashi, exaltation_degree,
    exaltation_rashi, moolatrikona_range, natural_relationship, own_signs,
};
use crate::util::{angular_separation, normalize_360};

/// Upper bound of Uccha bala.
pub const UCCHA_MAX: f64 = 60.0;

/// Discrete dignity of a graha in a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    Friend,
    Neutral,
    Enemy,
    Debilitated,
}

impl Dignity {
    /// Divisional points for this dignity (virupas before the varga coefficient).
    pub const fn varga_points(self) -> f64 {
        match self {
            Self::Exalted => 20.0,
            Self::Moolatrikona => 22.5,
            Self::OwnSign => 30.0,
            Self::Friend => 15.0,
            Self::Neutral => 10.0,
            Self::Enemy => 7.5,
            Self::Debilitated => 0.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Moolatrikona => "Moolatrikona",
            Self::OwnSign => "Own Sign",
            Self::Friend => "Friend",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
            Self::Debilitated => "Debilitated",
        }
    }
}

/// Result of classifying one graha at one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DignityResult {
    pub graha: Graha,
    pub rashi: Rashi,
    pub dignity: Dignity,
    /// Uccha bala in [0, 60].
    pub uccha_virupas: f64,
    /// Folded distance from the debilitation point, in [0, 180].
    pub distance_from_debilitation: f64,
    /// Distance from the exact exaltation degree. Only set when exalted.
    pub exaltation_offset: Option<f64>,
}

/// Uccha bala: folded distance from the debilitation point scaled to [0, 60].
///
/// Exactly at exaltation → 60, exactly at debilitation → 0.
/// Rahu/Ketu have no debilitation point and score 0.
pub fn uccha_bala(graha: Graha, lon: f64) -> f64 {
    match debilitation_degree(graha) {
        Some(debil) => {
            let dist = angular_separation(normalize_360(lon), debil);
            (dist / 180.0 * UCCHA_MAX).clamp(0.0, UCCHA_MAX)
        }
        None => 0.0,
    }
}

/// Dignity by sign, with priority:
/// debilitated sign → exalted sign → moolatrikona range → own sign → natural
/// relationship with the sign lord.
///
/// `degrees_in_rashi` gates the moolatrikona check; pass None when the
/// position within the sign is not known.
pub fn sign_dignity(graha: Graha, rashi: Rashi, degrees_in_rashi: Option<f64>) -> Dignity {
    if debilitation_rashi(graha) == Some(rashi) {
        return Dignity::Debilitated;
    }
    placement_dignity(graha, rashi, degrees_in_rashi)
}

/// Same ladder as [`sign_dignity`] without the debilitation step.
///
/// Divisional scoring uses this form: a debilitated varga placement falls
/// through to the relationship with the sign lord.
pub fn varga_dignity(graha: Graha, rashi: Rashi, degrees_in_rashi: Option<f64>) -> Dignity {
    placement_dignity(graha, rashi, degrees_in_rashi)
}

fn placement_dignity(graha: Graha, rashi: Rashi, degrees_in_rashi: Option<f64>) -> Dignity {
    if exaltation_rashi(graha) == Some(rashi) {
        return Dignity::Exalted;
    }
    if let (Some(mt), Some(deg)) = (moolatrikona_range(graha), degrees_in_rashi) {
        if mt.contains(rashi, deg) {
            return Dignity::Moolatrikona;
        }
    }
    if own_signs(graha).contains(&rashi) {
        return Dignity::OwnSign;
    }
    match natural_relationship(graha, rashi_lord(rashi)) {
        NaturalRelationship::Friend => Dignity::Friend,
        NaturalRelationship::Neutral => Dignity::Neutral,
        NaturalRelationship::Enemy => Dignity::Enemy,
    }
}

/// Full positional dignity for a graha at an absolute longitude.
pub fn classify_dignity(graha: Graha, lon: f64) -> DignityResult {
    let lon = normalize_360(lon);
    let rashi = rashi_from_longitude(lon);
    let dignity = sign_dignity(graha, rashi, Some(degrees_in_rashi(lon)));
    let distance_from_debilitation = debilitation_degree(graha)
        .map(|d| angular_separation(lon, d))
        .unwrap_or(0.0);
    let exaltation_offset = match (dignity, exaltation_degree(graha)) {
        (Dignity::Exalted, Some(e)) => Some(angular_separation(lon, e)),
        _ => None,
    };

    DignityResult {
        graha,
        rashi,
        dignity,
        uccha_virupas: uccha_bala(graha, lon),
        distance_from_debilitation,
        exaltation_offset,
    }
}
