//! Kala bala (temporal strength): nathonnatha + paksha + tribhaga +
//! varsha/masa/dina/hora + ayana + yuddha.
//!
//! Sapta grahas only. Single-graha functions return 0.0 for Rahu/Ketu.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::PlanetPosition;
use crate::config::BalaConfig;
use crate::graha::Graha;
use crate::relationships::{BeneficNature, natural_benefic_malefic};
use crate::strength::{AxisScore, Component};
use crate::temporal::{Paksha, TemporalContext, Tribhaga, paksha_from_elongation};
use crate::util::{angular_separation, normalize_360};

/// Grahas that can fight a planetary war, brightest first.
pub const WAR_BRIGHTNESS_ORDER: [Graha; 5] = [
    Graha::Shukra,
    Graha::Guru,
    Graha::Buddh,
    Graha::Mangal,
    Graha::Shani,
];

const FULL_WAR_VIRUPAS: f64 = 30.0;
const EDGE_WAR_VIRUPAS: f64 = 15.0;

// ---------------------------------------------------------------------------
// Day / night, paksha, tribhaga
// ---------------------------------------------------------------------------

/// Nathonnatha bala: Mercury always 60, Sun/Jupiter/Venus 60 by day,
/// Moon/Mars/Saturn 60 by night.
pub fn nathonnatha_bala(graha: Graha, is_day: bool) -> f64 {
    let strong = match graha {
        Graha::Buddh => true,
        Graha::Surya | Graha::Guru | Graha::Shukra => is_day,
        Graha::Chandra | Graha::Mangal | Graha::Shani => !is_day,
        Graha::Rahu | Graha::Ketu => false,
    };
    if strong { 60.0 } else { 0.0 }
}

/// Paksha bala from the Moon−Sun elongation.
///
/// Phase strength rises 0→60 towards opposition. Benefics keep it in the
/// bright half, malefics in the dark half; otherwise they get `60 - phase`.
pub fn paksha_bala(graha: Graha, elongation: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let elong = normalize_360(elongation);
    let phase = if elong < 180.0 {
        elong / 180.0 * 60.0
    } else {
        (360.0 - elong) / 180.0 * 60.0
    };
    let favoured = matches!(
        (natural_benefic_malefic(graha), paksha_from_elongation(elong)),
        (BeneficNature::Benefic, Paksha::Shukla) | (BeneficNature::Malefic, Paksha::Krishna)
    );
    if favoured { phase } else { 60.0 - phase }
}

/// Tribhaga bala: Jupiter always 30, the period ruler 60, others 0.
pub fn tribhaga_bala(graha: Graha, tribhaga: Tribhaga) -> f64 {
    if graha == Graha::Guru {
        30.0
    } else if graha == tribhaga.ruler() {
        60.0
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Hora-adi lordships
// ---------------------------------------------------------------------------

/// Varsha (year lord) bala: 15.
pub fn varsha_bala(graha: Graha, year_lord: Graha) -> f64 {
    if graha == year_lord { 15.0 } else { 0.0 }
}

/// Masa (month lord) bala: 30.
pub fn masa_bala(graha: Graha, month_lord: Graha) -> f64 {
    if graha == month_lord { 30.0 } else { 0.0 }
}

/// Dina (weekday lord) bala: 45.
pub fn dina_bala(graha: Graha, day_lord: Graha) -> f64 {
    if graha == day_lord { 45.0 } else { 0.0 }
}

/// Hora (planetary hour lord) bala: 60.
pub fn hora_bala(graha: Graha, hora_lord: Graha) -> f64 {
    if graha == hora_lord { 60.0 } else { 0.0 }
}

// ---------------------------------------------------------------------------
// Ayana
// ---------------------------------------------------------------------------

/// Declination (deg) of an ecliptic longitude on the ecliptic.
pub fn declination(lon: f64, obliquity_deg: f64) -> f64 {
    (lon.to_radians().sin() * obliquity_deg.to_radians().sin())
        .clamp(-1.0, 1.0)
        .asin()
        .to_degrees()
}

/// Ayana bala from declination scaled to [-30, 30].
///
/// Sun/Mars/Jupiter gain with north declination, Moon/Venus/Saturn with
/// south, Mercury is fixed at 30.
pub fn ayana_bala(graha: Graha, lon: f64, obliquity_deg: f64) -> f64 {
    let normalized = declination(lon, obliquity_deg) / obliquity_deg * 30.0;
    match graha {
        Graha::Surya | Graha::Mangal | Graha::Guru => (30.0 + normalized).clamp(0.0, 60.0),
        Graha::Chandra | Graha::Shukra | Graha::Shani => (30.0 - normalized).clamp(0.0, 60.0),
        Graha::Buddh => 30.0,
        Graha::Rahu | Graha::Ketu => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Yuddha
// ---------------------------------------------------------------------------

fn brightness_rank(graha: Graha) -> Option<usize> {
    WAR_BRIGHTNESS_ORDER.iter().position(|g| *g == graha)
}

/// A planetary war between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryWar {
    pub winner: Graha,
    pub loser: Graha,
    /// Shortest arc between the two, in degrees.
    pub separation: f64,
    /// Virupas gained by the winner and lost by the loser.
    pub magnitude: f64,
}

impl PlanetaryWar {
    pub fn involves(&self, graha: Graha) -> bool {
        self.winner == graha || self.loser == graha
    }

    /// Signed effect on `graha`; 0 if it is not a participant.
    pub fn effect_on(&self, graha: Graha) -> f64 {
        if graha == self.winner {
            self.magnitude
        } else if graha == self.loser {
            -self.magnitude
        } else {
            0.0
        }
    }
}

/// War magnitude for a separation: 30 at or inside the full-war orb,
/// falling linearly to 15 at the war orb. None outside the war orb.
pub fn war_magnitude(separation: f64, war_orb_deg: f64, full_war_orb_deg: f64) -> Option<f64> {
    if separation > war_orb_deg {
        return None;
    }
    if separation <= full_war_orb_deg {
        return Some(FULL_WAR_VIRUPAS);
    }
    let t = (war_orb_deg - separation) / (war_orb_deg - full_war_orb_deg);
    Some(EDGE_WAR_VIRUPAS + (FULL_WAR_VIRUPAS - EDGE_WAR_VIRUPAS) * t)
}

/// All planetary wars among the war-capable positions, in brightness order.
pub fn planetary_wars(positions: &[PlanetPosition], config: &BalaConfig) -> Vec<PlanetaryWar> {
    let mut fighters: Vec<(usize, &PlanetPosition)> = positions
        .iter()
        .filter_map(|p| brightness_rank(p.graha).map(|rank| (rank, p)))
        .collect();
    fighters.sort_by_key(|(rank, _)| *rank);

    let mut wars = Vec::new();
    for (i, (_, bright)) in fighters.iter().enumerate() {
        for (_, dim) in &fighters[i + 1..] {
            let separation = angular_separation(bright.longitude, dim.longitude);
            if let Some(magnitude) =
                war_magnitude(separation, config.war_orb_deg, config.full_war_orb_deg)
            {
                debug!(
                    winner = bright.graha.english_name(),
                    loser = dim.graha.english_name(),
                    separation,
                    magnitude,
                    "planetary war"
                );
                wars.push(PlanetaryWar {
                    winner: bright.graha,
                    loser: dim.graha,
                    separation,
                    magnitude,
                });
            }
        }
    }
    wars
}

/// Yuddha bala: sum of war effects on `graha`, clamped to [-30, 30].
pub fn yuddha_bala(graha: Graha, wars: &[PlanetaryWar]) -> f64 {
    wars.iter()
        .map(|w| w.effect_on(graha))
        .sum::<f64>()
        .clamp(-FULL_WAR_VIRUPAS, FULL_WAR_VIRUPAS)
}

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// Kala bala breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KalaBalaBreakdown {
    pub graha: Graha,
    pub nathonnatha: f64,
    pub paksha: f64,
    pub tribhaga: f64,
    pub varsha: f64,
    pub masa: f64,
    pub dina: f64,
    pub hora: f64,
    pub ayana: f64,
    pub yuddha: f64,
}

impl KalaBalaBreakdown {
    /// Hora-adi total (year + month + day + hour lordships).
    pub fn hora_adi(&self) -> f64 {
        self.varsha + self.masa + self.dina + self.hora
    }

    /// Clamped component scores in report order.
    pub fn scores(&self) -> Vec<AxisScore> {
        vec![
            AxisScore::new(Component::Nathonnatha, self.nathonnatha),
            AxisScore::new(Component::Paksha, self.paksha),
            AxisScore::new(Component::Tribhaga, self.tribhaga),
            AxisScore::new(Component::Varsha, self.varsha),
            AxisScore::new(Component::Masa, self.masa),
            AxisScore::new(Component::Dina, self.dina),
            AxisScore::new(Component::Hora, self.hora),
            AxisScore::new(Component::Ayana, self.ayana),
            AxisScore::new(Component::Yuddha, self.yuddha),
        ]
    }
}

/// Kala bala for a single position against a resolved context.
pub fn kala_bala(
    position: &PlanetPosition,
    context: &TemporalContext,
    wars: &[PlanetaryWar],
    config: &BalaConfig,
) -> KalaBalaBreakdown {
    let graha = position.graha;
    KalaBalaBreakdown {
        graha,
        nathonnatha: nathonnatha_bala(graha, context.is_day),
        paksha: paksha_bala(graha, context.elongation),
        tribhaga: tribhaga_bala(graha, context.tribhaga),
        varsha: varsha_bala(graha, context.year_lord),
        masa: masa_bala(graha, context.month_lord),
        dina: dina_bala(graha, context.day_lord),
        hora: hora_bala(graha, context.hora_lord),
        ayana: ayana_bala(graha, position.longitude, config.obliquity_deg),
        yuddha: yuddha_bala(graha, wars),
    }
}
