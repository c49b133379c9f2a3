//! Sthana bala (positional strength): uccha + saptavargaja + ojhayugma +
//! kendradi + drekkana.
//!
//! Sapta grahas only. Rahu and Ketu are never scored on this axis.

use serde::{Deserialize, Serialize};

use crate::chart::PlanetPosition;
use crate::dignity::{DignityResult, classify_dignity};
use crate::error::BalaError;
use crate::graha::Graha;
use crate::house::{HouseClass, classify_house};
use crate::rashi::{Rashi, degrees_in_rashi};
use crate::strength::{AxisScore, Component};
use crate::varga::{SaptavargajaBreakdown, VargaPlacements, saptavargaja_bala};

/// Ojhayugma bala: Moon and Venus gain 15 in even signs, the others in odd signs.
pub fn ojhayugma_bala(graha: Graha, rashi: Rashi) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let prefers_even = matches!(graha, Graha::Chandra | Graha::Shukra);
    if rashi.is_odd() != prefers_even { 15.0 } else { 0.0 }
}

/// Decanate (1..=3) of a longitude within its sign.
pub fn decanate(lon: f64) -> u8 {
    let deg = degrees_in_rashi(lon);
    if deg < 10.0 {
        1
    } else if deg < 20.0 {
        2
    } else {
        3
    }
}

/// Drekkana bala: 15 in the preferred decanate.
///
/// Sun/Mars/Jupiter → 1st, Mercury/Saturn → 2nd, Moon/Venus → 3rd.
pub fn drekkana_bala(graha: Graha, lon: f64) -> f64 {
    let preferred = match graha {
        Graha::Surya | Graha::Mangal | Graha::Guru => 1,
        Graha::Buddh | Graha::Shani => 2,
        Graha::Chandra | Graha::Shukra => 3,
        Graha::Rahu | Graha::Ketu => return 0.0,
    };
    if decanate(lon) == preferred { 15.0 } else { 0.0 }
}

/// Sthana bala breakdown with its audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SthanaBalaBreakdown {
    pub graha: Graha,
    pub dignity: DignityResult,
    pub house: HouseClass,
    pub saptavargaja: SaptavargajaBreakdown,
    pub ojhayugma: f64,
    pub drekkana: f64,
}

impl SthanaBalaBreakdown {
    /// Clamped component scores in report order.
    pub fn scores(&self) -> Vec<AxisScore> {
        vec![
            AxisScore::new(Component::Uccha, self.dignity.uccha_virupas),
            AxisScore::new(Component::Saptavargaja, self.saptavargaja.total),
            AxisScore::new(Component::Ojhayugma, self.ojhayugma),
            AxisScore::new(Component::Kendradi, self.house.virupas),
            AxisScore::new(Component::Drekkana, self.drekkana),
        ]
    }
}

/// Sthana bala for a single position.
pub fn sthana_bala(
    position: &PlanetPosition,
    placements: Option<&VargaPlacements>,
) -> Result<SthanaBalaBreakdown, BalaError> {
    let graha = position.graha;
    Ok(SthanaBalaBreakdown {
        graha,
        dignity: classify_dignity(graha, position.longitude),
        house: classify_house(position.house)?,
        saptavargaja: saptavargaja_bala(graha, position.longitude, placements),
        ojhayugma: ojhayugma_bala(graha, position.rashi),
        drekkana: drekkana_bala(graha, position.longitude),
    })
}
