//! House (bhava) angularity classification for Kendradi bala.

use serde::{Deserialize, Serialize};

use crate::error::BalaError;
use crate::rashi::rashi_from_longitude;

/// Angular / succedent / cadent house category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseCategory {
    /// Houses 1, 4, 7, 10.
    Kendra,
    /// Houses 2, 5, 8, 11.
    Panapara,
    /// Houses 3, 6, 9, 12.
    Apoklima,
}

impl HouseCategory {
    /// Kendradi virupas for the category.
    pub const fn virupas(self) -> f64 {
        match self {
            Self::Kendra => 60.0,
            Self::Panapara => 30.0,
            Self::Apoklima => 15.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Kendra => "Kendra",
            Self::Panapara => "Panapara",
            Self::Apoklima => "Apoklima",
        }
    }
}

/// Classified house with its fixed Kendradi weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseClass {
    pub house: u8,
    pub category: HouseCategory,
    pub virupas: f64,
}

/// Classify a 1-based house number.
pub fn classify_house(house: u8) -> Result<HouseClass, BalaError> {
    let category = match house {
        1 | 4 | 7 | 10 => HouseCategory::Kendra,
        2 | 5 | 8 | 11 => HouseCategory::Panapara,
        3 | 6 | 9 | 12 => HouseCategory::Apoklima,
        _ => return Err(BalaError::InvalidHouse(house)),
    };
    Ok(HouseClass {
        house,
        category,
        virupas: category.virupas(),
    })
}

/// Kendradi bala for a house number.
pub fn kendradi_bala(house: u8) -> Result<f64, BalaError> {
    classify_house(house).map(|c| c.virupas)
}

/// Whole-sign house of `lon` counted from the ascendant's sign (1..=12).
pub fn whole_sign_house(lon: f64, ascendant_lon: f64) -> u8 {
    let planet = rashi_from_longitude(lon).index();
    let asc = rashi_from_longitude(ascendant_lon).index();
    (planet + 12 - asc) % 12 + 1
}

/// Forward house offset from `from` to `to`: `((to - from + 11) mod 12) + 1`.
///
/// Always in 1..=12. The same house yields 12, which aspect rules read as a
/// conjunction.
pub fn house_distance(from: u8, to: u8) -> u8 {
    let from = (from.clamp(1, 12) - 1) as i16;
    let to = (to.clamp(1, 12) - 1) as i16;
    ((to - from + 12 - 1).rem_euclid(12) + 1) as u8
}
