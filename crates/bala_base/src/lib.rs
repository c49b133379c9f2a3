//! Classical planetary strength (bala) evaluation for a natal chart.
//!
//! This crate provides:
//! - Sthana bala (positional): uccha, saptavargaja, ojhayugma, kendradi, drekkana
//! - Kala bala (temporal): nathonnatha, paksha, tribhaga, hora-adi, ayana, yuddha
//! - Drig bala (aspectual): house-based aspect matrix and benefic/malefic netting
//!
//! All scores are in virupas (60 virupas = 1 rupa). Inputs arrive as a
//! [`ChartSnapshot`]; nothing here computes ephemerides or sunrise times.
//!
//! ```
//! use bala_base::{BalaConfig, Graha, PlanetPosition, sthana_bala};
//!
//! let mars = PlanetPosition::new(Graha::Mangal, 298.0, 10, 0.5).unwrap();
//! let sthana = sthana_bala(&mars, None).unwrap();
//! assert_eq!(sthana.dignity.uccha_virupas, 60.0);
//! assert!(BalaConfig::default().validate().is_ok());
//! ```

pub mod chart;
pub mod config;
pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod house;
pub mod kala;
pub mod rashi;
pub mod relationships;
pub mod sthana;
pub mod strength;
pub mod temporal;
pub mod util;
pub mod varga;

pub use chart::{ChartSnapshot, GeoLocation, PlanetPosition, SunWindow, jd_to_utc};
pub use config::{BalaConfig, RequiredOverrides};
pub use dignity::{Dignity, DignityResult, classify_dignity, uccha_bala};
pub use drishti::{
    AspectEdge, AspectEffect, AspectMatrix, AspectStrength, DrigBalaResult, DrigRating,
    HouseAspects, drig_bala, house_aspects, overall_drig_score,
};
pub use error::BalaError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
pub use house::{HouseCategory, HouseClass, classify_house, house_distance};
pub use kala::{KalaBalaBreakdown, PlanetaryWar, kala_bala, planetary_wars};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};
pub use sthana::{SthanaBalaBreakdown, sthana_bala};
pub use strength::{
    Axis, AxisScore, Component, PlanetStrengthResult, StrengthRating, VIRUPAS_PER_RUPA,
    aggregate, overall_axis_score,
};
pub use temporal::{DayNightSource, Degradation, TemporalContext, resolve_temporal_context};
pub use varga::{SAPTAVARGA, Varga, VargaPlacements, saptavargaja_bala};
