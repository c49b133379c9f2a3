//! Engine configuration.
//!
//! The classical tables are compile-time constants; configuration only
//! carries overrides and tunable thresholds. Parsed from TOML, no file I/O.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::drishti::classical_aspect_virupas;
use crate::error::BalaError;
use crate::graha::Graha;
use crate::strength::{Axis, required_virupas};

/// Required virupas for a graha with no table entry.
pub const DEFAULT_REQUIRED_VIRUPAS: f64 = 133.0;

/// Per-axis overrides of the required-strength tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredOverrides {
    pub sthana: BTreeMap<Graha, f64>,
    pub kala: BTreeMap<Graha, f64>,
}

/// Configuration for a strength analysis.
///
/// # Examples
///
/// ```
/// use bala_base::BalaConfig;
///
/// let config = BalaConfig::default();
/// assert_eq!(config.obliquity_deg, 23.45);
///
/// let config = BalaConfig::from_toml_str("war_orb_deg = 4.0").unwrap();
/// assert_eq!(config.war_orb_deg, 4.0);
/// assert_eq!(config.full_war_orb_deg, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalaConfig {
    /// Replacement required-virupas entries, per axis.
    /// Default: empty (classical tables apply).
    pub required_overrides: RequiredOverrides,

    /// Replacement base virupas for aspect casters.
    /// Default: empty (classical table).
    pub aspect_virupas_overrides: BTreeMap<Graha, f64>,

    /// Obliquity of the ecliptic used for Ayana declination.
    /// Default: 23.45
    pub obliquity_deg: f64,

    /// Separation within which war-capable grahas are at war.
    /// Default: 5.0
    pub war_orb_deg: f64,

    /// Separation at or below which a war scores the full ±30.
    /// Default: 1.0
    pub full_war_orb_deg: f64,

    /// Local clock hour treated as sunrise when no sun window is supplied.
    /// Default: 6
    pub fallback_day_start_hour: u32,

    /// Local clock hour treated as sunset when no sun window is supplied.
    /// Default: 18
    pub fallback_day_end_hour: u32,

    /// Year whose lord starts the 7-year cycle (Sun).
    /// Default: 2000
    pub hora_epoch_year: i32,

    /// Derive divisional signs from the natal longitude when the snapshot
    /// carries none. Default: false (missing vargas score Neutral).
    pub derive_missing_vargas: bool,
}

impl Default for BalaConfig {
    /// Classical settings:
    ///
    /// - Obliquity 23.45 deg
    /// - War orb 5 deg, full war at 1 deg
    /// - Fallback day 06:00-18:00 local clock
    /// - Year-lord epoch 2000
    fn default() -> Self {
        Self {
            required_overrides: RequiredOverrides::default(),
            aspect_virupas_overrides: BTreeMap::new(),
            obliquity_deg: 23.45,
            war_orb_deg: 5.0,
            full_war_orb_deg: 1.0,
            fallback_day_start_hour: 6,
            fallback_day_end_hour: 18,
            hora_epoch_year: 2000,
            derive_missing_vargas: false,
        }
    }
}

impl BalaConfig {
    /// Parse and validate a TOML document. Absent keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, BalaError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, BalaError> {
        toml::to_string(self).map_err(|e| BalaError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), BalaError> {
        let overrides = self
            .required_overrides
            .sthana
            .iter()
            .chain(&self.required_overrides.kala)
            .chain(&self.aspect_virupas_overrides);
        for (graha, value) in overrides {
            if !value.is_finite() || *value < 0.0 {
                return Err(BalaError::InvalidConfig(format!(
                    "override for {} must be a non-negative number, got {value}",
                    graha.english_name()
                )));
            }
        }
        if !(self.obliquity_deg > 0.0 && self.obliquity_deg < 90.0) {
            return Err(BalaError::InvalidConfig(format!(
                "obliquity_deg must be in (0, 90), got {}",
                self.obliquity_deg
            )));
        }
        if !(self.full_war_orb_deg >= 0.0
            && self.full_war_orb_deg <= self.war_orb_deg
            && self.war_orb_deg <= 180.0)
        {
            return Err(BalaError::InvalidConfig(format!(
                "expected 0 <= full_war_orb_deg ({}) <= war_orb_deg ({}) <= 180",
                self.full_war_orb_deg, self.war_orb_deg
            )));
        }
        if self.fallback_day_start_hour >= self.fallback_day_end_hour
            || self.fallback_day_end_hour > 24
        {
            return Err(BalaError::InvalidConfig(format!(
                "fallback day hours must satisfy start < end <= 24, got {}..{}",
                self.fallback_day_start_hour, self.fallback_day_end_hour
            )));
        }
        Ok(())
    }

    /// Required virupas for `graha` on `axis`: override, then the axis table,
    /// then 133.
    pub fn required_virupas(&self, axis: Axis, graha: Graha) -> f64 {
        let overrides = match axis {
            Axis::Sthana => &self.required_overrides.sthana,
            Axis::Kala => &self.required_overrides.kala,
        };
        overrides
            .get(&graha)
            .copied()
            .or_else(|| required_virupas(axis, graha))
            .unwrap_or(DEFAULT_REQUIRED_VIRUPAS)
    }

    /// Base aspect virupas for a caster: override, then the classical table.
    pub fn aspect_base_virupas(&self, graha: Graha) -> f64 {
        self.aspect_virupas_overrides
            .get(&graha)
            .copied()
            .unwrap_or_else(|| classical_aspect_virupas(graha))
    }
}
