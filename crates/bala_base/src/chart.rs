//! Chart snapshot: the read-only input to every strength evaluator.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BalaError;
use crate::graha::Graha;
use crate::house::whole_sign_house;
use crate::rashi::{Rashi, degrees_in_rashi, rashi_from_longitude};
use crate::util::normalize_360;
use crate::varga::VargaPlacements;

/// Julian day of the Unix epoch (1970-01-01T00:00:00 UT).
const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Geographic location of the birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    fn validate(&self) -> Result<(), BalaError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(BalaError::InvalidLocation("latitude out of [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(BalaError::InvalidLocation("longitude out of [-180, 180]"));
        }
        Ok(())
    }
}

/// One graha's position as produced by the ephemeris collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Ecliptic longitude in [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    /// House number 1..=12.
    pub house: u8,
    pub is_retrograde: bool,
    /// Signed speed in degrees/day.
    pub speed: f64,
}

impl PlanetPosition {
    /// Build a position, deriving the rashi from the longitude and the
    /// retrograde flag from the sign of the speed.
    pub fn new(graha: Graha, longitude: f64, house: u8, speed: f64) -> Result<Self, BalaError> {
        if !longitude.is_finite() {
            return Err(BalaError::NonFiniteLongitude(graha.english_name()));
        }
        if !(1..=12).contains(&house) {
            return Err(BalaError::InvalidHouse(house));
        }
        let longitude = normalize_360(longitude);
        Ok(Self {
            graha,
            longitude,
            rashi: rashi_from_longitude(longitude),
            house,
            is_retrograde: speed < 0.0,
            speed,
        })
    }

    /// Position with the house counted whole-sign from the ascendant.
    pub fn in_whole_sign_house(
        graha: Graha,
        longitude: f64,
        ascendant_lon: f64,
        speed: f64,
    ) -> Result<Self, BalaError> {
        if !ascendant_lon.is_finite() {
            return Err(BalaError::NonFiniteLongitude("Ascendant"));
        }
        Self::new(graha, longitude, whole_sign_house(longitude, ascendant_lon), speed)
    }

    /// Decimal degrees within the rashi.
    pub fn degrees_in_rashi(&self) -> f64 {
        degrees_in_rashi(self.longitude)
    }

    fn validate(&self) -> Result<(), BalaError> {
        if !self.longitude.is_finite() {
            return Err(BalaError::NonFiniteLongitude(self.graha.english_name()));
        }
        if !(0.0..360.0).contains(&self.longitude) {
            return Err(BalaError::LongitudeOutOfRange {
                body: self.graha.english_name(),
                longitude: self.longitude,
            });
        }
        let expected = rashi_from_longitude(self.longitude);
        if self.rashi != expected {
            return Err(BalaError::RashiMismatch {
                graha: self.graha,
                rashi: self.rashi,
                expected,
            });
        }
        if !(1..=12).contains(&self.house) {
            return Err(BalaError::InvalidHouse(self.house));
        }
        Ok(())
    }
}

/// Sunrise/sunset boundaries around the birth, resolved up front by the
/// almanac collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunWindow {
    pub previous_sunset: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub next_sunrise: DateTime<Utc>,
}

impl SunWindow {
    pub fn new(
        previous_sunset: DateTime<Utc>,
        sunrise: DateTime<Utc>,
        sunset: DateTime<Utc>,
        next_sunrise: DateTime<Utc>,
    ) -> Result<Self, BalaError> {
        if !(previous_sunset < sunrise && sunrise < sunset && sunset < next_sunrise) {
            return Err(BalaError::InvalidSunWindow);
        }
        Ok(Self {
            previous_sunset,
            sunrise,
            sunset,
            next_sunrise,
        })
    }

    /// Build from Julian days (UT).
    pub fn from_julian_days(
        previous_sunset_jd: f64,
        sunrise_jd: f64,
        sunset_jd: f64,
        next_sunrise_jd: f64,
    ) -> Result<Self, BalaError> {
        Self::new(
            jd_to_utc(previous_sunset_jd)?,
            jd_to_utc(sunrise_jd)?,
            jd_to_utc(sunset_jd)?,
            jd_to_utc(next_sunrise_jd)?,
        )
    }
}

/// Convert a Julian day (UT) to a UTC instant, rounded to the millisecond.
pub fn jd_to_utc(jd: f64) -> Result<DateTime<Utc>, BalaError> {
    if !jd.is_finite() {
        return Err(BalaError::InvalidJulianDay(jd));
    }
    let millis = ((jd - JD_UNIX_EPOCH) * 86_400_000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(BalaError::InvalidJulianDay(jd));
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(BalaError::InvalidJulianDay(jd))
}

/// Immutable chart input: positions, birth moment, location and almanac data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    ascendant_longitude: f64,
    birth: DateTime<FixedOffset>,
    location: GeoLocation,
    positions: Vec<PlanetPosition>,
    sun_window: Option<SunWindow>,
    #[serde(default)]
    varga_placements: BTreeMap<Graha, VargaPlacements>,
}

impl ChartSnapshot {
    /// Validate and build a snapshot. Positions are kept in graha order.
    pub fn new(
        ascendant_longitude: f64,
        birth: DateTime<FixedOffset>,
        location: GeoLocation,
        mut positions: Vec<PlanetPosition>,
    ) -> Result<Self, BalaError> {
        positions.sort_by_key(|p| p.graha);
        let snapshot = Self {
            ascendant_longitude: normalize_360(ascendant_longitude),
            birth,
            location,
            positions,
            sun_window: None,
            varga_placements: BTreeMap::new(),
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Attach the almanac's sunrise/sunset window.
    ///
    /// The window is checked by [`SunWindow::new`]; windows built through
    /// field access are rechecked by [`ChartSnapshot::validate`].
    pub fn with_sun_window(mut self, window: SunWindow) -> Self {
        self.sun_window = Some(window);
        self
    }

    /// Attach divisional placements for one graha.
    pub fn with_varga_placements(mut self, graha: Graha, placements: VargaPlacements) -> Self {
        self.varga_placements.insert(graha, placements);
        self
    }

    /// Structural checks: finite longitudes, valid houses and location,
    /// at most one position per graha.
    pub fn validate(&self) -> Result<(), BalaError> {
        if !self.ascendant_longitude.is_finite() {
            return Err(BalaError::NonFiniteLongitude("Ascendant"));
        }
        if !(0.0..360.0).contains(&self.ascendant_longitude) {
            return Err(BalaError::LongitudeOutOfRange {
                body: "Ascendant",
                longitude: self.ascendant_longitude,
            });
        }
        self.location.validate()?;
        if let Some(w) = &self.sun_window {
            SunWindow::new(w.previous_sunset, w.sunrise, w.sunset, w.next_sunrise)?;
        }
        let mut seen = [false; 9];
        for p in &self.positions {
            p.validate()?;
            let slot = &mut seen[p.graha.index() as usize];
            if *slot {
                return Err(BalaError::DuplicatePlanet(p.graha));
            }
            *slot = true;
        }
        Ok(())
    }

    pub fn ascendant_longitude(&self) -> f64 {
        self.ascendant_longitude
    }

    pub fn birth(&self) -> DateTime<FixedOffset> {
        self.birth
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }

    pub fn positions(&self) -> &[PlanetPosition] {
        &self.positions
    }

    pub fn position(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.graha == graha)
    }

    pub fn sun_window(&self) -> Option<&SunWindow> {
        self.sun_window.as_ref()
    }

    pub fn varga_placements(&self, graha: Graha) -> Option<&VargaPlacements> {
        self.varga_placements.get(&graha)
    }
}
