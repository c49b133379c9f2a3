//! Temporal context: day/night, paksha, tribhaga and the lordship chain.
//!
//! Resolved once per chart and shared read-only by every temporal evaluator.
//! When almanac data is missing the resolver falls back to a fixed local
//! clock window and records the degradation in the context.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chart::{ChartSnapshot, SunWindow};
use crate::config::BalaConfig;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Local clock hour at which the planetary-hour sequence restarts.
pub const HORA_DAY_START_HOUR: u32 = 6;

/// Planetary-hour order (descending orbital period).
pub const HORA_ORDER: [Graha; 7] = [
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
];

/// Year-lord cycle starting at the epoch year.
const YEAR_LORDS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Month lords for January..December.
const MONTH_LORDS: [Graha; 12] = [
    Graha::Mangal,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Surya,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Shani,
    Graha::Guru,
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Bright (waxing) half, elongation < 180.
    Shukla,
    /// Dark (waning) half.
    Krishna,
}

/// One of the six day/night thirds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tribhaga {
    DayFirst,
    DaySecond,
    DayThird,
    NightFirst,
    NightSecond,
    NightThird,
}

impl Tribhaga {
    fn from_third(is_day: bool, third: u8) -> Self {
        match (is_day, third) {
            (true, 0) => Self::DayFirst,
            (true, 1) => Self::DaySecond,
            (true, _) => Self::DayThird,
            (false, 0) => Self::NightFirst,
            (false, 1) => Self::NightSecond,
            (false, _) => Self::NightThird,
        }
    }

    /// Ruling graha of the period.
    ///
    /// Day: Mercury, Sun, Saturn. Night: Moon, Venus, Mars.
    pub const fn ruler(self) -> Graha {
        match self {
            Self::DayFirst => Graha::Buddh,
            Self::DaySecond => Graha::Surya,
            Self::DayThird => Graha::Shani,
            Self::NightFirst => Graha::Chandra,
            Self::NightSecond => Graha::Shukra,
            Self::NightThird => Graha::Mangal,
        }
    }

    pub const fn is_day(self) -> bool {
        matches!(self, Self::DayFirst | Self::DaySecond | Self::DayThird)
    }
}

/// Where the day/night split came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayNightSource {
    SunWindow,
    ClockFallback,
}

/// A fallback taken while resolving the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Degradation {
    /// No sunrise/sunset window was supplied.
    MissingSunWindow,
    /// The supplied window does not bracket the birth instant.
    SunWindowOutOfRange,
    /// Sun or Moon position missing; elongation taken as 0.
    MissingLuminary,
}

/// Temporal context shared by all temporal evaluators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalContext {
    pub is_day: bool,
    /// Moon − Sun, in [0, 360).
    pub elongation: f64,
    pub paksha: Paksha,
    /// Tithi within the paksha, 1..=15.
    pub tithi: u8,
    pub tribhaga: Tribhaga,
    /// Position within the active day or night span, in [0, 1).
    pub span_fraction: f64,
    pub year_lord: Graha,
    pub month_lord: Graha,
    pub day_lord: Graha,
    pub hora_lord: Graha,
    pub day_night_source: DayNightSource,
    pub degradations: Vec<Degradation>,
}

impl TemporalContext {
    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Lordship chain
// ---------------------------------------------------------------------------

/// Year lord: 7-cycle indexed by `(year - epoch) mod 7`.
pub fn year_lord(year: i32, epoch: i32) -> Graha {
    let idx = (i64::from(year) - i64::from(epoch)).rem_euclid(7) as usize;
    YEAR_LORDS[idx]
}

/// Month lord for a 1-based month. Out-of-range months wrap.
pub fn month_lord(month: u32) -> Graha {
    MONTH_LORDS[(month.saturating_sub(1) % 12) as usize]
}

/// Weekday lord.
pub const fn day_lord(weekday: Weekday) -> Graha {
    match weekday {
        Weekday::Sun => Graha::Surya,
        Weekday::Mon => Graha::Chandra,
        Weekday::Tue => Graha::Mangal,
        Weekday::Wed => Graha::Buddh,
        Weekday::Thu => Graha::Guru,
        Weekday::Fri => Graha::Shukra,
        Weekday::Sat => Graha::Shani,
    }
}

fn hora_position(graha: Graha) -> usize {
    HORA_ORDER.iter().position(|g| *g == graha).unwrap_or(0)
}

/// Planetary-hour lord for a local weekday and clock hour.
///
/// The sequence starts at the day lord at 06:00 and advances one lord per
/// hour. Hours before 06:00 continue the previous weekday's sequence.
pub fn hora_lord(weekday: Weekday, hour: u32) -> Graha {
    let hour = hour % 24;
    let (base, elapsed) = if hour >= HORA_DAY_START_HOUR {
        (day_lord(weekday), hour - HORA_DAY_START_HOUR)
    } else {
        (day_lord(weekday.pred()), hour + 24 - HORA_DAY_START_HOUR)
    };
    HORA_ORDER[(hora_position(base) + elapsed as usize) % 7]
}

// ---------------------------------------------------------------------------
// Lunar phase
// ---------------------------------------------------------------------------

/// Moon − Sun elongation in [0, 360).
pub fn lunar_elongation(sun_lon: f64, moon_lon: f64) -> f64 {
    normalize_360(moon_lon - sun_lon)
}

pub fn paksha_from_elongation(elongation: f64) -> Paksha {
    if normalize_360(elongation) < 180.0 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}

/// Tithi within the paksha: `floor(elongation / 12) mod 15 + 1`.
pub fn tithi_in_paksha(elongation: f64) -> u8 {
    ((normalize_360(elongation) / 12.0).floor() as u8).min(29) % 15 + 1
}

// ---------------------------------------------------------------------------
// Day / night and tribhaga
// ---------------------------------------------------------------------------

fn span_fraction(t: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let span = (end - start).num_milliseconds();
    if span <= 0 {
        return 0.0;
    }
    ((t - start).num_milliseconds() as f64 / span as f64).clamp(0.0, 1.0)
}

fn third_of(fraction: f64) -> u8 {
    ((fraction * 3.0).floor() as u8).min(2)
}

/// Day/night split against an almanac window. Day is `[sunrise, sunset)`.
///
/// Returns None when the window does not bracket the instant.
pub fn tribhaga_from_window(birth: DateTime<Utc>, window: &SunWindow) -> Option<(Tribhaga, f64)> {
    let (is_day, fraction) = if birth >= window.sunrise && birth < window.sunset {
        (true, span_fraction(birth, window.sunrise, window.sunset))
    } else if birth < window.sunrise && birth >= window.previous_sunset {
        (false, span_fraction(birth, window.previous_sunset, window.sunrise))
    } else if birth >= window.sunset && birth < window.next_sunrise {
        (false, span_fraction(birth, window.sunset, window.next_sunrise))
    } else {
        return None;
    };
    Some((Tribhaga::from_third(is_day, third_of(fraction)), fraction))
}

/// Day/night split from the local clock with a fixed `[start, end)` day.
pub fn tribhaga_from_clock(
    birth: DateTime<FixedOffset>,
    day_start_hour: u32,
    day_end_hour: u32,
) -> (Tribhaga, f64) {
    let h = birth.hour() as f64 + birth.minute() as f64 / 60.0 + birth.second() as f64 / 3600.0;
    let start = day_start_hour as f64;
    let end = day_end_hour as f64;
    let day_len = end - start;
    let night_len = 24.0 - day_len;

    let (is_day, fraction) = if h >= start && h < end {
        (true, (h - start) / day_len)
    } else if h >= end {
        (false, (h - end) / night_len)
    } else {
        (false, (h + 24.0 - end) / night_len)
    };
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    (Tribhaga::from_third(is_day, third_of(fraction)), fraction)
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Resolve the temporal context for a chart.
pub fn resolve_temporal_context(chart: &ChartSnapshot, config: &BalaConfig) -> TemporalContext {
    let birth = chart.birth();
    let mut degradations = Vec::new();

    let window_split = match chart.sun_window() {
        Some(window) => {
            let split = tribhaga_from_window(birth.with_timezone(&Utc), window);
            if split.is_none() {
                warn!(birth = %birth, "sun window does not bracket birth, using clock fallback");
                degradations.push(Degradation::SunWindowOutOfRange);
            }
            split
        }
        None => {
            warn!(birth = %birth, "no sun window supplied, using clock fallback");
            degradations.push(Degradation::MissingSunWindow);
            None
        }
    };
    let ((tribhaga, span_fraction), day_night_source) = match window_split {
        Some(split) => (split, DayNightSource::SunWindow),
        None => (
            tribhaga_from_clock(
                birth,
                config.fallback_day_start_hour,
                config.fallback_day_end_hour,
            ),
            DayNightSource::ClockFallback,
        ),
    };

    let elongation = match (chart.position(Graha::Surya), chart.position(Graha::Chandra)) {
        (Some(sun), Some(moon)) => lunar_elongation(sun.longitude, moon.longitude),
        _ => {
            warn!("sun or moon position missing, lunar elongation taken as 0");
            degradations.push(Degradation::MissingLuminary);
            0.0
        }
    };

    TemporalContext {
        is_day: tribhaga.is_day(),
        elongation,
        paksha: paksha_from_elongation(elongation),
        tithi: tithi_in_paksha(elongation),
        tribhaga,
        span_fraction,
        year_lord: year_lord(birth.year(), config.hora_epoch_year),
        month_lord: month_lord(birth.month()),
        day_lord: day_lord(birth.weekday()),
        hora_lord: hora_lord(birth.weekday(), birth.hour()),
        day_night_source,
        degradations,
    }
}
