//! Rashi (zodiac sign) lookup from ecliptic longitude.
//!
//! 12 rashis of 30 deg each, starting from Mesha (Aries) at 0 deg.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Odd sign in the traditional 1-based count (Mesha, Mithuna, Simha, ...).
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }
}

/// Determine the rashi for an ecliptic longitude.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(lon_deg: f64) -> Rashi {
    let lon = normalize_360(lon_deg);
    let idx = ((lon / 30.0).floor() as u8).min(11);
    Rashi::from_index(idx)
}

/// Decimal degrees within the rashi, in [0, 30).
pub fn degrees_in_rashi(lon_deg: f64) -> f64 {
    let lon = normalize_360(lon_deg);
    lon - (lon / 30.0).floor() * 30.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesha_at_zero() {
        assert_eq!(rashi_from_longitude(0.0), Rashi::Mesha);
    }

    #[test]
    fn makara_at_298() {
        assert_eq!(rashi_from_longitude(298.0), Rashi::Makara);
        assert!((degrees_in_rashi(298.0) - 28.0).abs() < 1e-10);
    }

    #[test]
    fn boundary_belongs_to_next_sign() {
        assert_eq!(rashi_from_longitude(30.0), Rashi::Vrishabha);
        assert!(degrees_in_rashi(30.0).abs() < 1e-10);
    }

    #[test]
    fn negative_wraps() {
        assert_eq!(rashi_from_longitude(-1.0), Rashi::Meena);
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
        assert_eq!(Rashi::from_index(23), Rashi::Meena);
    }

    #[test]
    fn odd_even_parity() {
        assert!(Rashi::Mesha.is_odd());
        assert!(!Rashi::Vrishabha.is_odd());
        assert!(Rashi::Kumbha.is_odd());
        assert!(!Rashi::Meena.is_odd());
    }

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
    }
}
