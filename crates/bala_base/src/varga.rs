//! Saptavargaja bala: dignity across the seven divisional charts.
//!
//! Each varga contributes `dignity points × coefficient`. The natal chart (D1)
//! is always read from the natal longitude. Other vargas come from caller
//! supplied placements; a missing placement scores as Neutral.

use serde::{Deserialize, Serialize};

use crate::dignity::{Dignity, varga_dignity};
use crate::graha::Graha;
use crate::rashi::{Rashi, degrees_in_rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// The seven divisional charts used for Saptavargaja.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D7,
    D9,
    D12,
    D30,
}

/// Saptavarga in scoring order.
pub const SAPTAVARGA: [Varga; 7] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D12,
    Varga::D30,
];

/// Upper bound of Saptavargaja bala: own sign (30) in every varga.
pub const SAPTAVARGAJA_MAX: f64 = 30.0 * 20.5;

impl Varga {
    /// Number of divisions per sign.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D12 => 12,
            Self::D30 => 30,
        }
    }

    /// Weight applied to the varga's dignity points.
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::D1 => 5.0,
            Self::D2 => 2.5,
            Self::D3 => 3.0,
            Self::D7 => 2.5,
            Self::D9 => 4.5,
            Self::D12 => 2.0,
            Self::D30 => 1.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D12 => "Dwadashamsha",
            Self::D30 => "Trimshamsha",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Divisional sign mapping
// ---------------------------------------------------------------------------

/// Target rashi index for division `div_idx` of natal rashi `rashi_idx`.
fn target_rashi(varga: Varga, rashi_idx: u8, div_idx: u16) -> u8 {
    // 0-indexed: 0,2,4.. are odd rashis (1-based)
    let is_odd = rashi_idx % 2 == 0;
    let start: u16 = match varga {
        Varga::D1 => return rashi_idx,
        // Parashari cyclic hora
        Varga::D2 => (rashi_idx as u16 * 2) % 12,
        // Trine progression
        Varga::D3 => return ((rashi_idx as u16 + div_idx * 4) % 12) as u8,
        Varga::D7 => {
            if is_odd {
                rashi_idx as u16
            } else {
                rashi_idx as u16 + 6
            }
        }
        // Element start: fire Mesha, earth Makara, air Tula, water Karka
        Varga::D9 => match rashi_idx % 4 {
            0 => 0,
            1 => 9,
            2 => 6,
            _ => 3,
        },
        Varga::D12 => rashi_idx as u16,
        Varga::D30 => {
            if is_odd {
                0
            } else {
                11
            }
        }
    };
    ((start + div_idx) % 12) as u8
}

/// Sign occupied in `varga` by a point at `lon`.
pub fn varga_rashi(lon: f64, varga: Varga) -> Rashi {
    let lon = normalize_360(lon);
    let rashi_idx = rashi_from_longitude(lon).index();
    let divisions = varga.divisions();
    let deg_per_div = 30.0 / divisions as f64;
    let div_idx = ((degrees_in_rashi(lon) / deg_per_div).floor() as u16).min(divisions - 1);
    Rashi::from_index(target_rashi(varga, rashi_idx, div_idx))
}

// ---------------------------------------------------------------------------
// Placements
// ---------------------------------------------------------------------------

/// Per-varga signs for one graha, as supplied by the chart builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VargaPlacements {
    rashis: [Option<Rashi>; 7],
}

impl VargaPlacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, varga: Varga, rashi: Rashi) -> Self {
        self.set(varga, rashi);
        self
    }

    pub fn set(&mut self, varga: Varga, rashi: Rashi) {
        self.rashis[varga.slot()] = Some(rashi);
    }

    pub fn get(&self, varga: Varga) -> Option<Rashi> {
        self.rashis[varga.slot()]
    }

    /// Derive every varga sign from a natal longitude.
    pub fn from_longitude(lon: f64) -> Self {
        let mut placements = Self::default();
        for varga in SAPTAVARGA {
            placements.set(varga, varga_rashi(lon, varga));
        }
        placements
    }

    /// Fill empty slots from `other`, keeping explicit entries.
    pub fn or_from(mut self, other: &Self) -> Self {
        for (slot, fallback) in self.rashis.iter_mut().zip(other.rashis) {
            if slot.is_none() {
                *slot = fallback;
            }
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// One varga's contribution to Saptavargaja bala.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VargaContribution {
    pub varga: Varga,
    /// None when no placement was available.
    pub rashi: Option<Rashi>,
    pub dignity: Option<Dignity>,
    pub points: f64,
    pub coefficient: f64,
    pub virupas: f64,
}

/// Saptavargaja breakdown for one graha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaptavargajaBreakdown {
    pub contributions: Vec<VargaContribution>,
    pub total: f64,
}

/// Saptavargaja bala for a graha at natal longitude `lon`.
///
/// D1 checks moolatrikona using the natal degree. Other vargas use the sign
/// only. A varga with no placement contributes `Neutral points × coefficient`.
pub fn saptavargaja_bala(
    graha: Graha,
    lon: f64,
    placements: Option<&VargaPlacements>,
) -> SaptavargajaBreakdown {
    let contributions: Vec<VargaContribution> = SAPTAVARGA
        .iter()
        .map(|&varga| {
            let (rashi, dignity) = if varga == Varga::D1 {
                let rashi = rashi_from_longitude(lon);
                let dignity = varga_dignity(graha, rashi, Some(degrees_in_rashi(lon)));
                (Some(rashi), Some(dignity))
            } else {
                let rashi = placements.and_then(|p| p.get(varga));
                (rashi, rashi.map(|r| varga_dignity(graha, r, None)))
            };
            let points = dignity.unwrap_or(Dignity::Neutral).varga_points();
            let coefficient = varga.coefficient();
            VargaContribution {
                varga,
                rashi,
                dignity,
                points,
                coefficient,
                virupas: points * coefficient,
            }
        })
        .collect();

    let total = contributions
        .iter()
        .map(|c| c.virupas)
        .sum::<f64>()
        .clamp(0.0, SAPTAVARGAJA_MAX);
    SaptavargajaBreakdown {
        contributions,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn coefficients_sum() {
        let sum: f64 = SAPTAVARGA.iter().map(|v| v.coefficient()).sum();
        assert!((sum - 20.5).abs() < EPS);
    }

    #[test]
    fn d1_identity() {
        assert_eq!(varga_rashi(45.0, Varga::D1), Rashi::Vrishabha);
    }

    #[test]
    fn d2_parashari_cycle() {
        // Mesha first half → Mesha, second half → Vrishabha
        assert_eq!(varga_rashi(10.0, Varga::D2), Rashi::Mesha);
        assert_eq!(varga_rashi(20.0, Varga::D2), Rashi::Vrishabha);
        // Vrishabha starts at Mithuna
        assert_eq!(varga_rashi(35.0, Varga::D2), Rashi::Mithuna);
    }

    #[test]
    fn d3_trines() {
        // Mesha: Mesha, Simha, Dhanu
        assert_eq!(varga_rashi(5.0, Varga::D3), Rashi::Mesha);
        assert_eq!(varga_rashi(15.0, Varga::D3), Rashi::Simha);
        assert_eq!(varga_rashi(25.0, Varga::D3), Rashi::Dhanu);
    }

    #[test]
    fn d7_even_sign_offset() {
        // Vrishabha (even) starts from its 7th, Vrischika
        assert_eq!(varga_rashi(30.5, Varga::D7), Rashi::Vrischika);
        assert_eq!(varga_rashi(0.5, Varga::D7), Rashi::Mesha);
    }

    #[test]
    fn d9_element_starts() {
        assert_eq!(varga_rashi(0.5, Varga::D9), Rashi::Mesha);
        assert_eq!(varga_rashi(30.5, Varga::D9), Rashi::Makara);
        assert_eq!(varga_rashi(60.5, Varga::D9), Rashi::Tula);
        assert_eq!(varga_rashi(90.5, Varga::D9), Rashi::Karka);
        // Last navamsha of Mesha → Dhanu
        assert_eq!(varga_rashi(29.9, Varga::D9), Rashi::Dhanu);
    }

    #[test]
    fn d12_from_sign() {
        assert_eq!(varga_rashi(122.6, Varga::D12), Rashi::Kanya);
    }

    #[test]
    fn d30_odd_even() {
        assert_eq!(varga_rashi(0.5, Varga::D30), Rashi::Mesha);
        assert_eq!(varga_rashi(30.5, Varga::D30), Rashi::Meena);
    }

    #[test]
    fn missing_placements_score_neutral() {
        // Sun at 15 Leo: D1 moolatrikona 22.5*5, rest neutral
        let b = saptavargaja_bala(Graha::Surya, 135.0, None);
        let expected = 22.5 * 5.0 + 10.0 * (20.5 - 5.0);
        assert!((b.total - expected).abs() < EPS);
        assert_eq!(b.contributions.len(), 7);
        assert!(b.contributions[1..].iter().all(|c| c.rashi.is_none() && c.dignity.is_none()));
    }

    #[test]
    fn explicit_placements_used() {
        let p = VargaPlacements::new()
            .with(Varga::D9, Rashi::Mesha)
            .with(Varga::D30, Rashi::Simha);
        let b = saptavargaja_bala(Graha::Surya, 135.0, Some(&p));
        let d9 = b.contributions.iter().find(|c| c.varga == Varga::D9).unwrap();
        assert_eq!(d9.dignity, Some(Dignity::Exalted));
        assert!((d9.virupas - 20.0 * 4.5).abs() < EPS);
        let d30 = b.contributions.iter().find(|c| c.varga == Varga::D30).unwrap();
        // Sign-only vargas never see moolatrikona
        assert_eq!(d30.dignity, Some(Dignity::OwnSign));
    }

    #[test]
    fn debilitated_varga_uses_lord_relationship() {
        let p = VargaPlacements::new().with(Varga::D9, Rashi::Tula);
        let b = saptavargaja_bala(Graha::Surya, 135.0, Some(&p));
        let d9 = b.contributions.iter().find(|c| c.varga == Varga::D9).unwrap();
        assert_eq!(d9.dignity, Some(Dignity::Enemy));
    }

    #[test]
    fn derived_placements_fill_gaps() {
        let explicit = VargaPlacements::new().with(Varga::D9, Rashi::Meena);
        let merged = explicit.or_from(&VargaPlacements::from_longitude(135.0));
        assert_eq!(merged.get(Varga::D9), Some(Rashi::Meena));
        assert_eq!(merged.get(Varga::D3), Some(varga_rashi(135.0, Varga::D3)));
    }

    #[test]
    fn total_within_bounds() {
        for i in 0..72 {
            let lon = i as f64 * 5.0 + 0.3;
            let p = VargaPlacements::from_longitude(lon);
            let b = saptavargaja_bala(Graha::Shani, lon, Some(&p));
            assert!(b.total >= 0.0 && b.total <= SAPTAVARGAJA_MAX);
        }
    }
}
