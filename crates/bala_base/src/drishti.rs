//! Graha drishti (house-based aspects) and Drig bala netting.
//!
//! Every caster aspects the 7th house-distance fully and its own house
//! (distance 12) as a conjunction. Mars, Jupiter and Saturn add their
//! special aspects. The matrix is built for all positions before any
//! per-graha netting.

use serde::{Deserialize, Serialize};

use crate::chart::PlanetPosition;
use crate::config::BalaConfig;
use crate::graha::Graha;
use crate::house::house_distance;
use crate::relationships::{BeneficNature, natural_benefic_malefic};
use crate::util::mean_or;

/// Documented range of net Drig bala.
pub const DRIG_NET_RANGE: (f64, f64) = (-60.0, 60.0);

/// Fractional strength of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectStrength {
    Full,
    ThreeQuarter,
    Half,
    Quarter,
    None,
}

impl AspectStrength {
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::ThreeQuarter => 0.75,
            Self::Half => 0.5,
            Self::Quarter => 0.25,
            Self::None => 0.0,
        }
    }
}

/// Benefic / malefic tag carried by an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectEffect {
    Benefic,
    Malefic,
    /// Contributes to neither side of the net.
    Neutral,
}

/// Classical base virupas of an aspect caster.
///
/// Jupiter/Venus 15, Moon 10, Mercury 8, Saturn/Mars 10, Sun 5, Rahu/Ketu 8.
pub const fn classical_aspect_virupas(graha: Graha) -> f64 {
    match graha {
        Graha::Guru | Graha::Shukra => 15.0,
        Graha::Chandra => 10.0,
        Graha::Buddh => 8.0,
        Graha::Shani | Graha::Mangal => 10.0,
        Graha::Surya => 5.0,
        Graha::Rahu | Graha::Ketu => 8.0,
    }
}

/// Effect tag from the caster's natural nature.
pub const fn aspect_effect(graha: Graha) -> AspectEffect {
    match natural_benefic_malefic(graha) {
        BeneficNature::Benefic => AspectEffect::Benefic,
        BeneficNature::Malefic => AspectEffect::Malefic,
    }
}

/// Special aspects: Mars 4 (¾) and 8, Jupiter 5 (½) and 9, Saturn 3 (¾) and 10.
pub const fn special_aspect(graha: Graha, distance: u8) -> Option<AspectStrength> {
    match (graha, distance) {
        (Graha::Mangal, 4) => Some(AspectStrength::ThreeQuarter),
        (Graha::Mangal, 8) => Some(AspectStrength::Full),
        (Graha::Guru, 5) => Some(AspectStrength::Half),
        (Graha::Guru, 9) => Some(AspectStrength::Full),
        (Graha::Shani, 3) => Some(AspectStrength::ThreeQuarter),
        (Graha::Shani, 10) => Some(AspectStrength::Full),
        _ => None,
    }
}

/// Aspect strength at a house distance.
///
/// Checked in order: 7th → special → same house (12 or 0) → none.
pub const fn aspect_strength(graha: Graha, distance: u8) -> AspectStrength {
    if distance == 7 {
        return AspectStrength::Full;
    }
    if let Some(s) = special_aspect(graha, distance) {
        return s;
    }
    if distance == 12 || distance == 0 {
        return AspectStrength::Full;
    }
    AspectStrength::None
}

/// True if the aspect at `distance` comes from a special-aspect rule.
pub const fn is_special_aspect(graha: Graha, distance: u8) -> bool {
    distance != 7 && special_aspect(graha, distance).is_some()
}

/// One directed aspect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectEdge {
    pub source: Graha,
    pub target: Graha,
    /// Forward house distance, 1..=12.
    pub house_distance: u8,
    pub strength: AspectStrength,
    pub fraction: f64,
    pub effect: AspectEffect,
    pub is_special: bool,
    /// Base virupas of the caster times the fraction.
    pub virupas: f64,
}

fn edge(source: &PlanetPosition, target_house: u8, config: &BalaConfig) -> Option<(u8, AspectStrength, f64)> {
    let distance = house_distance(source.house, target_house);
    let strength = aspect_strength(source.graha, distance);
    if strength == AspectStrength::None {
        return None;
    }
    let virupas = config.aspect_base_virupas(source.graha) * strength.fraction();
    Some((distance, strength, virupas))
}

/// Every directed aspect between the positions of one chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectMatrix {
    edges: Vec<AspectEdge>,
}

impl AspectMatrix {
    /// Build the full matrix. Self-pairs are skipped; edges are ordered by
    /// source then target in position order.
    pub fn build(positions: &[PlanetPosition], config: &BalaConfig) -> Self {
        let mut edges = Vec::new();
        for source in positions {
            for target in positions {
                if source.graha == target.graha {
                    continue;
                }
                if let Some((house_distance, strength, virupas)) = edge(source, target.house, config) {
                    edges.push(AspectEdge {
                        source: source.graha,
                        target: target.graha,
                        house_distance,
                        strength,
                        fraction: strength.fraction(),
                        effect: aspect_effect(source.graha),
                        is_special: is_special_aspect(source.graha, house_distance),
                        virupas,
                    });
                }
            }
        }
        Self { edges }
    }

    pub fn edges(&self) -> &[AspectEdge] {
        &self.edges
    }

    /// Aspects received by `graha`.
    pub fn received_by(&self, graha: Graha) -> impl Iterator<Item = &AspectEdge> {
        self.edges.iter().filter(move |e| e.target == graha)
    }

    /// Aspects cast by `graha`.
    pub fn cast_by(&self, graha: Graha) -> impl Iterator<Item = &AspectEdge> {
        self.edges.iter().filter(move |e| e.source == graha)
    }

    /// Aspect from `source` onto `target`, if any.
    pub fn between(&self, source: Graha, target: Graha) -> Option<&AspectEdge> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
    }
}

// ---------------------------------------------------------------------------
// Drig bala
// ---------------------------------------------------------------------------

/// Rating band for net Drig bala.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrigRating {
    Excellent,
    Strong,
    Neutral,
    Weak,
    VeryWeak,
}

impl DrigRating {
    /// ≥20 Excellent, ≥10 Strong, ≥0 Neutral, ≥−10 Weak, else Very Weak.
    pub fn from_net(net: f64) -> Self {
        if net >= 20.0 {
            Self::Excellent
        } else if net >= 10.0 {
            Self::Strong
        } else if net >= 0.0 {
            Self::Neutral
        } else if net >= -10.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Strong => "Strong",
            Self::Neutral => "Neutral",
            Self::Weak => "Weak",
            Self::VeryWeak => "Very Weak",
        }
    }
}

/// Net aspectual strength of one graha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrigBalaResult {
    pub graha: Graha,
    pub benefic_virupas: f64,
    pub malefic_virupas: f64,
    /// Benefic minus malefic, clamped to [-60, 60].
    pub net_virupas: f64,
    pub rating: DrigRating,
    pub received: Vec<AspectEdge>,
    pub cast: Vec<AspectEdge>,
}

fn net_by_effect<'a>(edges: impl Iterator<Item = &'a AspectEdge>) -> (f64, f64) {
    edges.fold((0.0, 0.0), |(b, m), e| match e.effect {
        AspectEffect::Benefic => (b + e.virupas, m),
        AspectEffect::Malefic => (b, m + e.virupas),
        AspectEffect::Neutral => (b, m),
    })
}

/// Drig bala for `graha` from a built matrix.
pub fn drig_bala(graha: Graha, matrix: &AspectMatrix) -> DrigBalaResult {
    let received: Vec<AspectEdge> = matrix.received_by(graha).copied().collect();
    let cast: Vec<AspectEdge> = matrix.cast_by(graha).copied().collect();
    let (benefic_virupas, malefic_virupas) = net_by_effect(received.iter());
    let net_virupas = (benefic_virupas - malefic_virupas).clamp(DRIG_NET_RANGE.0, DRIG_NET_RANGE.1);
    DrigBalaResult {
        graha,
        benefic_virupas,
        malefic_virupas,
        net_virupas,
        rating: DrigRating::from_net(net_virupas),
        received,
        cast,
    }
}

/// Overall aspect score: mean net mapped from [-30, 30] onto [0, 100].
/// 50.0 when no graha was evaluated.
pub fn overall_drig_score(results: &[DrigBalaResult]) -> f64 {
    if results.is_empty() {
        return 50.0;
    }
    let nets: Vec<f64> = results.iter().map(|r| r.net_virupas).collect();
    ((mean_or(&nets, 0.0) + 30.0) / 60.0 * 100.0).clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// House aspects
// ---------------------------------------------------------------------------

/// Aspect cast onto a house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseAspect {
    pub source: Graha,
    pub house_distance: u8,
    pub strength: AspectStrength,
    pub effect: AspectEffect,
    pub is_special: bool,
    pub virupas: f64,
}

/// All aspects falling on one house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseAspects {
    pub house: u8,
    pub aspects: Vec<HouseAspect>,
    pub benefic_count: usize,
    pub malefic_count: usize,
    pub net_virupas: f64,
}

/// Aspects cast onto `house` (1..=12) by the given positions.
pub fn house_aspects(positions: &[PlanetPosition], house: u8, config: &BalaConfig) -> HouseAspects {
    let aspects: Vec<HouseAspect> = positions
        .iter()
        .filter_map(|p| {
            edge(p, house, config).map(|(house_distance, strength, virupas)| HouseAspect {
                source: p.graha,
                house_distance,
                strength,
                effect: aspect_effect(p.graha),
                is_special: is_special_aspect(p.graha, house_distance),
                virupas,
            })
        })
        .collect();

    let count = |effect| aspects.iter().filter(|a| a.effect == effect).count();
    let benefic_count = count(AspectEffect::Benefic);
    let malefic_count = count(AspectEffect::Malefic);
    let net_virupas = aspects
        .iter()
        .map(|a| match a.effect {
            AspectEffect::Benefic => a.virupas,
            AspectEffect::Malefic => -a.virupas,
            AspectEffect::Neutral => 0.0,
        })
        .sum();
    HouseAspects {
        house,
        aspects,
        benefic_count,
        malefic_count,
        net_virupas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn pos(graha: Graha, house: u8) -> PlanetPosition {
        PlanetPosition::new(graha, (house as f64 - 1.0) * 30.0 + 15.0, house, 1.0).unwrap()
    }

    #[test]
    fn seventh_is_full_for_everyone() {
        for g in crate::graha::ALL_GRAHAS {
            assert_eq!(aspect_strength(g, 7), AspectStrength::Full);
            assert!(!is_special_aspect(g, 7));
        }
    }

    #[test]
    fn conjunction_is_full() {
        assert_eq!(aspect_strength(Graha::Surya, 12), AspectStrength::Full);
        assert_eq!(aspect_strength(Graha::Surya, 0), AspectStrength::Full);
    }

    #[test]
    fn special_aspects() {
        assert_eq!(aspect_strength(Graha::Mangal, 4), AspectStrength::ThreeQuarter);
        assert_eq!(aspect_strength(Graha::Mangal, 8), AspectStrength::Full);
        assert_eq!(aspect_strength(Graha::Guru, 5), AspectStrength::Half);
        assert_eq!(aspect_strength(Graha::Guru, 9), AspectStrength::Full);
        assert_eq!(aspect_strength(Graha::Shani, 3), AspectStrength::ThreeQuarter);
        assert_eq!(aspect_strength(Graha::Shani, 10), AspectStrength::Full);
        assert!(is_special_aspect(Graha::Guru, 9));
        assert_eq!(aspect_strength(Graha::Surya, 5), AspectStrength::None);
        assert_eq!(aspect_strength(Graha::Rahu, 9), AspectStrength::None);
    }

    #[test]
    fn jupiter_half_aspect_on_sixth() {
        let config = BalaConfig::default();
        let positions = [pos(Graha::Guru, 1), pos(Graha::Surya, 6)];
        let m = AspectMatrix::build(&positions, &config);
        let e = m.between(Graha::Guru, Graha::Surya).unwrap();
        assert_eq!(e.house_distance, 5);
        assert_eq!(e.strength, AspectStrength::Half);
        assert_eq!(e.fraction, 0.5);
        assert!((e.virupas - 7.5).abs() < EPS);
        assert_eq!(e.effect, AspectEffect::Benefic);
        assert!(e.is_special);
        // Reverse direction counts 6 -> 1 as distance 7
        let back = m.between(Graha::Surya, Graha::Guru).unwrap();
        assert_eq!(back.house_distance, 7);
        assert!(!back.is_special);
    }

    #[test]
    fn classical_base_table() {
        assert_eq!(classical_aspect_virupas(Graha::Guru), 15.0);
        assert_eq!(classical_aspect_virupas(Graha::Buddh), 8.0);
        assert_eq!(classical_aspect_virupas(Graha::Surya), 5.0);
        assert_eq!(classical_aspect_virupas(Graha::Ketu), 8.0);
    }

    #[test]
    fn self_pairs_skipped() {
        let config = BalaConfig::default();
        let positions = [pos(Graha::Shani, 3)];
        assert!(AspectMatrix::build(&positions, &config).edges().is_empty());
    }

    #[test]
    fn same_house_conjunction_both_ways() {
        let config = BalaConfig::default();
        let positions = [pos(Graha::Shukra, 4), pos(Graha::Mangal, 4)];
        let m = AspectMatrix::build(&positions, &config);
        assert_eq!(m.edges().len(), 2);
        assert!(m.edges().iter().all(|e| e.house_distance == 12 && e.fraction == 1.0));
    }

    #[test]
    fn drig_nets_benefic_minus_malefic() {
        let config = BalaConfig::default();
        // Target Moon in 8; Jupiter in 1 (distance 7, full 15),
        // Saturn in 5 (distance 3, three-quarter 7.5)
        let positions = [pos(Graha::Chandra, 8), pos(Graha::Guru, 1), pos(Graha::Shani, 5)];
        let m = AspectMatrix::build(&positions, &config);
        let d = drig_bala(Graha::Chandra, &m);
        assert!((d.benefic_virupas - 15.0).abs() < EPS);
        assert!((d.malefic_virupas - 7.5).abs() < EPS);
        assert!((d.net_virupas - 7.5).abs() < EPS);
        assert_eq!(d.rating, DrigRating::Neutral);
        assert_eq!(d.received.len(), 2);
    }

    #[test]
    fn drig_rating_bands() {
        assert_eq!(DrigRating::from_net(20.0), DrigRating::Excellent);
        assert_eq!(DrigRating::from_net(10.0), DrigRating::Strong);
        assert_eq!(DrigRating::from_net(0.0), DrigRating::Neutral);
        assert_eq!(DrigRating::from_net(-10.0), DrigRating::Weak);
        assert_eq!(DrigRating::from_net(-10.1), DrigRating::VeryWeak);
    }

    #[test]
    fn override_base_virupas() {
        let mut config = BalaConfig::default();
        config.aspect_virupas_overrides.insert(Graha::Surya, 12.0);
        let positions = [pos(Graha::Surya, 1), pos(Graha::Chandra, 8)];
        let m = AspectMatrix::build(&positions, &config);
        let e = m.between(Graha::Surya, Graha::Chandra).unwrap();
        assert!((e.virupas - 12.0).abs() < EPS);
        assert_eq!(e.effect, AspectEffect::Malefic);
    }

    #[test]
    fn overall_score_sentinel_and_scale() {
        assert_eq!(overall_drig_score(&[]), 50.0);
        let m = AspectMatrix::default();
        let flat = drig_bala(Graha::Surya, &m);
        assert_eq!(overall_drig_score(&[flat]), 50.0);
    }

    #[test]
    fn house_aspect_counts() {
        let config = BalaConfig::default();
        // House 8: Jupiter in 1 (7th), Mars in 1 (7th), Saturn in 8 (same house)
        let positions = [pos(Graha::Guru, 1), pos(Graha::Mangal, 1), pos(Graha::Shani, 8)];
        let h = house_aspects(&positions, 8, &config);
        assert_eq!(h.aspects.len(), 3);
        assert_eq!(h.benefic_count, 1);
        assert_eq!(h.malefic_count, 2);
        assert!((h.net_virupas - (15.0 - 10.0 - 10.0)).abs() < EPS);
    }
}
