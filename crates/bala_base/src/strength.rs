//! Axis scores, aggregation into rupas, and rating bands.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::{mean_or, percentage_or};

/// Virupas per rupa.
pub const VIRUPAS_PER_RUPA: f64 = 60.0;

/// Required positional strength for the sapta grahas, in graha order.
pub const STHANA_REQUIRED_VIRUPAS: [f64; 7] = [165.0, 133.0, 96.0, 165.0, 165.0, 133.0, 96.0];

/// Required temporal strength for the sapta grahas, in graha order.
///
/// Differs from the positional table only for the Sun.
pub const KALA_REQUIRED_VIRUPAS: [f64; 7] = [164.0, 133.0, 96.0, 165.0, 165.0, 133.0, 96.0];

/// Required virupas from the axis table. None for Rahu/Ketu.
pub const fn required_virupas(axis: Axis, graha: Graha) -> Option<f64> {
    if !graha.is_sapta() {
        return None;
    }
    let table = match axis {
        Axis::Sthana => &STHANA_REQUIRED_VIRUPAS,
        Axis::Kala => &KALA_REQUIRED_VIRUPAS,
    };
    Some(table[graha.index() as usize])
}

/// Scored strength axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Positional strength (Sthana bala).
    Sthana,
    /// Temporal strength (Kala bala).
    Kala,
}

impl Axis {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sthana => "Sthana Bala",
            Self::Kala => "Kala Bala",
        }
    }
}

/// Named sub-component of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Component {
    Uccha,
    Saptavargaja,
    Ojhayugma,
    Kendradi,
    Drekkana,
    Nathonnatha,
    Paksha,
    Tribhaga,
    Varsha,
    Masa,
    Dina,
    Hora,
    Ayana,
    Yuddha,
}

/// Components of the positional axis, in report order.
pub const STHANA_COMPONENTS: [Component; 5] = [
    Component::Uccha,
    Component::Saptavargaja,
    Component::Ojhayugma,
    Component::Kendradi,
    Component::Drekkana,
];

/// Components of the temporal axis, in report order.
pub const KALA_COMPONENTS: [Component; 9] = [
    Component::Nathonnatha,
    Component::Paksha,
    Component::Tribhaga,
    Component::Varsha,
    Component::Masa,
    Component::Dina,
    Component::Hora,
    Component::Ayana,
    Component::Yuddha,
];

impl Component {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uccha => "Uccha",
            Self::Saptavargaja => "Saptavargaja",
            Self::Ojhayugma => "Ojhayugma",
            Self::Kendradi => "Kendradi",
            Self::Drekkana => "Drekkana",
            Self::Nathonnatha => "Nathonnatha",
            Self::Paksha => "Paksha",
            Self::Tribhaga => "Tribhaga",
            Self::Varsha => "Varsha",
            Self::Masa => "Masa",
            Self::Dina => "Dina",
            Self::Hora => "Hora",
            Self::Ayana => "Ayana",
            Self::Yuddha => "Yuddha",
        }
    }

    /// Documented (min, max) virupas.
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::Uccha => (0.0, 60.0),
            Self::Saptavargaja => (0.0, crate::varga::SAPTAVARGAJA_MAX),
            Self::Ojhayugma => (0.0, 15.0),
            Self::Kendradi => (15.0, 60.0),
            Self::Drekkana => (0.0, 15.0),
            Self::Nathonnatha => (0.0, 60.0),
            Self::Paksha => (0.0, 60.0),
            Self::Tribhaga => (0.0, 60.0),
            Self::Varsha => (0.0, 15.0),
            Self::Masa => (0.0, 30.0),
            Self::Dina => (0.0, 45.0),
            Self::Hora => (0.0, 60.0),
            Self::Ayana => (0.0, 60.0),
            Self::Yuddha => (-30.0, 30.0),
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Self::Uccha | Self::Saptavargaja | Self::Ojhayugma | Self::Kendradi | Self::Drekkana => {
                Axis::Sthana
            }
            _ => Axis::Kala,
        }
    }
}

/// One audited sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScore {
    pub component: Component,
    /// Clamped into [min, max].
    pub virupas: f64,
    pub min: f64,
    pub max: f64,
}

impl AxisScore {
    /// Clamp `raw` into the component's documented range.
    pub fn new(component: Component, raw: f64) -> Self {
        let (min, max) = component.range();
        let virupas = if raw.is_nan() { min } else { raw.clamp(min, max) };
        Self {
            component,
            virupas,
            min,
            max,
        }
    }

    pub fn name(&self) -> &'static str {
        self.component.name()
    }
}

/// Rating band by percentage of required strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthRating {
    Excellent,
    Strong,
    Average,
    Weak,
    VeryWeak,
}

impl StrengthRating {
    /// ≥130 Excellent, ≥100 Strong, ≥80 Average, ≥60 Weak, else Very Weak.
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 130.0 {
            Self::Excellent
        } else if pct >= 100.0 {
            Self::Strong
        } else if pct >= 80.0 {
            Self::Average
        } else if pct >= 60.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Strong => "Strong",
            Self::Average => "Average",
            Self::Weak => "Weak",
            Self::VeryWeak => "Very Weak",
        }
    }
}

/// Aggregated strength of one graha on one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetStrengthResult {
    pub graha: Graha,
    pub axis: Axis,
    pub scores: Vec<AxisScore>,
    pub total_virupas: f64,
    pub total_rupas: f64,
    pub required_virupas: f64,
    /// Unclamped; 0.0 when the required value is zero.
    pub percentage_of_required: f64,
    pub rating: StrengthRating,
}

impl PlanetStrengthResult {
    /// Score of one component, if present.
    pub fn score(&self, component: Component) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.component == component)
            .map(|s| s.virupas)
    }

    pub fn meets_requirement(&self) -> bool {
        self.percentage_of_required >= 100.0
    }
}

/// Sum clamped sub-scores and compare against the required minimum.
pub fn aggregate(
    graha: Graha,
    axis: Axis,
    scores: Vec<AxisScore>,
    required_virupas: f64,
) -> PlanetStrengthResult {
    let total_virupas: f64 = scores.iter().map(|s| s.virupas).sum();
    let percentage_of_required = percentage_or(total_virupas, required_virupas, 0.0);
    PlanetStrengthResult {
        graha,
        axis,
        scores,
        total_virupas,
        total_rupas: total_virupas / VIRUPAS_PER_RUPA,
        required_virupas,
        percentage_of_required,
        rating: StrengthRating::from_percentage(percentage_of_required),
    }
}

/// Overall axis score in [0, 100]: mean percentage clamped to [0, 150],
/// scaled by 1/1.5. 50.0 when no graha was evaluated.
pub fn overall_axis_score(results: &[PlanetStrengthResult]) -> f64 {
    if results.is_empty() {
        return 50.0;
    }
    let pcts: Vec<f64> = results.iter().map(|r| r.percentage_of_required).collect();
    mean_or(&pcts, 0.0).clamp(0.0, 150.0) / 1.5
}

/// First maximum by `key`, in input order.
pub fn strongest_by<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    items.iter().fold(None, |best: Option<&T>, item| match best {
        Some(b) if key(item) <= key(b) => Some(b),
        _ => Some(item),
    })
}

/// Last minimum by `key`, in input order.
pub fn weakest_by<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    items.iter().fold(None, |worst: Option<&T>, item| match worst {
        Some(w) if key(item) > key(w) => Some(w),
        _ => Some(item),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn required_tables() {
        assert_eq!(required_virupas(Axis::Sthana, Graha::Surya), Some(165.0));
        assert_eq!(required_virupas(Axis::Kala, Graha::Surya), Some(164.0));
        assert_eq!(required_virupas(Axis::Kala, Graha::Shani), Some(96.0));
        assert_eq!(required_virupas(Axis::Sthana, Graha::Ketu), None);
    }

    #[test]
    fn score_clamps_high_and_low() {
        assert_eq!(AxisScore::new(Component::Yuddha, 45.0).virupas, 30.0);
        assert_eq!(AxisScore::new(Component::Yuddha, -45.0).virupas, -30.0);
        assert_eq!(AxisScore::new(Component::Uccha, 60.000001).virupas, 60.0);
    }

    #[test]
    fn score_nan_falls_to_min() {
        assert_eq!(AxisScore::new(Component::Paksha, f64::NAN).virupas, 0.0);
    }

    #[test]
    fn components_belong_to_axes() {
        assert!(STHANA_COMPONENTS.iter().all(|c| c.axis() == Axis::Sthana));
        assert!(KALA_COMPONENTS.iter().all(|c| c.axis() == Axis::Kala));
    }

    #[test]
    fn rating_bands() {
        assert_eq!(StrengthRating::from_percentage(130.0), StrengthRating::Excellent);
        assert_eq!(StrengthRating::from_percentage(129.99), StrengthRating::Strong);
        assert_eq!(StrengthRating::from_percentage(100.0), StrengthRating::Strong);
        assert_eq!(StrengthRating::from_percentage(80.0), StrengthRating::Average);
        assert_eq!(StrengthRating::from_percentage(60.0), StrengthRating::Weak);
        assert_eq!(StrengthRating::from_percentage(59.9), StrengthRating::VeryWeak);
    }

    #[test]
    fn aggregate_rupas_exact() {
        let scores = vec![
            AxisScore::new(Component::Uccha, 37.25),
            AxisScore::new(Component::Kendradi, 60.0),
        ];
        let r = aggregate(Graha::Mangal, Axis::Sthana, scores, 96.0);
        assert_eq!(r.total_rupas, r.total_virupas / 60.0);
        assert!((r.total_virupas - 97.25).abs() < EPS);
        assert!((r.percentage_of_required - 97.25 / 96.0 * 100.0).abs() < EPS);
        assert_eq!(r.rating, StrengthRating::Strong);
        assert!(r.meets_requirement());
        assert_eq!(r.score(Component::Kendradi), Some(60.0));
        assert_eq!(r.score(Component::Paksha), None);
    }

    #[test]
    fn aggregate_percentage_unclamped() {
        let scores = vec![AxisScore::new(Component::Saptavargaja, 400.0)];
        let r = aggregate(Graha::Surya, Axis::Sthana, scores, 165.0);
        assert!(r.percentage_of_required > 200.0);
        assert_eq!(r.rating, StrengthRating::Excellent);
    }

    #[test]
    fn aggregate_zero_required_sentinel() {
        let scores = vec![AxisScore::new(Component::Uccha, 30.0)];
        let r = aggregate(Graha::Surya, Axis::Sthana, scores, 0.0);
        assert_eq!(r.percentage_of_required, 0.0);
        assert_eq!(r.rating, StrengthRating::VeryWeak);
    }

    #[test]
    fn overall_score_clamps_and_scales() {
        assert_eq!(overall_axis_score(&[]), 50.0);
        let full = aggregate(Graha::Surya, Axis::Sthana, vec![AxisScore::new(Component::Uccha, 60.0)], 30.0);
        // 200% clamps to 150 -> 100
        assert!((overall_axis_score(&[full]) - 100.0).abs() < EPS);
    }

    #[test]
    fn strongest_first_weakest_last() {
        let v = [(0, 3.0), (1, 5.0), (2, 5.0), (3, 1.0), (4, 1.0)];
        assert_eq!(strongest_by(&v, |x| x.1).unwrap().0, 1);
        assert_eq!(weakest_by(&v, |x| x.1).unwrap().0, 4);
        assert!(strongest_by::<(u8, f64)>(&[], |x| x.1).is_none());
    }
}
