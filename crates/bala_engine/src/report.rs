//! Report types produced by [`crate::StrengthAnalyzer`].

use bala_base::drishti::HouseAspects;
use bala_base::{
    AspectMatrix, Axis, Component, DrigBalaResult, Graha, KalaBalaBreakdown, PlanetStrengthResult,
    PlanetaryWar, SthanaBalaBreakdown, TemporalContext,
};
use serde::{Deserialize, Serialize};

/// Average of one component across the evaluated grahas, against the
/// component's documented maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub component: Component,
    /// 0.0 when no graha was evaluated.
    pub average: f64,
    /// Upper bound of the component's range.
    pub max: f64,
    pub percentage_of_max: f64,
}

/// Per-axis results with summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisReport {
    pub axis: Axis,
    /// One entry per graha present in the chart, in graha order.
    pub results: Vec<PlanetStrengthResult>,
    pub component_summary: Vec<ComponentSummary>,
    /// First graha with the highest percentage of required.
    pub strongest: Option<Graha>,
    /// Last graha with the lowest percentage of required.
    pub weakest: Option<Graha>,
    /// 0-100, 50.0 when empty.
    pub overall_score: f64,
}

impl AxisReport {
    pub fn result(&self, graha: Graha) -> Option<&PlanetStrengthResult> {
        self.results.iter().find(|r| r.graha == graha)
    }
}

/// Aspect matrix plus per-graha and per-house netting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrigReport {
    pub matrix: AspectMatrix,
    pub results: Vec<DrigBalaResult>,
    /// Houses 1 through 12.
    pub house_aspects: Vec<HouseAspects>,
    pub strongest: Option<Graha>,
    pub weakest: Option<Graha>,
    /// 0-100, 50.0 when empty.
    pub overall_score: f64,
}

impl DrigReport {
    pub fn result(&self, graha: Graha) -> Option<&DrigBalaResult> {
        self.results.iter().find(|r| r.graha == graha)
    }
}

/// Full strength analysis of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub context: TemporalContext,
    pub wars: Vec<PlanetaryWar>,
    pub sthana_details: Vec<SthanaBalaBreakdown>,
    pub kala_details: Vec<KalaBalaBreakdown>,
    pub sthana: AxisReport,
    pub kala: AxisReport,
    pub drig: DrigReport,
}

impl StrengthReport {
    /// True if any temporal fallback was taken.
    pub fn is_degraded(&self) -> bool {
        self.context.is_degraded()
    }

    pub fn axis(&self, axis: Axis) -> &AxisReport {
        match axis {
            Axis::Sthana => &self.sthana,
            Axis::Kala => &self.kala,
        }
    }

    /// Grahas present in the chart and evaluated on every axis.
    pub fn evaluated_grahas(&self) -> Vec<Graha> {
        self.sthana.results.iter().map(|r| r.graha).collect()
    }
}
