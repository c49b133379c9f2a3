//! Strength analysis orchestration.
//!
//! One call resolves the temporal context, detects planetary wars and
//! builds the aspect matrix for the whole chart, then evaluates each
//! sapta graha against those shared read-only inputs.

use bala_base::strength::{KALA_COMPONENTS, STHANA_COMPONENTS, strongest_by, weakest_by};
use bala_base::util::{mean_or, percentage_or};
use bala_base::{
    AspectMatrix, Axis, BalaConfig, ChartSnapshot, Component, DrigBalaResult, Graha,
    HouseAspects, KalaBalaBreakdown, PlanetPosition, PlanetStrengthResult, SAPTA_GRAHAS, SthanaBalaBreakdown,
    VargaPlacements, aggregate, drig_bala, house_aspects, kala_bala, overall_axis_score,
    overall_drig_score, planetary_wars, resolve_temporal_context, sthana_bala,
};
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::report::{AxisReport, ComponentSummary, DrigReport, StrengthReport};

/// Evaluates Sthana, Kala and Drig bala for chart snapshots.
///
/// Holds only configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct StrengthAnalyzer {
    config: BalaConfig,
}

impl StrengthAnalyzer {
    /// Create an analyzer after validating the configuration.
    pub fn new(config: BalaConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BalaConfig {
        &self.config
    }

    /// Run the full analysis. Grahas absent from the chart are omitted
    /// from every result list.
    pub fn analyze(&self, chart: &ChartSnapshot) -> Result<StrengthReport, EngineError> {
        chart.validate()?;
        let config = &self.config;

        let context = resolve_temporal_context(chart, config);
        let wars = planetary_wars(chart.positions(), config);
        let matrix = AspectMatrix::build(chart.positions(), config);
        debug!(
            wars = wars.len(),
            aspects = matrix.edges().len(),
            degraded = context.is_degraded(),
            "shared chart inputs resolved"
        );

        let mut sthana_details = Vec::new();
        let mut kala_details = Vec::new();
        let mut sthana_results = Vec::new();
        let mut kala_results = Vec::new();
        let mut drig_results = Vec::new();

        for graha in SAPTA_GRAHAS {
            let Some(position) = chart.position(graha) else {
                warn!(graha = graha.english_name(), "position missing, graha skipped");
                continue;
            };

            let placements = self.placements_for(chart, position);
            let sthana = sthana_bala(position, placements.as_ref())?;
            let kala = kala_bala(position, &context, &wars, config);

            let sthana_result = aggregate(
                graha,
                Axis::Sthana,
                sthana.scores(),
                config.required_virupas(Axis::Sthana, graha),
            );
            let kala_result = aggregate(
                graha,
                Axis::Kala,
                kala.scores(),
                config.required_virupas(Axis::Kala, graha),
            );
            let drig = drig_bala(graha, &matrix);
            debug!(
                graha = graha.english_name(),
                sthana = sthana_result.total_virupas,
                kala = kala_result.total_virupas,
                drig = drig.net_virupas,
                "graha evaluated"
            );

            sthana_details.push(sthana);
            kala_details.push(kala);
            sthana_results.push(sthana_result);
            kala_results.push(kala_result);
            drig_results.push(drig);
        }

        let house_aspects = (1..=12)
            .map(|house| house_aspects(chart.positions(), house, config))
            .collect();

        Ok(StrengthReport {
            context,
            wars,
            sthana_details,
            kala_details,
            sthana: axis_report(Axis::Sthana, &STHANA_COMPONENTS, sthana_results),
            kala: axis_report(Axis::Kala, &KALA_COMPONENTS, kala_results),
            drig: drig_report(matrix, drig_results, house_aspects),
        })
    }

    /// Sthana bala breakdown for one graha, without the rest of the report.
    pub fn sthana(
        &self,
        chart: &ChartSnapshot,
        graha: Graha,
    ) -> Result<Option<SthanaBalaBreakdown>, EngineError> {
        let Some(position) = chart.position(graha) else {
            return Ok(None);
        };
        let placements = self.placements_for(chart, position);
        Ok(Some(sthana_bala(position, placements.as_ref())?))
    }

    /// Kala bala breakdown for one graha, without the rest of the report.
    pub fn kala(&self, chart: &ChartSnapshot, graha: Graha) -> Option<KalaBalaBreakdown> {
        let position = chart.position(graha)?;
        let context = resolve_temporal_context(chart, &self.config);
        let wars = planetary_wars(chart.positions(), &self.config);
        Some(kala_bala(position, &context, &wars, &self.config))
    }

    /// Explicit placements, gaps filled from the natal longitude when
    /// `derive_missing_vargas` is set.
    fn placements_for(
        &self,
        chart: &ChartSnapshot,
        position: &PlanetPosition,
    ) -> Option<VargaPlacements> {
        let explicit = chart.varga_placements(position.graha).copied();
        if !self.config.derive_missing_vargas {
            return explicit;
        }
        let derived = VargaPlacements::from_longitude(position.longitude);
        Some(explicit.unwrap_or_default().or_from(&derived))
    }
}

fn summarize(components: &[Component], results: &[PlanetStrengthResult]) -> Vec<ComponentSummary> {
    components
        .iter()
        .map(|&component| {
            let values: Vec<f64> = results.iter().filter_map(|r| r.score(component)).collect();
            let average = mean_or(&values, 0.0);
            let max = component.range().1;
            ComponentSummary {
                component,
                average,
                max,
                percentage_of_max: percentage_or(average, max, 0.0),
            }
        })
        .collect()
}

fn axis_report(axis: Axis, components: &[Component], results: Vec<PlanetStrengthResult>) -> AxisReport {
    let pct = |r: &PlanetStrengthResult| r.percentage_of_required;
    AxisReport {
        axis,
        component_summary: summarize(components, &results),
        strongest: strongest_by(&results, pct).map(|r| r.graha),
        weakest: weakest_by(&results, pct).map(|r| r.graha),
        overall_score: overall_axis_score(&results),
        results,
    }
}

fn drig_report(
    matrix: AspectMatrix,
    results: Vec<DrigBalaResult>,
    house_aspects: Vec<HouseAspects>,
) -> DrigReport {
    let net = |r: &DrigBalaResult| r.net_virupas;
    DrigReport {
        strongest: strongest_by(&results, net).map(|r| r.graha),
        weakest: weakest_by(&results, net).map(|r| r.graha),
        overall_score: overall_drig_score(&results),
        matrix,
        results,
        house_aspects,
    }
}
