//! End-to-end tests for the strength analyzer.
//!
//! Charts are built by hand; sunrise/sunset windows are given explicitly.

use bala_base::temporal::Tribhaga;
use bala_base::{
    Axis, BalaConfig, ChartSnapshot, Component, DayNightSource, Degradation, GeoLocation, Graha,
    PlanetPosition, SAPTA_GRAHAS, SunWindow, VIRUPAS_PER_RUPA,
};
use bala_engine::StrengthAnalyzer;
use chrono::{FixedOffset, TimeZone, Utc};

fn positions() -> Vec<PlanetPosition> {
    let asc = 95.0;
    [
        (Graha::Surya, 264.2, 1.01),
        (Graha::Chandra, 33.0, 12.8),
        (Graha::Mangal, 298.0, 0.71),
        (Graha::Buddh, 250.6, -0.4),
        (Graha::Guru, 100.0, -0.08),
        (Graha::Shukra, 100.4, 1.22),
        (Graha::Shani, 200.0, 0.12),
        (Graha::Rahu, 15.0, -0.05),
        (Graha::Ketu, 195.0, -0.05),
    ]
    .into_iter()
    .map(|(g, lon, speed)| PlanetPosition::in_whole_sign_house(g, lon, asc, speed).unwrap())
    .collect()
}

fn window() -> SunWindow {
    SunWindow::new(
        Utc.with_ymd_and_hms(2023, 12, 31, 12, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 1, 45, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 1, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 2, 1, 45, 0).unwrap(),
    )
    .unwrap()
}

fn chart_at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> ChartSnapshot {
    let ist = FixedOffset::east_opt(19_800).unwrap();
    let birth = ist.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap();
    ChartSnapshot::new(95.0, birth, GeoLocation::new(19.076, 72.8777), positions())
        .unwrap()
        .with_sun_window(window())
}

fn chart() -> ChartSnapshot {
    chart_at(2024, 1, 1, 9, 30)
}

#[test]
fn analysis_is_idempotent() {
    let analyzer = StrengthAnalyzer::default();
    let c = chart();
    let first = analyzer.analyze(&c).unwrap();
    let second = analyzer.analyze(&c).unwrap();
    assert_eq!(first, second);
    for (a, b) in first.sthana.results.iter().zip(&second.sthana.results) {
        assert_eq!(a.total_virupas.to_bits(), b.total_virupas.to_bits());
    }
}

#[test]
fn every_sapta_graha_reported_in_order() {
    let report = StrengthAnalyzer::default().analyze(&chart()).unwrap();
    assert_eq!(report.evaluated_grahas(), SAPTA_GRAHAS.to_vec());
    assert_eq!(report.kala.results.len(), 7);
    assert_eq!(report.drig.results.len(), 7);
    assert!(!report.is_degraded());
    assert_eq!(report.context.day_night_source, DayNightSource::SunWindow);
}

#[test]
fn results_respect_ranges_and_rupas() {
    let report = StrengthAnalyzer::default().analyze(&chart()).unwrap();
    for axis in [Axis::Sthana, Axis::Kala] {
        for r in &report.axis(axis).results {
            assert_eq!(r.total_rupas, r.total_virupas / VIRUPAS_PER_RUPA);
            for s in &r.scores {
                assert!(s.virupas >= s.min && s.virupas <= s.max, "{:?}", s);
            }
        }
        let overall = report.axis(axis).overall_score;
        assert!((0.0..=100.0).contains(&overall));
    }
    for d in &report.drig.results {
        assert!((-60.0..=60.0).contains(&d.net_virupas));
    }
}

#[test]
fn mars_exalted_in_kendra() {
    // Mars at 298 with ascendant in Karka falls in house 7
    let report = StrengthAnalyzer::default().analyze(&chart()).unwrap();
    let mars = report.sthana.result(Graha::Mangal).unwrap();
    assert_eq!(mars.score(Component::Uccha), Some(60.0));
    assert_eq!(mars.score(Component::Kendradi), Some(60.0));
}

#[test]
fn venus_jupiter_war_reaches_kala() {
    let report = StrengthAnalyzer::default().analyze(&chart()).unwrap();
    assert_eq!(report.wars.len(), 1);
    assert_eq!(report.wars[0].winner, Graha::Shukra);
    let venus = report.kala.result(Graha::Shukra).unwrap();
    let jupiter = report.kala.result(Graha::Guru).unwrap();
    assert_eq!(venus.score(Component::Yuddha), Some(30.0));
    assert_eq!(jupiter.score(Component::Yuddha), Some(-30.0));
}

#[test]
fn missing_planet_is_skipped_not_fatal() {
    let ist = FixedOffset::east_opt(19_800).unwrap();
    let birth = ist.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
    let without_mercury: Vec<_> = positions()
        .into_iter()
        .filter(|p| p.graha != Graha::Buddh)
        .collect();
    let c = ChartSnapshot::new(95.0, birth, GeoLocation::new(19.076, 72.8777), without_mercury)
        .unwrap()
        .with_sun_window(window());
    let report = StrengthAnalyzer::default().analyze(&c).unwrap();
    assert_eq!(report.sthana.results.len(), 6);
    assert!(report.sthana.result(Graha::Buddh).is_none());
    assert!(report.drig.result(Graha::Buddh).is_none());
}

#[test]
fn no_sun_window_runs_degraded() {
    let ist = FixedOffset::east_opt(19_800).unwrap();
    let birth = ist.with_ymd_and_hms(2024, 1, 1, 21, 0, 0).unwrap();
    let c = ChartSnapshot::new(95.0, birth, GeoLocation::new(19.076, 72.8777), positions())
        .unwrap();
    let report = StrengthAnalyzer::default().analyze(&c).unwrap();
    assert!(report.is_degraded());
    assert_eq!(report.context.day_night_source, DayNightSource::ClockFallback);
    assert!(!report.context.is_day);
    assert_eq!(report.kala.results.len(), 7);
}

#[test]
fn toml_overrides_flow_into_results() {
    let config = BalaConfig::from_toml_str(
        r#"
        [required_overrides.sthana]
        Surya = 120.0

        [aspect_virupas_overrides]
        Shani = 0.0
        "#,
    )
    .unwrap();
    let analyzer = StrengthAnalyzer::new(config).unwrap();
    let report = analyzer.analyze(&chart()).unwrap();
    let sun = report.sthana.result(Graha::Surya).unwrap();
    assert_eq!(sun.required_virupas, 120.0);
    assert!(
        report
            .drig
            .matrix
            .cast_by(Graha::Shani)
            .all(|e| e.virupas == 0.0)
    );
}

#[test]
fn strongest_and_weakest_consistent_with_results() {
    let report = StrengthAnalyzer::default().analyze(&chart()).unwrap();
    let results = &report.sthana.results;
    let best = results
        .iter()
        .map(|r| r.percentage_of_required)
        .fold(f64::NEG_INFINITY, f64::max);
    let strongest = report.sthana.result(report.sthana.strongest.unwrap()).unwrap();
    assert_eq!(strongest.percentage_of_required, best);
    let worst = results
        .iter()
        .map(|r| r.percentage_of_required)
        .fold(f64::INFINITY, f64::min);
    let weakest = report.sthana.result(report.sthana.weakest.unwrap()).unwrap();
    assert_eq!(weakest.percentage_of_required, worst);
}

#[test]
fn house_aspects_cover_all_houses() {
    let report = StrengthAnalyzer::default().analyze(&chart()).unwrap();
    let houses: Vec<u8> = report.drig.house_aspects.iter().map(|h| h.house).collect();
    assert_eq!(houses, (1..=12).collect::<Vec<_>>());
}

#[test]
fn pre_dawn_birth_uses_previous_sunset() {
    // Monday 05:30 IST = 00:00 UTC, 12h into a 13.75h night
    let report = StrengthAnalyzer::default()
        .analyze(&chart_at(2024, 1, 1, 5, 30))
        .unwrap();
    let ctx = &report.context;
    assert!(ctx.degradations.is_empty());
    assert_eq!(ctx.day_night_source, DayNightSource::SunWindow);
    assert!(!ctx.is_day);
    assert_eq!(ctx.tribhaga, Tribhaga::NightThird);
    assert!((ctx.span_fraction - 12.0 / 13.75).abs() < 1e-9);
    // 23rd hour of Sunday's sequence
    assert_eq!(ctx.hora_lord, Graha::Buddh);

    let tribhaga = |g| report.kala.result(g).unwrap().score(Component::Tribhaga);
    assert_eq!(tribhaga(Graha::Mangal), Some(60.0));
    assert_eq!(tribhaga(Graha::Guru), Some(30.0));
    assert_eq!(tribhaga(Graha::Surya), Some(0.0));
    let hora = |g| report.kala.result(g).unwrap().score(Component::Hora);
    assert_eq!(hora(Graha::Buddh), Some(60.0));
    assert_eq!(hora(Graha::Surya), Some(0.0));
}

#[test]
fn window_not_bracketing_birth_falls_back_to_clock() {
    // Tuesday 10:30 IST is after the window's next sunrise
    let report = StrengthAnalyzer::default()
        .analyze(&chart_at(2024, 1, 2, 10, 30))
        .unwrap();
    let ctx = &report.context;
    assert!(report.is_degraded());
    assert_eq!(ctx.degradations, vec![Degradation::SunWindowOutOfRange]);
    assert_eq!(ctx.day_night_source, DayNightSource::ClockFallback);
    assert!(ctx.is_day);
    // 4.5h into the 06:00-18:00 clock day
    assert_eq!(ctx.tribhaga, Tribhaga::DaySecond);
    assert!((ctx.span_fraction - 0.375).abs() < 1e-9);
    // Mars lords Tuesday; four hours on lands on the Moon
    assert_eq!(ctx.hora_lord, Graha::Chandra);

    let kala = |g| report.kala.result(g).unwrap();
    assert_eq!(kala(Graha::Surya).score(Component::Tribhaga), Some(60.0));
    assert_eq!(kala(Graha::Surya).score(Component::Nathonnatha), Some(60.0));
    assert_eq!(kala(Graha::Chandra).score(Component::Hora), Some(60.0));
    assert_eq!(kala(Graha::Mangal).score(Component::Hora), Some(0.0));
    assert_eq!(kala(Graha::Mangal).score(Component::Dina), Some(45.0));
}
