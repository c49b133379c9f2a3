//! Planetary strength analysis over a chart snapshot.
//!
//! This crate provides:
//! - [`StrengthAnalyzer`]: one-call Sthana, Kala and Drig evaluation
//! - Report types with per-component summaries and strongest/weakest grahas
//!
//! The per-graha evaluators live in `bala_base`; this crate orders the
//! shared steps (temporal context, war detection, aspect matrix) ahead of
//! the per-graha fan-out.

pub mod analysis;
pub mod error;
pub mod report;

pub use analysis::StrengthAnalyzer;
pub use error::EngineError;
pub use report::{AxisReport, ComponentSummary, DrigReport, StrengthReport};
