// src/sim/mod.rs
// The simulation core: everything here is GUI-free and unit-tested.
pub mod classify;
pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod pipeline;
pub mod plot;
pub mod pressure;
pub mod ranges;
pub mod snapshot;
pub use classify::{Classifier, VitalStatus};
pub use config::{AnomalyOdds, EngineConfig};
pub use error::VitalsError;
pub use generator::VitalGenerator;
pub use history::{HistoryBuffer, HistoryStore, TrackedMetric};
pub use pipeline::{EnginePhase, VitalsPipeline};
pub use plot::{render_trend_png, TrendStyle};
pub use pressure::mean_arterial_pressure;
pub use ranges::{RangeTable, VitalRange, VitalSpec, DEFAULT_RANGES};
pub use snapshot::{CurrentVitals, VitalSample, VitalsSnapshot};
