use rand::Rng;
use crate::sim::config::EngineConfig;
use crate::sim::error::VitalsError;
use crate::sim::generator::VitalGenerator;
use crate::sim::history::{HistoryStore, TrackedMetric};
use crate::sim::snapshot::{CurrentVitals, VitalSample, VitalsSnapshot};
/// Scheduler state. Seeding fills every history buffer synchronously inside
/// the first tick, so the first published frame already shows full charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnginePhase {
    Seeding,
    Steady,
}
/// The generate -> derive -> append cycle behind the dashboard. Time is
/// injected (seconds since engine start) so tests can drive it directly.
pub struct VitalsPipeline<R: Rng> {
    generator: VitalGenerator<R>,
    store: HistoryStore,
    interval_secs: f64,
    capacity: usize,
    phase: EnginePhase,
    current: CurrentVitals,
    last_time: f64,
}
impl<R: Rng> VitalsPipeline<R> {
    pub fn new(config: &EngineConfig, rng: R) -> Result<Self, VitalsError> {
        config.validate()?;
        Ok(Self {
            generator: VitalGenerator::new(config.ranges.clone(), config.anomaly_odds, rng),
            store: HistoryStore::new(config.history_capacity),
            interval_secs: config.tick_interval_secs,
            capacity: config.history_capacity,
            phase: EnginePhase::Seeding,
            current: CurrentVitals::default(),
            last_time: 0.0,
        })
    }
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }
    /// Run the simulation up to `now_secs` and return the resulting frame.
    /// The first call seeds `capacity` cycles, back-dated one interval apart,
    /// and moves the machine to Steady; every later call runs exactly one.
    pub fn tick(&mut self, now_secs: f64) -> VitalsSnapshot {
        match self.phase {
            EnginePhase::Seeding => {
                for i in 0..self.capacity {
                    let age = (self.capacity - 1 - i) as f64 * self.interval_secs;
                    self.cycle(now_secs - age);
                }
                self.phase = EnginePhase::Steady;
            }
            EnginePhase::Steady => self.cycle(now_secs),
        }
        self.snapshot()
    }
    fn cycle(&mut self, at_secs: f64) {
        let vitals = self.generator.generate();
        // MAP is derived from whatever BP pair this cycle drew, never generated
        let map = vitals.mean_arterial_pressure();
        self.store.append(
            TrackedMetric::HeartRate,
            VitalSample {
                time: at_secs,
                value: vitals.heart_rate,
            },
        );
        self.store.append(
            TrackedMetric::SpO2,
            VitalSample {
                time: at_secs,
                value: vitals.spo2,
            },
        );
        self.store.append(
            TrackedMetric::MeanArterialPressure,
            VitalSample {
                time: at_secs,
                value: map,
            },
        );
        self.current = vitals;
        self.last_time = at_secs;
    }
    pub fn snapshot(&self) -> VitalsSnapshot {
        VitalsSnapshot {
            time: self.last_time,
            current: self.current,
            heart_rate_history: self.store.snapshot(TrackedMetric::HeartRate),
            spo2_history: self.store.snapshot(TrackedMetric::SpO2),
            map_history: self.store.snapshot(TrackedMetric::MeanArterialPressure),
        }
    }
}
