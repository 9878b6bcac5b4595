use rand::Rng;
use crate::sim::config::AnomalyOdds;
use crate::sim::ranges::{RangeTable, VitalRange, VitalSpec};
use crate::sim::snapshot::CurrentVitals;
/// Produces one fresh reading per metric per tick. The random source is
/// injected so tests can seed it and replay exact sequences.
pub struct VitalGenerator<R: Rng> {
    rng: R,
    ranges: RangeTable,
    odds: AnomalyOdds,
}
impl<R: Rng> VitalGenerator<R> {
    pub fn new(ranges: RangeTable, odds: AnomalyOdds, rng: R) -> Self {
        Self { rng, ranges, odds }
    }
    /// Every field gets a new value; anomaly decisions are independent per
    /// metric, so systolic and diastolic can excurse separately.
    pub fn generate(&mut self) -> CurrentVitals {
        CurrentVitals {
            heart_rate: self.draw(self.ranges.heart_rate),
            spo2: self.draw(self.ranges.spo2),
            systolic: self.draw(self.ranges.systolic),
            diastolic: self.draw(self.ranges.diastolic),
            temperature: self.draw(self.ranges.temperature),
        }
    }
    fn draw(&mut self, spec: VitalSpec) -> f64 {
        if self.anomalous() {
            match (spec.below, spec.above) {
                (Some(below), Some(above)) => {
                    let side = if self.rng.gen_bool(0.5) { below } else { above };
                    self.uniform(side)
                }
                (Some(only), None) | (None, Some(only)) => self.uniform(only),
                // no excursion bands configured; stay in the normal band
                (None, None) => self.uniform(spec.normal),
            }
        } else {
            self.uniform(spec.normal)
        }
    }
    fn anomalous(&mut self) -> bool {
        self.rng.gen_range(1..=self.odds.denominator) <= self.odds.numerator
    }
    fn uniform(&mut self, range: VitalRange) -> f64 {
        self.rng.gen_range(range.low..=range.high)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    fn generator(odds: AnomalyOdds) -> VitalGenerator<StdRng> {
        VitalGenerator::new(RangeTable::clinical_defaults(), odds, StdRng::seed_from_u64(7))
    }
    fn in_spec(spec: VitalSpec, value: f64) -> bool {
        spec.normal.contains(value)
            || spec.below.map_or(false, |r| r.contains(value))
            || spec.above.map_or(false, |r| r.contains(value))
    }
    #[test]
    fn every_draw_lands_in_a_configured_band() {
        let ranges = RangeTable::clinical_defaults();
        let mut gen = generator(AnomalyOdds::default());
        for _ in 0..1000 {
            let vitals = gen.generate();
            assert!(in_spec(ranges.heart_rate, vitals.heart_rate));
            assert!(in_spec(ranges.spo2, vitals.spo2));
            assert!(in_spec(ranges.systolic, vitals.systolic));
            assert!(in_spec(ranges.diastolic, vitals.diastolic));
            assert!(in_spec(ranges.temperature, vitals.temperature));
        }
    }
    #[test]
    fn anomaly_rate_converges_to_the_configured_odds() {
        let ranges = RangeTable::clinical_defaults();
        let mut gen = generator(AnomalyOdds::default());
        let ticks = 10_000;
        let mut hr_anomalies = 0u32;
        let mut temp_anomalies = 0u32;
        for _ in 0..ticks {
            let vitals = gen.generate();
            if !ranges.heart_rate.normal.contains(vitals.heart_rate) {
                hr_anomalies += 1;
            }
            if !ranges.temperature.normal.contains(vitals.temperature) {
                temp_anomalies += 1;
            }
        }
        // expectation 0.2; allow a generous band around it
        for anomalies in [hr_anomalies, temp_anomalies] {
            let fraction = f64::from(anomalies) / f64::from(ticks);
            assert!(
                (0.17..=0.23).contains(&fraction),
                "anomalous fraction {fraction} drifted from 0.2"
            );
        }
    }
    #[test]
    fn zero_numerator_never_excurses() {
        let ranges = RangeTable::clinical_defaults();
        let mut gen = generator(AnomalyOdds {
            numerator: 0,
            denominator: 5,
        });
        for _ in 0..1000 {
            let vitals = gen.generate();
            assert!(ranges.heart_rate.normal.contains(vitals.heart_rate));
            assert!(ranges.spo2.normal.contains(vitals.spo2));
            assert!(ranges.systolic.normal.contains(vitals.systolic));
            assert!(ranges.diastolic.normal.contains(vitals.diastolic));
            assert!(ranges.temperature.normal.contains(vitals.temperature));
        }
    }
    #[test]
    fn one_sided_metric_only_excurses_downward() {
        let ranges = RangeTable::clinical_defaults();
        let mut gen = generator(AnomalyOdds {
            numerator: 1,
            denominator: 1,
        });
        for _ in 0..500 {
            let vitals = gen.generate();
            // SpO2 has no high excursion band; forced anomalies must all dip low
            assert!(ranges.spo2.below.expect("band").contains(vitals.spo2));
        }
    }
}
