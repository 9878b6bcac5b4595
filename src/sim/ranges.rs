use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use crate::sim::error::VitalsError;
/// Inclusive value band. Invariant: `low < high`, checked by `validate`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalRange {
    pub low: f64,
    pub high: f64,
}
impl VitalRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
    fn validate(&self, label: &'static str) -> Result<(), VitalsError> {
        if self.low >= self.high {
            return Err(VitalsError::InvalidRange {
                label,
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}
/// Normal band plus the excursion bands an anomalous draw may land in.
/// A one-sided metric (SpO2) simply leaves the missing side as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalSpec {
    pub normal: VitalRange,
    pub below: Option<VitalRange>,
    pub above: Option<VitalRange>,
}
impl VitalSpec {
    fn validate(&self, label: &'static str) -> Result<(), VitalsError> {
        self.normal.validate(label)?;
        if let Some(below) = self.below {
            below.validate(label)?;
        }
        if let Some(above) = self.above {
            above.validate(label)?;
        }
        Ok(())
    }
}
/// Per-metric generation and classification bands. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeTable {
    pub heart_rate: VitalSpec,
    pub spo2: VitalSpec,
    pub systolic: VitalSpec,
    pub diastolic: VitalSpec,
    pub temperature: VitalSpec,
}
impl RangeTable {
    /// Textbook adult resting ranges, matching the dashboard's tile thresholds.
    pub fn clinical_defaults() -> Self {
        Self {
            heart_rate: VitalSpec {
                normal: VitalRange::new(60.0, 100.0),
                below: Some(VitalRange::new(40.0, 59.0)),
                above: Some(VitalRange::new(101.0, 140.0)),
            },
            spo2: VitalSpec {
                normal: VitalRange::new(95.0, 100.0),
                below: Some(VitalRange::new(90.0, 94.0)),
                above: None,
            },
            systolic: VitalSpec {
                normal: VitalRange::new(90.0, 120.0),
                below: Some(VitalRange::new(80.0, 89.0)),
                above: Some(VitalRange::new(121.0, 140.0)),
            },
            diastolic: VitalSpec {
                normal: VitalRange::new(60.0, 80.0),
                below: Some(VitalRange::new(50.0, 59.0)),
                above: Some(VitalRange::new(81.0, 90.0)),
            },
            temperature: VitalSpec {
                normal: VitalRange::new(97.8, 99.1),
                below: Some(VitalRange::new(96.0, 97.7)),
                above: Some(VitalRange::new(99.2, 100.4)),
            },
        }
    }
    pub fn validate(&self) -> Result<(), VitalsError> {
        self.heart_rate.validate("heart rate")?;
        self.spo2.validate("SpO2")?;
        self.systolic.validate("systolic blood pressure")?;
        self.diastolic.validate("diastolic blood pressure")?;
        self.temperature.validate("temperature")?;
        Ok(())
    }
}
pub static DEFAULT_RANGES: Lazy<RangeTable> = Lazy::new(RangeTable::clinical_defaults);
impl Default for RangeTable {
    fn default() -> Self {
        DEFAULT_RANGES.clone()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn defaults_are_valid() {
        assert!(RangeTable::default().validate().is_ok());
    }
    #[test]
    fn inverted_range_is_rejected() {
        let mut table = RangeTable::clinical_defaults();
        table.heart_rate.normal = VitalRange::new(100.0, 60.0);
        assert!(matches!(
            table.validate(),
            Err(VitalsError::InvalidRange { label: "heart rate", .. })
        ));
    }
    #[test]
    fn contains_is_inclusive_on_both_bounds() {
        let range = VitalRange::new(60.0, 100.0);
        assert!(range.contains(60.0));
        assert!(range.contains(100.0));
        assert!(!range.contains(59.999));
        assert!(!range.contains(100.001));
    }
}
