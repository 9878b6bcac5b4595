use crate::sim::ranges::{RangeTable, VitalRange};
/// Tile color driver: a reading is either inside its normal band or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VitalStatus {
    Normal,
    Abnormal,
}
impl VitalStatus {
    pub fn is_abnormal(self) -> bool {
        self == VitalStatus::Abnormal
    }
}
/// Stateless value -> status mapping against a fixed range table.
#[derive(Clone, Debug)]
pub struct Classifier {
    ranges: RangeTable,
}
impl Classifier {
    pub fn new(ranges: RangeTable) -> Self {
        Self { ranges }
    }
    pub fn heart_rate(&self, value: f64) -> VitalStatus {
        Self::against(self.ranges.heart_rate.normal, value)
    }
    pub fn spo2(&self, value: f64) -> VitalStatus {
        Self::against(self.ranges.spo2.normal, value)
    }
    pub fn temperature(&self, value: f64) -> VitalStatus {
        Self::against(self.ranges.temperature.normal, value)
    }
    /// Blood pressure is a pair: the tile only reads Normal when both
    /// components sit inside their own bands.
    pub fn blood_pressure(&self, systolic: f64, diastolic: f64) -> VitalStatus {
        if self.ranges.systolic.normal.contains(systolic)
            && self.ranges.diastolic.normal.contains(diastolic)
        {
            VitalStatus::Normal
        } else {
            VitalStatus::Abnormal
        }
    }
    fn against(range: VitalRange, value: f64) -> VitalStatus {
        if range.contains(value) {
            VitalStatus::Normal
        } else {
            VitalStatus::Abnormal
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn classifier() -> Classifier {
        Classifier::new(RangeTable::clinical_defaults())
    }
    #[test]
    fn heart_rate_boundaries_are_inclusive() {
        let c = classifier();
        assert_eq!(c.heart_rate(59.0), VitalStatus::Abnormal);
        assert_eq!(c.heart_rate(60.0), VitalStatus::Normal);
        assert_eq!(c.heart_rate(100.0), VitalStatus::Normal);
        assert_eq!(c.heart_rate(101.0), VitalStatus::Abnormal);
    }
    #[test]
    fn spo2_flags_desaturation() {
        let c = classifier();
        assert_eq!(c.spo2(94.9), VitalStatus::Abnormal);
        assert_eq!(c.spo2(95.0), VitalStatus::Normal);
        assert_eq!(c.spo2(100.0), VitalStatus::Normal);
    }
    #[test]
    fn blood_pressure_needs_both_components_in_band() {
        let c = classifier();
        assert_eq!(c.blood_pressure(120.0, 80.0), VitalStatus::Normal);
        // systolic alone out of band flips the pair
        assert_eq!(c.blood_pressure(121.0, 80.0), VitalStatus::Abnormal);
        assert_eq!(c.blood_pressure(110.0, 85.0), VitalStatus::Abnormal);
        assert_eq!(c.blood_pressure(85.0, 55.0), VitalStatus::Abnormal);
    }
    #[test]
    fn temperature_boundaries() {
        let c = classifier();
        assert_eq!(c.temperature(97.7), VitalStatus::Abnormal);
        assert_eq!(c.temperature(97.8), VitalStatus::Normal);
        assert_eq!(c.temperature(99.1), VitalStatus::Normal);
        assert_eq!(c.temperature(99.2), VitalStatus::Abnormal);
    }
}
