use serde::{Deserialize, Serialize};
use crate::sim::error::VitalsError;
use crate::sim::ranges::RangeTable;
/// Probability of an anomalous draw, expressed as numerator/denominator so
/// the config file stays readable (the default is 1 in 5).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyOdds {
    pub numerator: u32,
    pub denominator: u32,
}
impl AnomalyOdds {
    pub fn validate(&self) -> Result<(), VitalsError> {
        if self.denominator == 0 || self.numerator > self.denominator {
            return Err(VitalsError::InvalidAnomalyOdds {
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        Ok(())
    }
}
impl Default for AnomalyOdds {
    fn default() -> Self {
        Self {
            numerator: 1,
            denominator: 5,
        }
    }
}
/// Everything the engine accepts at construction. Loaded from an optional
/// JSON file next to the executable; missing fields fall back to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tick_interval_secs: f64,
    pub history_capacity: usize,
    pub anomaly_odds: AnomalyOdds,
    pub ranges: RangeTable,
}
impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: 2.0,
            history_capacity: 20,
            anomaly_odds: AnomalyOdds::default(),
            ranges: RangeTable::default(),
        }
    }
}
impl EngineConfig {
    /// Rejects misconfiguration up front; nothing is allowed to fail mid-run.
    pub fn validate(&self) -> Result<(), VitalsError> {
        if self.history_capacity == 0 {
            return Err(VitalsError::InvalidCapacity);
        }
        if !(self.tick_interval_secs.is_finite() && self.tick_interval_secs > 0.0) {
            return Err(VitalsError::InvalidTickInterval(self.tick_interval_secs));
        }
        self.anomaly_odds.validate()?;
        self.ranges.validate()?;
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }
    #[test]
    fn zero_capacity_is_rejected() {
        let config = EngineConfig {
            history_capacity: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(VitalsError::InvalidCapacity)));
    }
    #[test]
    fn non_positive_interval_is_rejected() {
        for bad in [0.0, -2.0, f64::NAN] {
            let config = EngineConfig {
                tick_interval_secs: bad,
                ..EngineConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(VitalsError::InvalidTickInterval(_))
            ));
        }
    }
    #[test]
    fn odds_must_form_a_probability() {
        for (numerator, denominator) in [(1, 0), (6, 5)] {
            let config = EngineConfig {
                anomaly_odds: AnomalyOdds {
                    numerator,
                    denominator,
                },
                ..EngineConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(VitalsError::InvalidAnomalyOdds { .. })
            ));
        }
    }
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"tick_interval_secs": 0.5}"#).expect("parse");
        assert_eq!(config.tick_interval_secs, 0.5);
        assert_eq!(config.history_capacity, 20);
        assert!(config.validate().is_ok());
    }
}
