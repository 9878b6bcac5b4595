/// Standard clinical approximation of mean arterial pressure from the two
/// blood-pressure components.
pub fn mean_arterial_pressure(systolic: f64, diastolic: f64) -> f64 {
    diastolic + (systolic - diastolic) / 3.0
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn textbook_value() {
        let map = mean_arterial_pressure(120.0, 80.0);
        assert!((map - 93.333_333).abs() < 1e-4);
    }
    #[test]
    fn stays_between_the_components() {
        for (systolic, diastolic) in [(120.0, 80.0), (140.0, 90.0), (90.0, 50.0), (100.0, 100.0)] {
            let map = mean_arterial_pressure(systolic, diastolic);
            assert!(map >= diastolic && map <= systolic);
        }
    }
}
