use thiserror::Error;
#[derive(Debug, Error)]
pub enum VitalsError {
    #[error("history capacity must be greater than zero")]
    InvalidCapacity,
    #[error("tick interval must be a positive number of seconds, got {0}")]
    InvalidTickInterval(f64),
    #[error("anomaly odds {numerator}/{denominator} are not a valid probability")]
    InvalidAnomalyOdds { numerator: u32, denominator: u32 },
    #[error("{label} range is inverted: low {low} must stay below high {high}")]
    InvalidRange {
        label: &'static str,
        low: f64,
        high: f64,
    },
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for VitalsError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        VitalsError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for VitalsError {
    fn from(value: image::ImageError) -> Self {
        VitalsError::Plot(value.to_string())
    }
}
