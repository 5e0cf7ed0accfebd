//! Error types for the gmviz crate

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Result type alias for gmviz operations
pub type Result<T> = std::result::Result<T, VizError>;

/// Main error type for the gmviz crate
#[derive(Error, Debug)]
pub enum VizError {
    #[error("Unsupported dimensionality: {dims}")]
    UnsupportedDimensionality { dims: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(
        "Predictor contract violation: expected {expected_rows}x{expected_cols} scores, got {actual_rows}x{actual_cols}"
    )]
    PredictorContract {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("Render error: {0}")]
    Render(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for VizError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        VizError::Render(err.to_string())
    }
}

impl From<image::ImageError> for VizError {
    fn from(err: image::ImageError) -> Self {
        VizError::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VizError::UnsupportedDimensionality { dims: 4 };
        assert_eq!(err.to_string(), "Unsupported dimensionality: 4");
    }

    #[test]
    fn test_contract_violation_display() {
        let err = VizError::PredictorContract {
            expected_rows: 100,
            expected_cols: 3,
            actual_rows: 100,
            actual_cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "Predictor contract violation: expected 100x3 scores, got 100x2"
        );
    }
}
