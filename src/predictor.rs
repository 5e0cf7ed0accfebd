//! Batched prediction interface for boundary rendering

use crate::error::{Result, VizError};
use ndarray::Array2;

/// External classifier capability.
///
/// One operation: given an N x 2 batch of coordinates, return an N x K
/// matrix of per-class scores. The batch shape is part of the contract --
/// implementations must accept batches up to the full grid size
/// (resolution squared) in a single call, and callers never fall back to
/// per-point invocation.
pub trait Predictor {
    fn predict(&self, points: &Array2<f64>) -> Result<Array2<f64>>;
}

/// Adapter turning a plain scoring closure into a [`Predictor`]
pub struct FnPredictor<F> {
    scorer: F,
}

impl<F> FnPredictor<F>
where
    F: Fn(&Array2<f64>) -> Array2<f64>,
{
    pub fn new(scorer: F) -> Self {
        Self { scorer }
    }
}

impl<F> Predictor for FnPredictor<F>
where
    F: Fn(&Array2<f64>) -> Array2<f64>,
{
    fn predict(&self, points: &Array2<f64>) -> Result<Array2<f64>> {
        Ok((self.scorer)(points))
    }
}

/// Check a returned score matrix against the requested batch size and the
/// session's class count.
pub(crate) fn validate_scores(
    scores: &Array2<f64>,
    expected_rows: usize,
    expected_cols: usize,
) -> Result<()> {
    if scores.nrows() != expected_rows || scores.ncols() != expected_cols {
        return Err(VizError::PredictorContract {
            expected_rows,
            expected_cols,
            actual_rows: scores.nrows(),
            actual_cols: scores.ncols(),
        });
    }
    Ok(())
}
