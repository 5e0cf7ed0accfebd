//! Labeled sample data and the dominant-class reduction

use crate::error::{Result, VizError};
use ndarray::{Array2, ArrayView1, Axis};

/// Index of the maximum component of a label or score vector.
///
/// Ties resolve to the lowest index: the scan only advances on a strictly
/// greater value, so the first maximum wins. This keeps point colors and
/// boundary rasters deterministic.
pub(crate) fn dominant_class(row: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (index, &score) in row.iter().enumerate() {
        if score > best_score {
            best = index;
            best_score = score;
        }
    }
    best
}

/// Immutable set of sample points with per-class label vectors.
///
/// `points` is n x D, `labels` is n x K. Dimensionality D and class count K
/// are inferred from the matrix shapes at construction.
#[derive(Debug, Clone)]
pub struct SampleSet {
    points: Array2<f64>,
    labels: Array2<f64>,
}

impl SampleSet {
    /// Build a sample set, validating the provider contract:
    /// at least one sample, matching point/label row counts, and nonzero
    /// dimensionality and class count.
    pub fn new(points: Array2<f64>, labels: Array2<f64>) -> Result<Self> {
        if points.nrows() == 0 {
            return Err(VizError::InvalidConfiguration(
                "sample set is empty".to_string(),
            ));
        }
        if points.nrows() != labels.nrows() {
            return Err(VizError::InvalidConfiguration(format!(
                "point/label count mismatch: {} points, {} label vectors",
                points.nrows(),
                labels.nrows()
            )));
        }
        if points.ncols() == 0 {
            return Err(VizError::InvalidConfiguration(
                "points must have at least one coordinate".to_string(),
            ));
        }
        if labels.ncols() == 0 {
            return Err(VizError::InvalidConfiguration(
                "label vectors must cover at least one class".to_string(),
            ));
        }
        Ok(Self { points, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.points.nrows()
    }

    /// Dimensionality D of the sample points
    pub fn dims(&self) -> usize {
        self.points.ncols()
    }

    /// Class count K, the width of the label vectors
    pub fn n_classes(&self) -> usize {
        self.labels.ncols()
    }

    pub fn points(&self) -> &Array2<f64> {
        &self.points
    }

    pub fn labels(&self) -> &Array2<f64> {
        &self.labels
    }

    /// Dominant class index for every sample, in sample order
    pub fn dominant_classes(&self) -> Vec<usize> {
        self.labels
            .axis_iter(Axis(0))
            .map(dominant_class)
            .collect()
    }
}
