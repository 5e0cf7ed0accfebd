//! Decision-boundary rasterization
//!
//! Converts a continuous prediction function into a discrete class raster:
//! build a uniform evaluation grid over the axis bounds, score every grid
//! point through the predictor in one batch, and reduce each score vector
//! to its dominant class index.

use crate::config::{AxisBounds, GridResolution};
use crate::error::{Result, VizError};
use crate::predictor::{validate_scores, Predictor};
use crate::sample::dominant_class;
use ndarray::{Array1, Array2, Axis};
use rayon::prelude::*;
use tracing::debug;

/// Predicted-class raster over a bounded region of the input plane.
///
/// `classes` is stored ny x nx; `class_at(ix, iy)` reads the class at
/// `(xs[ix], ys[iy])`.
#[derive(Debug, Clone)]
pub struct DecisionGrid {
    xs: Array1<f64>,
    ys: Array1<f64>,
    classes: Array2<usize>,
}

impl DecisionGrid {
    /// Evaluate the predictor across a `resolution.nx` x `resolution.ny`
    /// grid spanning `bounds`, both endpoints included on each axis.
    ///
    /// The predictor is invoked exactly once, on the full flattened batch
    /// with x varying fastest. Its output shape is checked against the
    /// batch size and `n_classes` before the reduction.
    pub fn evaluate<P: Predictor + ?Sized>(
        bounds: &AxisBounds,
        resolution: GridResolution,
        n_classes: usize,
        predictor: &P,
    ) -> Result<Self> {
        let (nx, ny) = (resolution.nx, resolution.ny);
        if nx < 2 || ny < 2 {
            return Err(VizError::InvalidConfiguration(format!(
                "grid resolution must be at least 2 stations per axis, got {nx}x{ny}"
            )));
        }
        let xs = Array1::linspace(bounds.x_min, bounds.x_max, nx);
        let ys = Array1::linspace(bounds.y_min, bounds.y_max, ny);

        let mut coords = Array2::<f64>::zeros((nx * ny, 2));
        for (iy, &y) in ys.iter().enumerate() {
            for (ix, &x) in xs.iter().enumerate() {
                let row = iy * nx + ix;
                coords[[row, 0]] = x;
                coords[[row, 1]] = y;
            }
        }

        debug!(nx, ny, batch = nx * ny, "evaluating decision grid");
        let scores = predictor.predict(&coords)?;
        validate_scores(&scores, nx * ny, n_classes)?;

        let flat: Vec<usize> = scores
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(dominant_class)
            .collect();
        let classes = Array2::from_shape_vec((ny, nx), flat)
            .map_err(|e| VizError::InvalidConfiguration(e.to_string()))?;

        Ok(Self { xs, ys, classes })
    }

    /// X coordinates of the grid stations
    pub fn xs(&self) -> &Array1<f64> {
        &self.xs
    }

    /// Y coordinates of the grid stations
    pub fn ys(&self) -> &Array1<f64> {
        &self.ys
    }

    /// Predicted class raster, ny x nx
    pub fn classes(&self) -> &Array2<usize> {
        &self.classes
    }

    /// Predicted class at station `(xs[ix], ys[iy])`
    pub fn class_at(&self, ix: usize, iy: usize) -> usize {
        self.classes[[iy, ix]]
    }
}
