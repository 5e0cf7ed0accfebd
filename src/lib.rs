//! gmviz - Scatter and decision-boundary visualization for
//! Gaussian-mixture classification
//!
//! This crate renders classification results for visual inspection:
//! - Scatter plots of 2D/3D labeled samples, colored by dominant class
//! - Decision-boundary figures: a classifier's predicted-class regions
//!   rasterized over a bounded plane and filled at partial opacity
//!
//! No classifier lives here. The caller supplies sample points with
//! per-class label vectors and, for boundary renders, a [`Predictor`]
//! that scores coordinate batches. Every render call returns an
//! in-memory [`Figure`] the caller owns.
//!
//! # Modules
//!
//! - [`session`] - configuration owner and render dispatch
//! - [`sample`] - labeled sample data and the dominant-class reduction
//! - [`grid`] - decision-boundary rasterization
//! - [`predictor`] - batched prediction interface
//! - [`palette`] - color table and legend
//! - [`config`] - axis bounds, grid resolution, display options
//! - [`figure`] - in-memory rendering surface with PNG export
//!
//! [`Predictor`]: predictor::Predictor
//! [`Figure`]: figure::Figure

pub mod error;

pub mod config;
pub mod figure;
pub mod grid;
pub mod palette;
pub mod predictor;
pub mod sample;
pub mod session;

mod render;

pub use error::{Result, VizError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{AxisBounds, GridResolution, PlotConfig};
    pub use crate::error::{Result, VizError};
    pub use crate::figure::Figure;
    pub use crate::grid::DecisionGrid;
    pub use crate::palette::{ColorTable, Legend, LegendEntry, Rgb};
    pub use crate::predictor::{FnPredictor, Predictor};
    pub use crate::sample::SampleSet;
    pub use crate::session::VizSession;
}
