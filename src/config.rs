//! Display configuration shared by the scatter and boundary renderers

use crate::error::{Result, VizError};
use crate::palette::ColorTable;
use serde::{Deserialize, Serialize};

/// Rectangular region of the input plane that is rendered and, for boundary
/// plots, evaluated. Shared by both renderers so figures stay aligned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self {
            x_min: -6.0,
            x_max: 6.0,
            y_min: -6.0,
            y_max: 6.0,
        }
    }
}

impl AxisBounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.x_min < self.x_max) || !(self.y_min < self.y_max) {
            return Err(VizError::InvalidConfiguration(format!(
                "axis bounds must satisfy min < max, got x: [{}, {}], y: [{}, {}]",
                self.x_min, self.x_max, self.y_min, self.y_max
            )));
        }
        Ok(())
    }
}

/// Number of evaluation stations per axis for the decision-boundary grid.
///
/// Resolution is fixed per render, never adaptive. Coarser grids trade
/// boundary fidelity for speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridResolution {
    pub nx: usize,
    pub ny: usize,
}

impl Default for GridResolution {
    fn default() -> Self {
        Self { nx: 1000, ny: 1000 }
    }
}

impl GridResolution {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self { nx, ny }
    }

    /// Same number of stations on both axes
    pub fn square(n: usize) -> Self {
        Self { nx: n, ny: n }
    }

    /// Total number of grid points, i.e. the predictor batch size
    pub fn batch_size(&self) -> usize {
        self.nx * self.ny
    }
}

/// Configuration for a visualization session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Visible (and evaluated) region of the input plane
    pub bounds: AxisBounds,

    /// Decision-boundary grid resolution
    pub resolution: GridResolution,

    /// Opacity of the filled decision regions, in (0, 1]
    pub boundary_opacity: f64,

    /// Output figure width in pixels
    pub figure_width: u32,

    /// Output figure height in pixels
    pub figure_height: u32,

    /// Scatter marker radius in pixels
    pub marker_size: u32,

    /// Per-class display colors; index 0 is the background color
    pub palette: ColorTable,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            bounds: AxisBounds::default(),
            resolution: GridResolution::default(),
            boundary_opacity: 0.15,
            figure_width: 800,
            figure_height: 600,
            marker_size: 2,
            palette: ColorTable::default(),
        }
    }
}

impl PlotConfig {
    /// Create a new configuration with the reference defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set axis bounds
    pub fn with_bounds(mut self, bounds: AxisBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Builder method to set the boundary grid resolution
    pub fn with_resolution(mut self, resolution: GridResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Builder method to set the decision-region fill opacity
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.boundary_opacity = opacity;
        self
    }

    /// Builder method to set the output figure size in pixels
    pub fn with_figure_size(mut self, width: u32, height: u32) -> Self {
        self.figure_width = width;
        self.figure_height = height;
        self
    }

    /// Builder method to set the scatter marker radius
    pub fn with_marker_size(mut self, size: u32) -> Self {
        self.marker_size = size;
        self
    }

    /// Builder method to replace the color table
    pub fn with_palette(mut self, palette: ColorTable) -> Self {
        self.palette = palette;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if self.resolution.nx < 2 || self.resolution.ny < 2 {
            return Err(VizError::InvalidConfiguration(format!(
                "grid resolution must be at least 2 stations per axis, got {}x{}",
                self.resolution.nx, self.resolution.ny
            )));
        }
        if !(self.boundary_opacity > 0.0 && self.boundary_opacity <= 1.0) {
            return Err(VizError::InvalidConfiguration(format!(
                "boundary opacity must be in (0, 1], got {}",
                self.boundary_opacity
            )));
        }
        if self.figure_width == 0 || self.figure_height == 0 {
            return Err(VizError::InvalidConfiguration(format!(
                "figure size must be nonzero, got {}x{}",
                self.figure_width, self.figure_height
            )));
        }
        Ok(())
    }
}
