//! Visualization session: shared configuration and render dispatch

use crate::config::PlotConfig;
use crate::error::{Result, VizError};
use crate::figure::Figure;
use crate::grid::DecisionGrid;
use crate::palette::Legend;
use crate::predictor::Predictor;
use crate::render;
use crate::sample::SampleSet;

/// Owns the sample data and display configuration, and dispatches render
/// requests to the matching renderer.
///
/// A session holds no mutable state: every render call is a pure function
/// of the stored samples, the configuration, and (for boundary renders)
/// the supplied predictor, and returns a fresh [`Figure`] the caller owns.
#[derive(Debug, Clone)]
pub struct VizSession {
    samples: SampleSet,
    config: PlotConfig,
}

impl VizSession {
    /// Create a session over a validated sample set.
    ///
    /// Rejects configurations with inverted bounds, degenerate grid
    /// resolution, out-of-range opacity, zero figure dimensions, or a
    /// color table shorter than the class count.
    pub fn new(samples: SampleSet, config: PlotConfig) -> Result<Self> {
        config.validate()?;
        if config.palette.len() < samples.n_classes() {
            return Err(VizError::InvalidConfiguration(format!(
                "color table has {} colors but the sample set has {} classes",
                config.palette.len(),
                samples.n_classes()
            )));
        }
        Ok(Self { samples, config })
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Class count K, inferred from the label vectors
    pub fn n_classes(&self) -> usize {
        self.samples.n_classes()
    }

    /// Sample dimensionality D
    pub fn dims(&self) -> usize {
        self.samples.dims()
    }

    /// The legend shared by every render of this session
    pub fn legend(&self) -> Legend {
        Legend::new(&self.config.palette, self.samples.n_classes())
    }

    /// Scatter-plot the samples, colored by dominant label.
    ///
    /// Supports D = 2 and D = 3; any other dimensionality is
    /// [`VizError::UnsupportedDimensionality`].
    pub fn render_sample(&self) -> Result<Figure> {
        match self.samples.dims() {
            2 => render::scatter::render_2d(&self.samples, &self.config),
            3 => render::scatter::render_3d(&self.samples, &self.config),
            dims => Err(VizError::UnsupportedDimensionality { dims }),
        }
    }

    /// Render the predictor's decision regions over the configured bounds.
    ///
    /// Valid only for D = 2; for any other dimensionality the predictor is
    /// never invoked. The predictor receives the full evaluation grid as a
    /// single batch.
    pub fn render_boundary<P: Predictor + ?Sized>(&self, predictor: &P) -> Result<Figure> {
        let dims = self.samples.dims();
        if dims != 2 {
            return Err(VizError::UnsupportedDimensionality { dims });
        }
        let grid = DecisionGrid::evaluate(
            &self.config.bounds,
            self.config.resolution,
            self.samples.n_classes(),
            predictor,
        )?;
        render::boundary::render(&grid, &self.config, self.samples.n_classes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridResolution;
    use crate::palette::{ColorTable, Rgb};
    use ndarray::{array, Array2};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn samples_with_dims(dims: usize) -> SampleSet {
        let points = Array2::zeros((4, dims));
        let labels = array![[1.0, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 1.0]];
        SampleSet::new(points, labels).unwrap()
    }

    fn small_config() -> PlotConfig {
        PlotConfig::new()
            .with_resolution(GridResolution::square(20))
            .with_figure_size(200, 150)
    }

    struct CountingPredictor {
        calls: AtomicUsize,
    }

    impl Predictor for CountingPredictor {
        fn predict(&self, points: &Array2<f64>) -> Result<Array2<f64>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Array2::ones((points.nrows(), 2)))
        }
    }

    #[test]
    fn test_palette_shorter_than_class_count_rejected() {
        let config = small_config().with_palette(ColorTable::new(vec![Rgb(0, 0, 0)]));
        let err = VizSession::new(samples_with_dims(2), config).unwrap_err();
        assert!(matches!(err, VizError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_legend_matches_class_count() {
        let session = VizSession::new(samples_with_dims(2), small_config()).unwrap();
        assert_eq!(session.legend().len(), session.n_classes());
    }

    #[test]
    fn test_render_sample_unsupported_dims() {
        for dims in [1, 4] {
            let session = VizSession::new(samples_with_dims(dims), small_config()).unwrap();
            let err = session.render_sample().unwrap_err();
            assert!(
                matches!(err, VizError::UnsupportedDimensionality { dims: d } if d == dims),
                "dims = {dims}"
            );
        }
    }

    #[test]
    fn test_render_boundary_requires_2d() {
        let session = VizSession::new(samples_with_dims(3), small_config()).unwrap();
        let predictor = CountingPredictor {
            calls: AtomicUsize::new(0),
        };
        let err = session.render_boundary(&predictor).unwrap_err();
        assert!(matches!(err, VizError::UnsupportedDimensionality { dims: 3 }));
        // The grid must never be evaluated for unsupported dimensionality
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_render_boundary_evaluates_grid_once() {
        let session = VizSession::new(samples_with_dims(2), small_config()).unwrap();
        let predictor = CountingPredictor {
            calls: AtomicUsize::new(0),
        };
        let figure = session.render_boundary(&predictor).unwrap();
        assert_eq!(predictor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(figure.width(), 200);
    }

    #[test]
    fn test_render_sample_is_idempotent() {
        let points = array![[0.0, 0.0], [1.0, 1.0], [-2.0, 3.0], [4.0, -1.0]];
        let labels = array![[0.9, 0.1], [0.2, 0.8], [0.5, 0.5], [0.0, 1.0]];
        let samples = SampleSet::new(points, labels).unwrap();
        let session = VizSession::new(samples, small_config()).unwrap();

        let first = session.render_sample().unwrap();
        let second = session.render_sample().unwrap();
        assert_eq!(first.pixels(), second.pixels());
    }
}
