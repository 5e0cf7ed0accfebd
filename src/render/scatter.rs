//! Sample scatter rendering in two and three dimensions

use crate::config::PlotConfig;
use crate::error::Result;
use crate::figure::Figure;
use crate::palette::Legend;
use crate::sample::SampleSet;
use plotters::prelude::*;
use tracing::debug;

/// Scatter-plot 2D samples colored by dominant class.
///
/// All points go through one batched draw call. Points outside the axis
/// bounds are clipped by the chart area, not filtered.
pub(crate) fn render_2d(samples: &SampleSet, config: &PlotConfig) -> Result<Figure> {
    let (width, height) = (config.figure_width, config.figure_height);
    let legend = Legend::new(&config.palette, samples.n_classes());
    let classes = samples.dominant_classes();
    let points = samples.points();

    let mut pixels = vec![0u8; Figure::buffer_len(width, height)];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let b = &config.bounds;
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(b.x_min..b.x_max, b.y_min..b.y_max)?;
        chart.configure_mesh().draw()?;

        let marker = config.marker_size as i32;
        chart.draw_series(classes.iter().enumerate().map(|(n, &class)| {
            let color = config.palette[class].to_plotters();
            Circle::new((points[[n, 0]], points[[n, 1]]), marker, color.filled())
        }))?;

        for entry in legend.iter() {
            let color = entry.color.to_plotters();
            chart
                .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?
                .label(entry.label.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled())
                });
        }
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
    }

    debug!(n_samples = samples.n_samples(), "rendered 2d scatter");
    Ok(Figure::from_rgb(width, height, pixels))
}

/// Scatter-plot 3D samples colored by dominant class.
///
/// X and y use the configured axis bounds; z reuses the x span so repeated
/// renders stay deterministic regardless of the data.
pub(crate) fn render_3d(samples: &SampleSet, config: &PlotConfig) -> Result<Figure> {
    let (width, height) = (config.figure_width, config.figure_height);
    let legend = Legend::new(&config.palette, samples.n_classes());
    let classes = samples.dominant_classes();
    let points = samples.points();

    let mut pixels = vec![0u8; Figure::buffer_len(width, height)];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let b = &config.bounds;
        let mut chart = ChartBuilder::on(&root).margin(10).build_cartesian_3d(
            b.x_min..b.x_max,
            b.y_min..b.y_max,
            b.x_min..b.x_max,
        )?;
        chart.configure_axes().draw()?;

        let marker = config.marker_size as i32;
        chart.draw_series(classes.iter().enumerate().map(|(n, &class)| {
            let color = config.palette[class].to_plotters();
            Circle::new(
                (points[[n, 0]], points[[n, 1]], points[[n, 2]]),
                marker,
                color.filled(),
            )
        }))?;

        for entry in legend.iter() {
            let color = entry.color.to_plotters();
            chart
                .draw_series(std::iter::empty::<Circle<(f64, f64, f64), i32>>())?
                .label(entry.label.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled())
                });
        }
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
    }

    debug!(n_samples = samples.n_samples(), "rendered 3d scatter");
    Ok(Figure::from_rgb(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn two_class_samples() -> SampleSet {
        let points = array![[0.0, 0.0], [1.0, 1.0], [-2.0, 3.0]];
        let labels = array![[0.9, 0.1], [0.2, 0.8], [0.5, 0.5]];
        SampleSet::new(points, labels).unwrap()
    }

    #[test]
    fn test_render_2d_fills_white_background() {
        let config = PlotConfig::new().with_figure_size(200, 150);
        let figure = render_2d(&two_class_samples(), &config).unwrap();
        assert_eq!(figure.width(), 200);
        assert_eq!(figure.height(), 150);
        // Margin corner stays untouched background
        assert_eq!(figure.pixel(0, 0), (255, 255, 255));
    }

    #[test]
    fn test_render_3d_produces_figure() {
        let points = array![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
        let labels = array![[1.0, 0.0], [0.0, 1.0]];
        let samples = SampleSet::new(points, labels).unwrap();
        let config = PlotConfig::new().with_figure_size(200, 150);
        let figure = render_3d(&samples, &config).unwrap();
        assert_eq!(figure.pixels().len(), 200 * 150 * 3);
    }
}
