//! Decision-region rendering
//!
//! Fills each evaluated grid cell with its predicted-class color at partial
//! opacity, then overlays mesh lines and the class legend so scatter
//! figures of the same region line up visually.

use crate::config::PlotConfig;
use crate::error::Result;
use crate::figure::Figure;
use crate::grid::DecisionGrid;
use crate::palette::Legend;
use plotters::prelude::*;
use tracing::debug;

pub(crate) fn render(grid: &DecisionGrid, config: &PlotConfig, n_classes: usize) -> Result<Figure> {
    let (width, height) = (config.figure_width, config.figure_height);
    let legend = Legend::new(&config.palette, n_classes);
    let xs = grid.xs();
    let ys = grid.ys();

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

        // One series per class; each cell takes the class of its lower-left
        // station. Drawing per class keeps the legend bound to real series.
        for class in 0..n_classes {
            let color = config.palette[class]
                .to_plotters()
                .mix(config.boundary_opacity);
            chart.draw_series(
                (0..ys.len() - 1)
                    .flat_map(|iy| (0..xs.len() - 1).map(move |ix| (ix, iy)))
                    .filter(|&(ix, iy)| grid.class_at(ix, iy) == class)
                    .map(|(ix, iy)| {
                        Rectangle::new(
                            [(xs[ix], ys[iy]), (xs[ix + 1], ys[iy + 1])],
                            color.filled(),
                        )
                    }),
            )?;
        }
        chart.configure_mesh().draw()?;

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

    debug!(
        nx = xs.len(),
        ny = ys.len(),
        n_classes,
        "rendered decision boundary"
    );
    Ok(Figure::from_rgb(width, height, pixels))
}
