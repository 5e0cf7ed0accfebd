use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gmviz::config::{AxisBounds, GridResolution};
use gmviz::grid::DecisionGrid;
use gmviz::predictor::FnPredictor;
use ndarray::{Array2, Axis};

/// Cheap three-class scorer: nearest of three fixed centers
fn nearest_center_scores(points: &Array2<f64>) -> Array2<f64> {
    let centers = [(-3.0, -3.0), (0.0, 3.0), (3.0, -1.0)];
    let mut scores = Array2::zeros((points.nrows(), 3));
    for (i, row) in points.axis_iter(Axis(0)).enumerate() {
        for (k, &(cx, cy)) in centers.iter().enumerate() {
            let d2 = (row[0] - cx).powi(2) + (row[1] - cy).powi(2);
            scores[[i, k]] = -d2;
        }
    }
    scores
}

fn bench_grid_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("decision_grid");
    group.sample_size(10);

    let bounds = AxisBounds::default();
    let predictor = FnPredictor::new(nearest_center_scores);

    for n in [100, 250, 500].iter() {
        group.bench_with_input(BenchmarkId::new("evaluate", n), n, |b, &n| {
            b.iter(|| {
                DecisionGrid::evaluate(
                    black_box(&bounds),
                    GridResolution::square(n),
                    3,
                    &predictor,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid_evaluation);
criterion_main!(benches);
