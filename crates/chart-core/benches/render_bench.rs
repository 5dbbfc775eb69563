use anyhow::Result;
use chart_core::{Axis, Chart, CurveType, Grid, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let mut ch = Chart::new();
    let labels: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
    let values = (0..n).map(|i| (i as f64 * 0.7).sin() * 10.0 + 12.0);
    ch.x_axis = Axis::category("x", labels);
    ch.grid = Some(Grid::dashed(3.0, 3.0));
    ch.add_series(Series::line("y", values).with_curve(CurveType::Monotone));
    ch.autoscale_y();
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[7usize, 365usize] {
        group.bench_function(format!("categories_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            opts.active_index = Some(n / 2);
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
