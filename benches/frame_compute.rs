use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandel_drift::{
    Complex, FrameBuffer, ViewportState, adjusted_iterations, escape_time, render_frame,
};
use std::hint::black_box;

fn bench_escape_time(c: &mut Criterion) {
    let boundary = Complex {
        real: -0.743,
        imag: 0.131,
    };
    let interior = Complex {
        real: 0.0,
        imag: 0.0,
    };

    c.bench_function("escape_time/near_boundary", |b| {
        b.iter(|| escape_time(black_box(boundary), black_box(1000)))
    });
    c.bench_function("escape_time/pruned_interior", |b| {
        b.iter(|| escape_time(black_box(interior), black_box(1000)))
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame_320x240");

    for zoom in [1.0, 64.0, 4096.0] {
        group.bench_with_input(BenchmarkId::from_parameter(zoom), &zoom, |b, &zoom| {
            let view = ViewportState {
                zoom,
                offset_x: -0.743,
                offset_y: 0.131,
                ..ViewportState::default()
            };
            let budget = adjusted_iterations(zoom);
            let mut buffer = FrameBuffer::new(320, 240).unwrap();

            b.iter(|| render_frame(black_box(&view), black_box(budget), &mut buffer));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_escape_time, bench_render_frame);
criterion_main!(benches);
