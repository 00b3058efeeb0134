use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use koch_snowflake::{
    CurveSpec, KochCurve, NeverCancel, PathRecorder, assemble_snowflake, generate, render_snowflake,
};

fn bench_stream_single_side(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_single_side");

    for level in [4, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(level), &level, |b, &level| {
            b.iter(|| {
                let stream = generate(black_box(level), black_box(300.0)).unwrap();
                stream.count()
            })
        });
    }

    group.finish();
}

fn bench_raw_curve_iterator(c: &mut Criterion) {
    let spec = CurveSpec::new(8, 300.0).unwrap();
    c.bench_function("raw_curve_level_8", |b| {
        b.iter(|| KochCurve::new(black_box(spec)).count())
    });
}

fn bench_record_snowflake_path(c: &mut Criterion) {
    let snowflake = assemble_snowflake(6, 300.0).unwrap();
    c.bench_function("record_snowflake_level_6", |b| {
        b.iter(|| {
            let mut recorder = PathRecorder::new();
            render_snowflake(black_box(&snowflake), &mut recorder, &NeverCancel).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_stream_single_side,
    bench_raw_curve_iterator,
    bench_record_snowflake_path,
);
criterion_main!(benches);
