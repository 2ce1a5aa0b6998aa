// Benchmarks for registry dispatch and lookup
//
// Run with: cargo bench -p hexconnector --bench dispatch

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexconnector::prelude::*;

fn connector() -> Connector {
    let mut connector = Connector::new();
    connector
        .register_adapter(
            "math",
            &Module::new("math")
                .function(INIT_ADAPTER, |_, _| Ok(Value::Null))
                .function("double", |_, args| {
                    let n = args.get(0).and_then(Value::as_i64).unwrap_or(0);
                    Ok(json!(n * 2))
                })
                .value("ratio", 2.5),
        )
        .unwrap();
    connector
}

fn benchmark_call_fn(c: &mut Criterion) {
    let mut connector = connector();

    c.bench_function("call_fn", |b| {
        b.iter(|| {
            connector
                .call_fn(black_box("math.double"), Args::new().arg(21))
                .unwrap()
        })
    });
}

fn benchmark_get_from(c: &mut Criterion) {
    let connector = connector();

    c.bench_function("get_from", |b| {
        b.iter(|| connector.get_value(black_box("math.ratio")).unwrap().clone())
    });
}

fn benchmark_render_arguments(c: &mut Criterion) {
    let args = Args::new()
        .arg("x".repeat(512))
        .arg(42)
        .kwarg("items", json!([1, 2, 3]));

    c.bench_function("render_arguments", |b| {
        b.iter(|| hexconnector_core::render_arguments(black_box(&args), 128))
    });
}

criterion_group!(
    benches,
    benchmark_call_fn,
    benchmark_get_from,
    benchmark_render_arguments
);
criterion_main!(benches);
