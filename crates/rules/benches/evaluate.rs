use check_json_core::Severity;
use check_json_rules::{flatten, RuleProcessor, RuleSet};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

fn cluster_document(modules: usize) -> Value {
    let modules: Vec<Value> = (0..modules)
        .map(|i| {
            json!({
                "id": format!("module{i}"),
                "status": if i % 10 == 0 { "ALARM" } else { "OK" },
                "metrics": {"latency_ms": i % 250, "queue": i % 17}
            })
        })
        .collect();
    json!({"cluster": {"name": "primary", "modules": modules}})
}

fn benchmark_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for size in [10, 100, 1000] {
        let document = cluster_document(size);
        group.bench_function(format!("modules_{size}"), |b| {
            b.iter(|| black_box(flatten(&document).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let rules = RuleSet::parse(
        Severity::Critical,
        &[r"cluster\.modules\.\[\d+\]\.status,OK,1"],
        &[
            r"cluster\.modules.*\.latency_ms,200,2",
            r"cluster\.modules.*\.queue,@15:,2",
        ],
        &[r"cluster\.name", r"cluster\.leader"],
    )
    .unwrap();

    for size in [10, 100, 1000] {
        let properties = flatten(&cluster_document(size)).unwrap();
        group.bench_function(format!("modules_{size}"), |b| {
            b.iter(|| black_box(RuleProcessor::new(&properties).evaluate(&rules)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_flatten, benchmark_evaluate);
criterion_main!(benches);
