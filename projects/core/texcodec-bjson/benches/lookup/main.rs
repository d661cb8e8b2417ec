use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::{Map, Value as JsonValue};
use std::hint::black_box;
use texcodec_bjson::{Document, DocumentRef, Validation};

const KEYS: usize = 1000;

fn wide_object() -> JsonValue {
    let members: Map<String, JsonValue> = (0..KEYS)
        .map(|i| (format!("texture_{i:04}"), JsonValue::from(i as u64 * 64)))
        .collect();
    JsonValue::Object(members)
}

fn criterion_benchmark(c: &mut Criterion) {
    let tree = wide_object();
    let keys: Vec<String> = (0..KEYS).map(|i| format!("texture_{i:04}")).collect();

    let mut group = c.benchmark_group("Binary JSON");
    group.bench_function("from_tree", |b| b.iter(|| Document::from_tree(black_box(&tree))));

    let bytes = Document::from_tree(&tree).unwrap().to_bytes();
    group.bench_function("validate", |b| {
        b.iter(|| DocumentRef::from_raw_bytes(black_box(&bytes), Validation::Validate))
    });

    let view = DocumentRef::from_raw_bytes(&bytes, Validation::Validate).unwrap();
    group.throughput(criterion::Throughput::Elements(KEYS as u64));
    group.bench_function("get_every_key", |b| {
        b.iter(|| {
            let root = view.container();
            keys.iter().filter(|key| root.get(black_box(key)).is_some()).count()
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
