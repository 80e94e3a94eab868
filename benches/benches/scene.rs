// Copyright 2025 the Stratmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};
use stratmap_data::MapData;
use stratmap_viewer::{FilterSet, Navigation, compose_scene};

const TYPES: [&str; 8] = [
    "smoke", "flash", "frag", "camera", "barricade", "trap", "shield", "drone",
];

/// A two-floor document with `len` strategies spread over both floors and
/// every legend type.
fn document(len: usize) -> MapData {
    let strategies: Vec<Value> = (0..len)
        .map(|i| {
            let floor = if i % 2 == 0 { "1f" } else { "2f" };
            json!({
                "type": TYPES[i % TYPES.len()],
                "pos": { "x": format!("{}%", i % 100), "y": format!("{}%", (i * 7) % 100) },
                "rotation": (i % 4) as f64 * 45.0,
                "floorId": floor,
            })
        })
        .collect();
    let labels: Vec<Value> = (0..len / 8)
        .map(|i| json!({ "text": format!("Room {i}"), "pos": { "x": i % 100, "y": 50 } }))
        .collect();
    let types: Vec<Value> = TYPES
        .iter()
        .map(|id| json!({ "id": id, "label": id, "icon": format!("{id}.svg"), "width": "32px" }))
        .collect();
    serde_json::from_value(json!({
        "floors": {
            "1f": { "name": "1F", "mapImage": "1f.png", "labels": labels },
            "2f": { "name": "2F", "mapImage": "2f.png" }
        },
        "sites": { "a": { "name": "A", "strategies": strategies } },
        "strategyTypes": types
    }))
    .unwrap()
}

fn bench_compose_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/compose");

    for len in [64usize, 512, 4_096] {
        let data = document(len);
        let selection = Navigation::default().resolve(&data).unwrap();
        let all = FilterSet::new(&data.strategy_types);
        let mut half = all.clone();
        for id in TYPES.iter().step_by(2) {
            half.set_type(id, false);
        }
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("all_types", len), &data, |b, data| {
            b.iter(|| black_box(compose_scene(data, &selection, &all)));
        });
        group.bench_with_input(BenchmarkId::new("half_types", len), &data, |b, data| {
            b.iter(|| black_box(compose_scene(data, &selection, &half)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/decode");
    for len in [512usize, 4_096] {
        let text = serde_json::to_string(&raw_document(len)).unwrap();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(serde_json::from_str::<MapData>(text).unwrap()));
        });
    }
    group.finish();
}

fn raw_document(len: usize) -> Value {
    let strategies: Vec<Value> = (0..len)
        .map(|i| {
            json!({
                "type": TYPES[i % TYPES.len()],
                "pos": { "x": i % 100, "y": "12.5%" },
                "floorId": "1f",
            })
        })
        .collect();
    let types: Vec<Value> = TYPES
        .iter()
        .map(|id| json!({ "id": id, "label": id, "icon": "i.svg" }))
        .collect();
    json!({
        "floors": { "1f": { "name": "1F", "mapImage": "1f.png" } },
        "sites": { "a": { "name": "A", "strategies": strategies } },
        "strategyTypes": types
    })
}

criterion_group!(benches, bench_compose_scene, bench_decode);
criterion_main!(benches);
