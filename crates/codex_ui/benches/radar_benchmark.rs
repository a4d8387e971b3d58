//! Benchmark for radar projection and detail card derivation.
//!
//! Run with: cargo bench --package codex_ui --bench radar_benchmark

// criterion_group! emits an undocumented pub fn.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use codex_core::{ChampionInfo, ChampionRecord};
use codex_ui::{project, ChampionDetail, ImageResolver, Theme};

fn benchmark_project(c: &mut Criterion) {
    c.bench_function("radar_project", |b| {
        let mut v = 0.0f64;
        b.iter(|| {
            v = (v + 0.1) % 10.0;
            black_box(project(black_box(v), black_box(10.0 - v), black_box(v * 0.5)))
        });
    });
}

fn benchmark_detail(c: &mut Criterion) {
    let record = ChampionRecord::new("Garen", "가렌")
        .with_tags(["Fighter", "Tank"])
        .with_info(ChampionInfo {
            attack: 7,
            defense: 7,
            magic: 1,
            difficulty: 5,
        });
    let images = ImageResolver::default();
    let theme = Theme::default();

    c.bench_function("detail_build_and_render", |b| {
        b.iter(|| {
            let detail = ChampionDetail::build(black_box(&record), &images);
            black_box(detail.render(&theme).command_count())
        });
    });
}

criterion_group!(benches, benchmark_project, benchmark_detail);
criterion_main!(benches);
