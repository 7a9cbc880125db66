//! Per-keystroke costs of scanning and resolving
//!
//! Completion runs on every cursor move, so these should stay in the
//! microsecond range even on long scripts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cmddict_complete::{find_matches, scan_token, select_best_match, CompletionEngine};
use cmddict_dialects::Dialect;

const SHORT_SCRIPT: &str = "sc#f80 ab 1 ty .5";

const LONG_SCRIPT: &str = r"
[sc#fff asph 6 1
 [sc#f00 ab .7 .1]
 csgs [sc#0f0 ac 12 1.2 .4 .4 false true true]
 tx 2 ry 45 dup [mx] smth 2 1 1
 csgu [sc#00f ato 12 .6 1.4 tz -.3]
]
";

const COLOR_HEAVY: &str = "sc #fff #fff #fff #fff #fff #fff #fff #fff #fff";

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_token");
    for (name, text) in [("short", SHORT_SCRIPT), ("long", LONG_SCRIPT), ("colors", COLOR_HEAVY)] {
        let cursor = text.chars().count();
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| black_box(scan_token(black_box(text), cursor)));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let dict = Dialect::EasyMesh.dictionary();
    let mut group = c.benchmark_group("resolve");
    for token in ["a", "csg", "translatex", "zz"] {
        group.bench_with_input(BenchmarkId::from_parameter(token), token, |b, token| {
            b.iter(|| black_box(select_best_match(&dict, find_matches(&dict, black_box(token)))));
        });
    }
    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let engine = CompletionEngine::new(Dialect::EasyMesh.dictionary());
    let cursors: Vec<usize> = (0..LONG_SCRIPT.chars().count()).collect();
    c.bench_function("engine_every_cursor_long_script", |b| {
        b.iter(|| {
            for &cursor in &cursors {
                let _ = black_box(engine.complete(black_box(LONG_SCRIPT), cursor));
            }
        });
    });
}

criterion_group!(scan_benches, bench_scan);
criterion_group!(resolve_benches, bench_resolve, bench_engine);
criterion_main!(scan_benches, resolve_benches);
