//! Benchmarks for the structure recovery pipeline over a synthetic document.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use miranda_core::layout::{ExtractParams, Fragment, assemble_lines};
use miranda_core::structure::ClauseForest;

fn synthetic_document() -> Vec<Fragment> {
    let mut fragments = Vec::new();
    for clause in 1..=10u32 {
        let page = clause;
        fragments.push(Fragment {
            page,
            top: 60.0,
            left: 56.0,
            width: 180.0,
            text: format!("{clause} Clause heading number {clause}"),
            font_size: 16.0,
            bold: true,
        });
        for sub in 1..=5u32 {
            let base = 80.0 + f64::from(sub) * 120.0;
            fragments.push(Fragment {
                page,
                top: base,
                left: 56.0,
                width: 160.0,
                text: format!("{clause}.{sub} Subclause heading"),
                font_size: 14.5,
                bold: true,
            });
            for line in 0..4u32 {
                fragments.push(Fragment {
                    page,
                    top: base + 16.0 + f64::from(line) * 12.0,
                    left: 56.0,
                    width: 420.0,
                    text: "Body prose line with enough words to read like a sentence."
                        .to_string(),
                    font_size: 11.0,
                    bold: false,
                });
            }
        }
    }
    fragments
}

fn bench_pipeline(c: &mut Criterion) {
    let fragments = synthetic_document();
    let params = ExtractParams::default();

    c.bench_function("assemble_and_build_forest", |b| {
        b.iter(|| {
            let lines = assemble_lines(black_box(fragments.clone()));
            black_box(ClauseForest::build(&lines, &params))
        });
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
