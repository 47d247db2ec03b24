use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use folio::domain::{
    text::{char_prefix, truncate_to_width},
    typewriter::{Step, Typewriter, TypewriterParams},
};

const TEXT: &str = "Developer specializing in Next.js and Agentic AI, building modern web applications with intelligent automation. 或日あるひの暮方の事である。一人の下人が、羅生門の下で雨やみを待つてゐた。";

/// Drive one activation to completion, reading the display text after every step
fn run_to_completion(text: &str) -> usize {
    let mut typewriter = Typewriter::new(TypewriterParams::new(
        text,
        Duration::from_millis(80),
        Duration::from_millis(500),
    ));
    let mut step = typewriter.start();
    let mut shown = 0;
    while let Step::Schedule { activation, .. } = step {
        step = typewriter.advance(activation);
        shown += typewriter.display_text().len();
    }
    shown
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("typewriter full activation", |b| {
        b.iter(|| run_to_completion(black_box(TEXT)))
    });
    c.bench_function("char_prefix half", |b| {
        let n = TEXT.chars().count() / 2;
        b.iter(|| char_prefix(black_box(TEXT), black_box(n)).len())
    });
    c.bench_function("truncate_to_width 40", |b| {
        b.iter(|| truncate_to_width(black_box(TEXT), black_box(40)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
