//! Benchmarks for template tokenizing and rendering.
//!
//! Benchmark targets:
//! - Short template render: <10us
//! - Render scales linearly with placeholder count
//! - Unterminated `{{` runs stay linear

// Criterion macros generate items without docs - this is expected for benchmarks
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use prompt_setup::rendering::tokenize;
use prompt_setup::{InputDraft, PreviewFormat, PromptTemplate, TemplateRenderer};

// ============================================================================
// Rendering Benchmarks
// ============================================================================

const SHORT_TEMPLATE: &str = "Hello {{name}}, welcome to {{place}}.";

fn draft(count: usize) -> InputDraft {
    (0..count)
        .map(|i| (format!("var{i}"), format!("value number {i}")))
        .collect()
}

fn template(count: usize) -> PromptTemplate {
    let mut source = String::new();
    for i in 0..count {
        source.push_str("Some literal text before ");
        source.push_str(&format!("{{{{var{i}}}}}"));
        source.push_str(" and after. ");
    }
    PromptTemplate::new(source)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.measurement_time(Duration::from_secs(5));
    let renderer = TemplateRenderer::new();

    let short = PromptTemplate::new(SHORT_TEMPLATE);
    let values: InputDraft = [("name", "Ava"), ("place", "the lab")].into_iter().collect();
    group.bench_function("short", |b| {
        b.iter(|| renderer.render(black_box(&short), black_box(&values)));
    });

    for format in [PreviewFormat::Markdown, PreviewFormat::Html, PreviewFormat::Json] {
        group.bench_function(format!("short_{format}"), |b| {
            b.iter(|| renderer.render_as(black_box(&short), black_box(&values), format));
        });
    }

    group.finish();
}

fn bench_render_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scaling");
    let renderer = TemplateRenderer::new();

    for count in [1_usize, 10, 100, 1000] {
        let template = template(count);
        let values = draft(count);
        group.throughput(Throughput::Bytes(template.as_str().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| renderer.render(black_box(&template), black_box(&values)));
        });
    }

    group.finish();
}

// ============================================================================
// Tokenizer Benchmarks
// ============================================================================

fn bench_tokenize_unterminated(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_unterminated");

    for size in [100_usize, 1_000, 10_000] {
        let source = "{{abc".repeat(size);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| tokenize(black_box(source)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render,
    bench_render_scaling,
    bench_tokenize_unterminated,
);

criterion_main!(benches);
