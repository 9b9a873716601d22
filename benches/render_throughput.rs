//! Rendering and encoding throughput
//!
//! Measures tree building per backend and full encode for single plans and batches.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio::{
    Activity, DocxEncoder, ExportTarget, Exporter, LessonPlan, PdfEncoder, RenderConfig, tokenize,
};
use folio_render_flow::render_flow_batch;
use folio_render_page::render_page_batch;
use std::hint::black_box;

fn plan(index: usize) -> LessonPlan {
    LessonPlan {
        title: format!("Lesson {index}: **Forces** and motion"),
        objective: "Relate $F = ma$ to everyday *pushes*".to_string(),
        grade_level: "9 Secondary".to_string(),
        subject: "Physics".to_string(),
        materials: vec!["Trolley".to_string(), "Spring scale".to_string()],
        activities: (0..6)
            .map(|i| {
                Activity::new(
                    format!("Activity {i}"),
                    10,
                    "Measure **acceleration** and compare with $$ a = F/m $$ for *three* masses",
                )
            })
            .collect(),
        assessment: "Predict $a$ for a **doubled** force".to_string(),
        homework: "Read chapter 4".to_string(),
        summary: "Newton's second law".to_string(),
    }
}

fn bench_tokenize(c: &mut Criterion) {
    let text = "Measure **acceleration** and compare with $$ a = F/m $$ for *three* masses, \
                costing $5 and $10 "
        .repeat(20);
    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("mixed_markup", |b| b.iter(|| tokenize(black_box(&text))));
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let config = RenderConfig::default();
    let mut group = c.benchmark_group("render");
    for size in [1usize, 10, 50] {
        let plans: Vec<LessonPlan> = (0..size).map(plan).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("flow", size), &plans, |b, plans| {
            b.iter(|| render_flow_batch(black_box(plans), &config))
        });
        group.bench_with_input(BenchmarkId::new("page", size), &plans, |b, plans| {
            b.iter(|| render_page_batch(black_box(plans), &config))
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let exporter = Exporter::default();
    let plans: Vec<LessonPlan> = (0..10).map(plan).collect();
    let mut group = c.benchmark_group("encode");
    group.sample_size(20);

    if let Ok(flow) = exporter.export_batch(&plans, ExportTarget::Flow, "bench") {
        group.bench_function("docx_batch_10", |b| {
            b.iter(|| exporter.encode(black_box(&flow), &DocxEncoder))
        });
    }
    if let Ok(page) = exporter.export_batch(&plans, ExportTarget::Page, "bench") {
        let encoder = PdfEncoder::default();
        group.bench_function("pdf_batch_10", |b| {
            b.iter(|| exporter.encode(black_box(&page), &encoder))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_render, bench_encode);
criterion_main!(benches);
