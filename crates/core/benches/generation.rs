use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use postsmith_core::{
    DataPoints, GenerationRequest, Generator, GeneratorConfig, HtmlPage, assemble, extract_metadata, normalize_slug,
};

fn bench_generate(c: &mut Criterion) {
    let generator = Generator::new();
    let reference = std::fs::read_to_string("../../tests/fixtures/reference.txt").unwrap();

    let mut group = c.benchmark_group("generate");

    let plain = GenerationRequest::new("solar panel installation costs 2025");
    group.bench_with_input(BenchmarkId::new("keyword_only", "default"), &plain, |b, request| {
        b.iter(|| generator.generate(black_box(request)))
    });

    let full = GenerationRequest::new("solar panel installation costs 2025")
        .secondary_keywords(["net metering", "federal tax credit"])
        .reference(reference)
        .data_points(DataPoints::parse("2020:15,2021:23,2022:35,2023:48,2024:62").unwrap());
    group.bench_with_input(BenchmarkId::new("full_request", "reference+chart"), &full, |b, request| {
        b.iter(|| generator.generate(black_box(request)))
    });

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let config = GeneratorConfig::default();

    c.bench_function("assemble", |b| {
        b.iter(|| assemble(black_box("home battery storage"), &[], None, None, &config))
    });
}

fn bench_extract(c: &mut Criterion) {
    let html = Generator::new()
        .generate(&GenerationRequest::new("home battery storage"))
        .unwrap()
        .render()
        .unwrap();

    c.bench_function("extract_metadata", |b| b.iter(|| extract_metadata(black_box(&html))));
    c.bench_function("parse_rendered", |b| b.iter(|| HtmlPage::parse(black_box(&html))));
}

fn bench_slug(c: &mut Criterion) {
    c.bench_function("normalize_slug", |b| {
        b.iter(|| normalize_slug(black_box("  Über-efficient PV Modules: 22% Efficiency & Beyond (2025 Edition)  ")))
    });
}

criterion_group!(benches, bench_generate, bench_assemble, bench_extract, bench_slug);
criterion_main!(benches);
