use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use taxid::*;

fn test_ctx() -> Context {
    Context::at(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}

/// A valid body for a handful of representative countries.
const SAMPLES: &[(&str, &str)] = &[
    ("BE", "00.01.25-111.19"),
    ("BR", "111.444.777-35"),
    ("CN", "11010519491231002X"),
    ("DE", "21815081501 23"),
    ("ES", "X1234567L"),
    ("IT", "RSSMRA85T10A562S"),
    ("MX", "GODE561231GR8"),
    ("US", "123-45-6789"),
];

// ── Single lookups ─────────────────────────────────────────────────

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_alias", |b| {
        b.iter(|| black_box(resolve(black_box("gb"))));
    });
}

fn bench_check_single(c: &mut Criterion) {
    let ctx = test_ctx();
    let tin = Tin::new("IT", "RSSMRA85T10A562S");
    c.bench_function("check_it_codice_fiscale", |b| {
        b.iter(|| black_box(tin.check_with(ParseMode::Normalized, black_box(&ctx))));
    });
}

fn bench_identify_multi_scheme(c: &mut Criterion) {
    let ctx = test_ctx();
    let tin = Tin::new("ES", "X1234567L");
    c.bench_function("identify_es_nie", |b| {
        b.iter(|| black_box(tin.identify_tin_type_with(black_box(&ctx))));
    });
}

fn bench_format_input(c: &mut Criterion) {
    let tin = Tin::new("BR", "");
    c.bench_function("format_br_cpf", |b| {
        b.iter(|| black_box(tin.format_input(black_box("11144477735"))));
    });
}

// ── Batches ────────────────────────────────────────────────────────

fn bench_check_samples(c: &mut Criterion) {
    let ctx = test_ctx();
    let tins: Vec<Tin> = SAMPLES.iter().map(|(c, t)| Tin::new(c, t)).collect();
    c.bench_function("check_mixed_countries", |b| {
        b.iter(|| {
            for tin in &tins {
                black_box(tin.is_valid_with(ParseMode::Normalized, &ctx));
            }
        });
    });
}

fn bench_reject_every_country(c: &mut Criterion) {
    let ctx = test_ctx();
    let tins: Vec<Tin> = supported_countries()
        .into_iter()
        .map(|country| Tin::new(country, "1234567890"))
        .collect();
    c.bench_function("check_all_countries_10_digits", |b| {
        b.iter(|| {
            for tin in &tins {
                black_box(tin.check_with(ParseMode::Normalized, &ctx).is_ok());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_check_single,
    bench_identify_multi_scheme,
    bench_format_input,
    bench_check_samples,
    bench_reject_every_country,
);
criterion_main!(benches);
