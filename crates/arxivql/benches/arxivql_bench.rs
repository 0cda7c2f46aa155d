use arxivql::{ArticleId, Query};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn identifier_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("identifier");

    group.bench_function("parse_modern", |b| {
        b.iter(|| ArticleId::parse(black_box("arXiv:1805.12345v2")))
    });
    group.bench_function("parse_legacy", |b| {
        b.iter(|| ArticleId::parse(black_box("math.GT/0309136v1")))
    });

    let id = ArticleId::parse("arXiv:1805.12345v2").unwrap();
    group.bench_function("reconstruct", |b| b.iter(|| black_box(&id).reconstruct()));

    group.finish();
}

fn query_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    group.bench_function("phrase_title", |b| {
        b.iter(|| Query::title(black_box("large language model")))
    });

    group.bench_function("combined", |b| {
        b.iter(|| {
            let authors = Query::author(vec!["Ilya Sutskever", "Geoffrey Hinton"])?;
            let categories = Query::category(("cs.LG", "stat.ML"))?;
            let dates = Query::submitted_date(
                NaiveDate::from_ymd_opt(2023, 1, 1),
                NaiveDate::from_ymd_opt(2024, 1, 1),
            )?;
            authors
                .and(categories)?
                .and(dates)?
                .and(!Query::title("survey")?)?
                .to_query_string()
        })
    });

    group.finish();
}

criterion_group!(benches, identifier_benchmarks, query_benchmarks);
criterion_main!(benches);
