//! Performance benchmarks for the voucher engine.
//!
//! Covers the amount formatter, a single receipt, and whole rosters of 100
//! and 1000 employees both in-process and through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use vt_engine::api::{AppState, ReceiptRequest, create_router};
use vt_engine::calculation::{BatchInput, amount_in_words, build_receipt, calculate_batch};
use vt_engine::config::ConfigLoader;
use vt_engine::models::{EmployeeInput, HolidaySet, Policy, ReferenceMonth};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const HOLIDAYS: &str = "01/01, 21/04, 01/05, 07/09, 12/10, 02/11, 15/11, 20/11, 25/12";

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Builds a roster where admission and departure dates vary across the month.
fn create_roster(size: usize) -> String {
    let mut csv = String::from("nome,data_admissao,valor_conducao,data_saida\n");
    for i in 0..size {
        let admission_day = 1 + (i % 28);
        let departure = if i % 5 == 0 {
            format!("2024-03-{:02}", 28 - (i % 20))
        } else {
            String::new()
        };
        csv.push_str(&format!(
            "Funcionario {:04},2024-03-{:02},{}.{:02},{}\n",
            i,
            admission_day,
            3 + i % 4,
            (i * 7) % 100,
            departure
        ));
    }
    csv
}

/// Benchmark: amount written out in words.
fn bench_amount_in_words(c: &mut Criterion) {
    let amounts = [
        Decimal::new(11440, 2),
        Decimal::new(123456, 2),
        Decimal::new(98765432199, 2),
    ];

    let mut group = c.benchmark_group("amount_in_words");
    for amount in amounts {
        group.bench_with_input(BenchmarkId::from_parameter(amount), &amount, |b, amount| {
            b.iter(|| amount_in_words(black_box(*amount)).unwrap())
        });
    }
    group.finish();
}

/// Benchmark: one receipt with holidays and alternating Saturdays.
fn bench_single_receipt(c: &mut Criterion) {
    let month = ReferenceMonth::new(2024, 3).unwrap();
    let holidays = HolidaySet::parse(Some(HOLIDAYS), 2024);
    let employee = EmployeeInput::new(
        "Ana",
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        Some(NaiveDate::from_ymd_opt(2024, 3, 27).unwrap()),
        Decimal::new(520, 2),
    )
    .unwrap();

    c.bench_function("single_receipt", |b| {
        b.iter(|| {
            build_receipt(
                black_box(&employee),
                month,
                &holidays,
                Policy::with_alternating_saturdays(),
                1,
            )
            .unwrap()
        })
    });
}

/// Benchmark: whole rosters computed in-process.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_processing");

    for size in [100usize, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| {
                calculate_batch(&BatchInput {
                    reference_month: "2024-03",
                    holidays: Some(HOLIDAYS),
                    roster_csv: roster,
                    ..Default::default()
                })
                .unwrap()
            })
        });
    }

    group.finish();
}

/// Benchmark: a 1000-employee roster through the HTTP router.
fn bench_http_roster(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let request = ReceiptRequest {
        reference_month: "2024-03".to_string(),
        holidays: None,
        consider_alternating_saturdays: Some(true),
        include_national_holidays: true,
        roster_csv: create_roster(1000),
    };
    let body = serde_json::to_string(&request).unwrap();

    let mut group = c.benchmark_group("http_processing");
    group.throughput(Throughput::Elements(1000));
    group.sample_size(10);

    group.bench_function("roster_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(state.clone());
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/receipts")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_amount_in_words,
    bench_single_receipt,
    bench_batch,
    bench_http_roster
);
criterion_main!(benches);
