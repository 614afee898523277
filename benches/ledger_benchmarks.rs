//! Performance benchmarks for the payroll ledger.
//!
//! Covers the net salary formula, in-memory and CSV-backed appends, table
//! loads at a few sizes, and a full `POST /payroll` round trip.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_ledger::api::{AppState, create_router};
use payroll_ledger::calculation::compute_net;
use payroll_ledger::directory::EmployeeDirectory;
use payroll_ledger::ledger::PayrollLedger;
use payroll_ledger::models::{EmployeeRecord, PayrollInput};
use payroll_ledger::store::{CsvTableStore, InMemoryTableStore};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn sample_input() -> PayrollInput {
    PayrollInput {
        basic: Decimal::new(100_050, 2),
        allowance: Decimal::new(10_025, 2),
        overtime_hours: Decimal::new(15, 1),
        overtime_rate: Decimal::new(33_333, 3),
        deductions: Decimal::new(50, 0),
    }
}

/// Benchmark: The net salary formula on its own.
fn bench_compute_net(c: &mut Criterion) {
    let input = sample_input();
    c.bench_function("compute_net", |b| {
        b.iter(|| {
            black_box(compute_net(
                black_box(input.basic),
                black_box(input.allowance),
                black_box(input.overtime_hours),
                black_box(input.overtime_rate),
                black_box(input.deductions),
            ))
        })
    });
}

/// Benchmark: Appending entries to an in-memory ledger.
fn bench_add_entry_in_memory(c: &mut Criterion) {
    let mut ledger = PayrollLedger::new(InMemoryTableStore::new());
    c.bench_function("add_entry_in_memory", |b| {
        b.iter(|| black_box(ledger.add_entry("E1", "August 2025", sample_input()).unwrap()))
    });
}

/// Benchmark: Appending entries to a CSV file (includes fsync).
fn bench_add_entry_csv(c: &mut Criterion) {
    let dir = tempfile::TempDir::new().unwrap();
    let mut ledger = PayrollLedger::new(CsvTableStore::new(dir.path()));
    c.bench_function("add_entry_csv", |b| {
        b.iter(|| black_box(ledger.add_entry("E1", "August 2025", sample_input()).unwrap()))
    });
}

/// Benchmark: Loading and decoding the payroll table at several sizes.
fn bench_list_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_payroll");

    for rows in [10usize, 100, 1000].iter() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut ledger = PayrollLedger::new(CsvTableStore::new(dir.path()));
        for i in 0..*rows {
            ledger
                .add_entry(format!("E{}", i % 50), "August 2025", sample_input())
                .unwrap();
        }

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), rows, |b, _| {
            b.iter(|| black_box(ledger.list().unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: Full HTTP round trip for a payroll submission.
fn bench_post_payroll(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = Arc::new(InMemoryTableStore::new());
    let mut directory = EmployeeDirectory::new(Arc::clone(&store));
    directory
        .add(EmployeeRecord::new("E1", "Ann", "HR", "Clerk", "a@x.com"))
        .unwrap();
    let router = create_router(AppState::new(store));
    let body = serde_json::json!({
        "employee_id": "E1",
        "month": "August 2025",
        "basic": "1000",
        "allowance": "100",
        "overtime_hours": "10",
        "overtime_rate": "5",
        "deductions": "50"
    })
    .to_string();

    c.bench_function("post_payroll", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_compute_net,
    bench_add_entry_in_memory,
    bench_add_entry_csv,
    bench_list_scaling,
    bench_post_payroll,
);
criterion_main!(benches);
