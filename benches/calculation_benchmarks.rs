//! Performance benchmarks for the payroll engine.
//!
//! Covers the calculator on its own and the HTTP endpoints end to end:
//! - A typical business day (40 records, 8 employees)
//! - Scaling with the number of records per day
//! - A month-long period report
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;

use detailing_payroll::api::{AppState, create_router};
use detailing_payroll::calculation::SalaryCalculator;
use detailing_payroll::config::ConfigLoader;
use detailing_payroll::models::{
    Employee, EmployeeRole, PaymentMethod, PaymentMethodType, RateSettings, RoleAssignment,
    ServiceRecord, ServiceType,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const WASHERS: [&str; 6] = ["w1", "w2", "w3", "w4", "w5", "w6"];

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/detailing").expect("Failed to load config");
    AppState::new(config)
}

fn create_settings() -> RateSettings {
    RateSettings {
        minimum_payment_washer: Decimal::new(1000, 0),
        minimum_payment_admin: Decimal::new(1500, 0),
        percentage_washer: Decimal::new(40, 0),
        percentage_washer_dryclean: Decimal::new(50, 0),
        admin_cash_percentage: Decimal::new(5, 0),
        admin_car_wash_percentage: Decimal::new(10, 0),
        admin_dryclean_percentage: Decimal::new(10, 0),
    }
}

fn create_employees() -> Vec<Employee> {
    WASHERS
        .iter()
        .chain(["a1", "a2"].iter())
        .map(|id| Employee {
            id: id.to_string(),
            name: id.to_uppercase(),
            role: None,
        })
        .collect()
}

/// Creates a day's records, rotating washers and pairing every third job.
fn create_records(date: NaiveDate, count: usize) -> Vec<ServiceRecord> {
    (0..count)
        .map(|i| {
            let mut employee_ids = vec![WASHERS[i % WASHERS.len()].to_string()];
            if i % 3 == 0 {
                employee_ids.push(WASHERS[(i + 1) % WASHERS.len()].to_string());
            }
            ServiceRecord {
                id: format!("r{}_{:04}", date, i),
                date,
                time: None,
                price: Decimal::new(1500 + (i as i64 % 7) * 500, 0),
                service_type: Some(if i % 5 == 0 {
                    ServiceType::Dryclean
                } else {
                    ServiceType::Wash
                }),
                payment_method: PaymentMethod::of(if i % 2 == 0 {
                    PaymentMethodType::Cash
                } else {
                    PaymentMethodType::Card
                }),
                employee_ids,
            }
        })
        .collect()
}

fn create_roles() -> RoleAssignment {
    [("a1", EmployeeRole::Admin), ("a2", EmployeeRole::Admin)]
        .into_iter()
        .collect()
}

fn salary_request_body(record_count: usize) -> String {
    let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    serde_json::json!({
        "date": date,
        "records": create_records(date, record_count),
        "roles": create_roles(),
        "employees": create_employees()
    })
    .to_string()
}

fn period_request_body() -> String {
    let records: Vec<ServiceRecord> = (1..=31)
        .flat_map(|day| create_records(NaiveDate::from_ymd_opt(2025, 3, day).unwrap(), 40))
        .collect();
    let daily_roles: serde_json::Map<String, serde_json::Value> = (1..=31)
        .map(|day| {
            (
                format!("2025-03-{:02}", day),
                serde_json::json!({ "a1": "admin" }),
            )
        })
        .collect();

    serde_json::json!({
        "period": { "start_date": "2025-03-01", "end_date": "2025-03-31" },
        "records": records,
        "daily_roles": daily_roles,
        "employees": create_employees(),
        "today": "2025-03-31"
    })
    .to_string()
}

/// Benchmark: the calculator alone over a typical day.
fn bench_calculator_typical_day(c: &mut Criterion) {
    let settings = create_settings();
    let records = create_records(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(), 40);
    let roles = create_roles();
    let employees = create_employees();

    c.bench_function("calculator_typical_day", |b| {
        b.iter(|| {
            let calculator = SalaryCalculator::new(&settings, &records, &roles, &employees);
            black_box(calculator.calculate_salaries())
        })
    });
}

/// Benchmark: POST /salaries for a typical day.
fn bench_salaries_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = salary_request_body(40);

    c.bench_function("salaries_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salaries")
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

/// Benchmark: POST /reports/period over a month.
fn bench_period_report(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = period_request_body();

    let mut group = c.benchmark_group("period_report");
    group.throughput(Throughput::Elements(31));
    group.sample_size(20);

    group.bench_function("month", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/reports/period")
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

/// Benchmark: calculator scaling with records per day.
fn bench_scaling(c: &mut Criterion) {
    let settings = create_settings();
    let roles = create_roles();
    let employees = create_employees();
    let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

    let mut group = c.benchmark_group("scaling");

    for record_count in [10, 50, 100, 500, 1000].iter() {
        let records = create_records(date, *record_count);

        group.throughput(Throughput::Elements(*record_count as u64));
        group.bench_with_input(
            BenchmarkId::new("records", record_count),
            record_count,
            |b, _| {
                b.iter(|| {
                    let calculator =
                        SalaryCalculator::new(&settings, &records, &roles, &employees);
                    black_box(calculator.calculate_report(date))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calculator_typical_day,
    bench_salaries_endpoint,
    bench_period_report,
    bench_scaling,
);
criterion_main!(benches);
