//! Performance benchmarks for the Shift Assignment Engine.
//!
//! Covers:
//! - A small schedule request through the HTTP router
//! - The full pipeline at increasing roster sizes
//! - The matching solver on square and tall matrices
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_engine::api::{AppState, create_router};
use shift_engine::config::{ConfigLoader, SchedulingPolicy};
use shift_engine::models::{PreferenceScore, WeekLayout, Worker};
use shift_engine::scheduling::{
    CostCell, CostMatrix, HeadcountPlan, PreferenceTable, ScheduleInput, generate_schedule, solve,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/standard").expect("Failed to load config");
    AppState::new(config)
}

/// Every slot of a full seven-day, three-shift week.
fn full_week() -> WeekLayout {
    WeekLayout {
        weekday_shifts: 3,
        friday_shifts: Some(3),
        saturday_shifts: Some(3),
    }
}

/// Creates an input with `workers` workers and `headcount` seats per slot.
///
/// Scores cycle through -1..=3 so that roughly a fifth of pairings are
/// unavailable.
fn create_input(workers: usize, headcount: u32) -> ScheduleInput {
    let week = full_week();
    let roster: Vec<Worker> = (0..workers)
        .map(|i| Worker::new(format!("worker_{:03}", i)))
        .collect();

    let mut preferences = PreferenceTable::new();
    for (w, worker) in roster.iter().enumerate() {
        for (s, slot) in week.active_slots().into_iter().enumerate() {
            let score = PreferenceScore::new(((w * 7 + s * 3) % 5) as i8 - 1).unwrap();
            preferences.insert(worker, slot, score).unwrap();
        }
    }

    let mut headcounts = HeadcountPlan::new();
    for slot in week.active_slots() {
        headcounts.insert(slot, headcount).unwrap();
    }

    ScheduleInput {
        roster,
        week,
        headcounts,
        preferences,
    }
}

/// Creates a JSON request body equivalent to [`create_input`].
fn create_request_body(workers: usize, headcount: u32) -> String {
    let input = create_input(workers, headcount);
    let preferences: Vec<serde_json::Value> = input
        .preferences
        .iter()
        .map(|(worker, slot, score)| {
            serde_json::json!({
                "worker": worker,
                "day": slot.day,
                "shift": slot.shift,
                "score": score.value(),
            })
        })
        .collect();
    let headcounts: Vec<serde_json::Value> = input
        .headcounts
        .iter()
        .map(|(slot, required)| {
            serde_json::json!({ "day": slot.day, "shift": slot.shift, "required": required })
        })
        .collect();

    serde_json::json!({
        "workers": input.roster,
        "week": input.week,
        "headcounts": headcounts,
        "preferences": preferences,
    })
    .to_string()
}

/// Benchmark: A ten-worker week through the HTTP router.
fn bench_http_small_week(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_request_body(10, 1);

    c.bench_function("http_small_week", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/schedule")
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

/// Benchmark: The full pipeline at increasing roster sizes.
fn bench_roster_scaling(c: &mut Criterion) {
    let policy = SchedulingPolicy::default();
    let mut group = c.benchmark_group("roster_scaling");
    group.sample_size(10);

    for workers in [10usize, 25, 50, 100].iter() {
        let input = create_input(*workers, 2);
        group.throughput(Throughput::Elements(*workers as u64));
        group.bench_with_input(BenchmarkId::new("workers", workers), &input, |b, input| {
            b.iter(|| black_box(generate_schedule(input, &policy).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: The solver alone on square and tall matrices.
fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");

    for (rows, cols) in [(50usize, 50usize), (100, 100), (200, 50), (400, 100)].iter() {
        let matrix = CostMatrix::from_fn(*rows, *cols, |r, c| {
            if (r + c) % 4 == 0 {
                CostCell::Forbidden
            } else {
                CostCell::Allowed(((r * 31 + c * 17) % 5) as u32)
            }
        });
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::new("matrix", format!("{}x{}", rows, cols)),
            &matrix,
            |b, matrix| b.iter(|| black_box(solve(matrix))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_http_small_week, bench_roster_scaling, bench_solver);
criterion_main!(benches);
