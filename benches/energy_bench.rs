// ABOUTME: Criterion benchmarks for the energy expenditure engine
// ABOUTME: Measures BMR formulas, full energy plans, and measurement history deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the energy expenditure engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::cast_precision_loss)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriplan::config::EngineConfig;
use nutriplan::intelligence::{
    calculate_bmr, calculate_energy_plan, ActivityFactor, ActivityLevel, BmrFormula,
    BodyCompositionDelta, EnergyPlanRequest, GoalSpec, MacroSplit,
};
use nutriplan::models::{Measurement, Sex};

fn generate_history(count: usize) -> Vec<Measurement> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|index| {
            let offset = index as f64;
            Measurement::new(start + Duration::weeks(index as i64), 95.0 - offset * 0.2, 178.0)
                .with_body_fat(32.0 - offset * 0.05)
                .with_circumferences(104.0 - offset * 0.1, 108.0)
        })
        .collect()
}

/// Benchmark each BMR formula on a fixed adult
fn bench_bmr_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmr");

    for formula in BmrFormula::ALL {
        group.bench_with_input(
            BenchmarkId::new("calculate_bmr", formula.key()),
            &formula,
            |b, &formula| {
                b.iter(|| {
                    calculate_bmr(
                        black_box(formula),
                        black_box(78.0),
                        black_box(176.0),
                        black_box(42),
                        Sex::Female,
                        Some(55.0),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the full plan pipeline
fn bench_energy_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy_plan");
    let config = EngineConfig::default();

    let mut request = EnergyPlanRequest::new(82.0, 181.0, 37, Sex::Male);
    request.formula = Some(BmrFormula::HarrisBenedict1984);
    request.activity = ActivityFactor::Preset(ActivityLevel::Moderate);
    request.extra_met_kcal = 250.0;
    request.goal = Some(GoalSpec {
        weight_change_kg: -6.0,
        days: 84,
    });
    request.macros = Some(MacroSplit::new(25.0, 45.0, 30.0));

    group.bench_function("calculate_energy_plan", |b| {
        b.iter(|| calculate_energy_plan(black_box(&request), &config).unwrap());
    });

    group.finish();
}

/// Benchmark deltas across measurement histories
fn bench_body_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("body_composition");

    for count in [12, 52, 260] {
        let history = generate_history(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("delta_across", count),
            &history,
            |b, history| {
                b.iter(|| BodyCompositionDelta::across(black_box(history)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bmr_formulas,
    bench_energy_plan,
    bench_body_composition
);
criterion_main!(benches);
