//! Criterion benchmarks for nutrisweep_core sweeps
//!
//! Run with: cargo bench -p nutrisweep_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nutrisweep_core::analysis::{
    SweepDimension, SweepSpec, Transform, demand_curves, nutrient_adequacy_curves,
};
use nutrisweep_core::grid::Grid;
use nutrisweep_core::model::{Baseline, DemandMode, GoodId, NutrientId, PriceVector, Quantities};
use nutrisweep_core::nutrition::NutrientTable;
use nutrisweep_core::oracle::CobbDouglas;

const GOODS: usize = 40;

fn create_baseline() -> Baseline {
    let prices: PriceVector = (0..GOODS)
        .map(|i| (format!("good_{i}"), 1.0 + i as f64))
        .collect();
    Baseline::new(prices, 1_000.0).unwrap()
}

fn create_oracle() -> CobbDouglas {
    CobbDouglas::new((0..GOODS).map(|i| (format!("good_{i}"), 1.0 + (i % 7) as f64))).unwrap()
}

fn create_table() -> NutrientTable {
    NutrientTable::from_entries((0..GOODS).flat_map(|i| {
        ["energy", "protein", "iron", "zinc"]
            .into_iter()
            .enumerate()
            .map(move |(k, n)| {
                (
                    GoodId::new(format!("good_{i}")),
                    NutrientId::from(n),
                    (i + k + 1) as f64,
                )
            })
    }))
}

fn bench_demand_curves(c: &mut Criterion) {
    let baseline = create_baseline();
    let oracle = create_oracle();
    let mut group = c.benchmark_group("demand_curves");

    for steps in [10, 100, 1_000] {
        let spec = SweepSpec {
            dimension: SweepDimension::Price(GoodId::from("good_0")),
            grid: Grid::geometric(0.1, 10.0, steps).unwrap(),
            retain: (0..GOODS).map(|i| GoodId::new(format!("good_{i}"))).collect(),
            transform: Transform::Identity,
        };
        group.bench_with_input(BenchmarkId::from_parameter(steps), &spec, |b, spec| {
            b.iter(|| {
                demand_curves(
                    black_box(&oracle),
                    black_box(&baseline),
                    spec,
                    &DemandMode::Uncompensated,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_adequacy_curves(c: &mut Criterion) {
    let baseline = create_baseline();
    let oracle = create_oracle();
    let table = create_table();
    let requirement: Quantities<NutrientId> = [
        ("energy", 50_000.0),
        ("protein", 1_000.0),
        ("iron", 100.0),
        ("zinc", 80.0),
    ]
    .into_iter()
    .collect();

    let spec = SweepSpec {
        dimension: SweepDimension::Budget,
        grid: Grid::geometric(0.25, 4.0, 100).unwrap(),
        retain: requirement.labels().cloned().collect(),
        transform: Transform::Log,
    };

    c.bench_function("adequacy_curves_budget_100", |b| {
        b.iter(|| {
            nutrient_adequacy_curves(
                black_box(&oracle),
                black_box(&baseline),
                &spec,
                &DemandMode::Uncompensated,
                &table,
                &requirement,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_demand_curves, bench_adequacy_curves);
criterion_main!(benches);
