//! Tests for the core sweep contract
//!
//! These tests verify:
//! - One row per grid point, in grid order
//! - Evaluation points are exact products of multiplier and baseline value
//! - The caller's baseline is never modified
//! - Repeated labels in evaluator output resolve to the first occurrence
//! - Missing labels and evaluator failures abort without a partial table

use super::{Recorder, Refused, rice_and_beans};
use crate::analysis::{SweepDimension, SweepSpec, Transform, sweep};
use crate::error::{LookupError, SweepError};
use crate::grid::Grid;
use crate::model::{GoodId, Quantities};

fn price_spec(good: &str, multipliers: Vec<f64>, retain: &[&str]) -> SweepSpec<GoodId> {
    SweepSpec {
        dimension: SweepDimension::Price(GoodId::from(good)),
        grid: Grid::new(multipliers).unwrap(),
        retain: retain.iter().map(|g| GoodId::from(*g)).collect(),
        transform: Transform::Identity,
    }
}

/// grid [0.5, 1, 2] on rice at 10 evaluates at [5, 10, 20]
#[test]
fn test_price_sweep_evaluation_points() {
    let baseline = rice_and_beans();
    let snapshot = baseline.clone();
    let recorder = Recorder::new([("rice", 1.0)].into_iter().collect());
    let spec = price_spec("rice", vec![0.5, 1.0, 2.0], &["rice"]);

    let table = sweep(&baseline, &spec, |b| recorder.evaluate(b)).unwrap();

    assert_eq!(table.points(), &[5.0, 10.0, 20.0]);
    assert_eq!(table.len(), 3);
    assert_eq!(baseline, snapshot, "Baseline must be unchanged after sweep");

    // The evaluator saw the overridden price and nothing else changed
    let seen = recorder.seen.borrow();
    let rice = GoodId::from("rice");
    let beans = GoodId::from("beans");
    let seen_prices: Vec<f64> = seen.iter().map(|b| b.prices().get(&rice).unwrap()).collect();
    assert_eq!(seen_prices, vec![5.0, 10.0, 20.0]);
    assert!(seen.iter().all(|b| b.prices().get(&beans) == Some(4.0)));
    assert!(seen.iter().all(|b| b.budget() == 100.0));
}

#[test]
fn test_budget_sweep_evaluation_points() {
    let baseline = rice_and_beans();
    let recorder = Recorder::new([("beans", 2.0)].into_iter().collect());
    let spec = SweepSpec {
        dimension: SweepDimension::Budget,
        grid: Grid::new(vec![0.25, 3.0]).unwrap(),
        retain: vec![GoodId::from("beans")],
        transform: Transform::Identity,
    };

    let table = sweep(&baseline, &spec, |b| recorder.evaluate(b)).unwrap();

    assert_eq!(table.points(), &[25.0, 300.0]);
    let budgets: Vec<f64> = recorder.seen.borrow().iter().map(|b| b.budget()).collect();
    assert_eq!(budgets, vec![25.0, 300.0]);
    assert_eq!(baseline.budget(), 100.0);
}

/// Rows follow grid order even when the grid is not monotonic
#[test]
fn test_rows_follow_grid_order() {
    let baseline = rice_and_beans();
    let spec = price_spec("rice", vec![2.0, 0.5, 1.0], &["rice", "beans"]);

    let table = sweep(&baseline, &spec, |b| -> Result<_, Refused> {
        let p = b.prices().get(&GoodId::from("rice")).unwrap();
        Ok([("beans", 1.0), ("rice", 100.0 / p)].into_iter().collect())
    })
    .unwrap();

    assert_eq!(table.points(), &[20.0, 5.0, 10.0]);
    assert_eq!(table.columns(), &[GoodId::from("rice"), GoodId::from("beans")]);
    assert_eq!(table.rows(), &[vec![5.0, 1.0], vec![20.0, 1.0], vec![10.0, 1.0]]);
}

/// Oracle returns rice twice; the first value is kept every time
#[test]
fn test_duplicate_output_keeps_first_occurrence() {
    let baseline = rice_and_beans();
    let output: Quantities<GoodId> = [("rice", 2.0), ("rice", 3.0)].into_iter().collect();
    let spec = price_spec("rice", vec![1.0], &["rice"]);

    for _ in 0..3 {
        let table = sweep(&baseline, &spec, |_| Ok::<_, Refused>(output.clone())).unwrap();
        assert_eq!(table.column(&GoodId::from("rice")), Some(vec![2.0]));
    }
}

/// Requested "beans" is absent from the output: lookup error, no table
#[test]
fn test_missing_label_is_lookup_error() {
    let baseline = rice_and_beans();
    let recorder = Recorder::new([("rice", 2.0)].into_iter().collect());
    let spec = price_spec("rice", vec![0.5, 1.0, 2.0], &["rice", "beans"]);

    let result = sweep(&baseline, &spec, |b| recorder.evaluate(b));

    assert_eq!(
        result,
        Err(SweepError::Lookup(LookupError::GoodNotFound(
            "beans".to_string()
        )))
    );
    // Failed on the first point, so nothing further was evaluated
    assert_eq!(recorder.seen.borrow().len(), 1);
}

#[test]
fn test_unknown_swept_good() {
    let baseline = rice_and_beans();
    let spec = price_spec("maize", vec![1.0], &["rice"]);

    let result = sweep(&baseline, &spec, |_| -> Result<Quantities<GoodId>, Refused> {
        panic!("evaluator must not run when the swept good is unknown")
    });

    assert_eq!(
        result,
        Err(SweepError::Lookup(LookupError::GoodNotFound(
            "maize".to_string()
        )))
    );
}

/// Evaluator failures come back unchanged and stop the sweep
#[test]
fn test_evaluator_failure_propagates() {
    let baseline = rice_and_beans();
    let spec = price_spec("rice", vec![0.5, 1.0, 2.0], &["rice"]);
    let mut calls = 0;

    let result = sweep(&baseline, &spec, |b| {
        calls += 1;
        let p = b.prices().get(&GoodId::from("rice")).unwrap();
        if p > 6.0 {
            Err(Refused(p))
        } else {
            Ok([("rice", 1.0)].into_iter().collect())
        }
    });

    let err = result.unwrap_err();
    assert_eq!(err.evaluator(), Some(&Refused(10.0)));
    assert_eq!(calls, 2);
    assert_eq!(err.to_string(), "evaluation failed: refused to evaluate at 10");
}

#[cfg(feature = "parallel")]
#[test]
fn test_par_sweep_matches_sweep() {
    use crate::analysis::par_sweep;

    let baseline = rice_and_beans();
    let grid = Grid::geometric(0.1, 10.0, 64).unwrap();
    let spec = SweepSpec {
        dimension: SweepDimension::Price(GoodId::from("rice")),
        grid,
        retain: vec![GoodId::from("rice"), GoodId::from("beans")],
        transform: Transform::Log,
    };
    let evaluate = |b: &crate::model::Baseline| -> Result<Quantities<GoodId>, Refused> {
        let p = b.prices().get(&GoodId::from("rice")).unwrap();
        Ok([("rice", 50.0 / p), ("beans", 12.5)].into_iter().collect())
    };

    let sequential = sweep(&baseline, &spec, evaluate).unwrap();
    let parallel = par_sweep(&baseline, &spec, evaluate).unwrap();

    assert_eq!(sequential, parallel);
}
