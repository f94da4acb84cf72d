//! Demand curves from the Cobb-Douglas oracle

use super::rice_and_beans;
use crate::analysis::{SweepDimension, SweepSpec, Transform, demand_curves};
use crate::error::{OracleError, SweepError};
use crate::grid::Grid;
use crate::model::{DemandMode, GoodId};
use crate::oracle::{CobbDouglas, compensated_mode};

fn oracle() -> CobbDouglas {
    CobbDouglas::new([("rice", 0.6), ("beans", 0.4)]).unwrap()
}

fn rice_price_spec() -> SweepSpec<GoodId> {
    SweepSpec {
        dimension: SweepDimension::Price(GoodId::from("rice")),
        grid: Grid::geometric(0.25, 4.0, 9).unwrap(),
        retain: vec![GoodId::from("rice"), GoodId::from("beans")],
        transform: Transform::Identity,
    }
}

#[test]
fn test_marshallian_own_price_curve() {
    let baseline = rice_and_beans();
    let table = demand_curves(
        &oracle(),
        &baseline,
        &rice_price_spec(),
        &DemandMode::Uncompensated,
    )
    .unwrap();

    let rice = table.column(&GoodId::from("rice")).unwrap();
    let beans = table.column(&GoodId::from("beans")).unwrap();

    // x_rice = 0.6 * 100 / p
    for (p, x) in table.points().iter().zip(&rice) {
        assert!((x - 60.0 / p).abs() < 1e-9);
    }
    // Downward sloping
    assert!(rice.windows(2).all(|w| w[1] < w[0]));
    // Cobb-Douglas has no cross-price effect on beans
    assert!(beans.iter().all(|x| (x - 10.0).abs() < 1e-9));
}

#[test]
fn test_hicksian_curve_is_flatter_than_marshallian() {
    let oracle = oracle();
    let baseline = rice_and_beans();
    let spec = rice_price_spec();

    let mode = compensated_mode(&oracle, &baseline).unwrap();
    let hicksian = demand_curves(&oracle, &baseline, &spec, &mode).unwrap();
    let marshallian =
        demand_curves(&oracle, &baseline, &spec, &DemandMode::Uncompensated).unwrap();

    let h = hicksian.column(&GoodId::from("rice")).unwrap();
    let x = marshallian.column(&GoodId::from("rice")).unwrap();

    // Curves cross at the baseline price (multiplier 1.0 is the middle point)
    assert!((h[4] - x[4]).abs() < 1e-9);
    // Above the baseline price, compensation keeps more rice in the basket
    assert!(h[8] > x[8]);
    // Below it, the income effect of cheaper rice is removed
    assert!(h[0] < x[0]);
    // Compensated beans demand rises with the rice price
    let beans = hicksian.column(&GoodId::from("beans")).unwrap();
    assert!(beans.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_oracle_failure_is_returned_unchanged() {
    let oracle = CobbDouglas::new([("rice", 0.5), ("oil", 0.5)]).unwrap();
    let baseline = rice_and_beans();

    let result = demand_curves(
        &oracle,
        &baseline,
        &rice_price_spec(),
        &DemandMode::Uncompensated,
    );

    match result {
        Err(SweepError::Evaluator(OracleError::Lookup(e))) => {
            assert_eq!(e.to_string(), "good \"oil\" not found");
        }
        other => panic!("expected oracle lookup failure, got {other:?}"),
    }
}
