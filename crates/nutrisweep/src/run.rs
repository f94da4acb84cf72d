//! Runs the three sweeps of a scenario

use color_eyre::eyre::WrapErr;
use serde::Serialize;

use nutrisweep_core::analysis::{
    SweepDimension, SweepSpec, SweepTable, Transform, demand_curves, nutrient_adequacy_curves,
};
use nutrisweep_core::model::{DemandMode, GoodId, NutrientId};
use nutrisweep_core::nutrition::household_requirement;
use nutrisweep_core::oracle::compensated_mode;

use crate::scenario::Scenario;

/// Results of one scenario run, one table per chart
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub scenario: Option<String>,
    /// Total household members
    pub household_size: f64,
    /// Requirement horizon in days
    pub days: f64,
    /// Mode used for the two price sweeps
    pub mode: DemandMode,
    /// Demand for each good as the swept price varies
    pub demand: SweepTable<GoodId>,
    /// Log nutrient adequacy as the swept price varies
    pub adequacy_by_price: SweepTable<NutrientId>,
    /// Log nutrient adequacy as the budget varies (uncompensated)
    pub adequacy_by_budget: SweepTable<NutrientId>,
}

/// Run the demand, adequacy-by-price and adequacy-by-budget sweeps.
///
/// Compensated demand does not depend on the budget, so the budget sweep
/// always uses uncompensated demand.
pub fn run(scenario: &Scenario) -> color_eyre::Result<Report> {
    let baseline = scenario.baseline()?;
    let oracle = scenario.oracle()?;
    let table = scenario.nutrient_table();
    let household = scenario.household();
    let requirement = household_requirement(
        &scenario.recommended_intake(),
        &household,
        scenario.days,
    )
    .wrap_err("computing household requirement")?;

    let mode = if scenario.sweep.compensated {
        compensated_mode(&oracle, &baseline).wrap_err("resolving reference utility")?
    } else {
        DemandMode::Uncompensated
    };
    tracing::info!(
        good = %scenario.sweep.good,
        mode = mode.name(),
        "Running scenario sweeps"
    );

    let price_dimension = SweepDimension::Price(scenario.sweep.good.clone());
    let price_grid = scenario.sweep.price_grid.to_grid()?;
    let nutrients = scenario.adequacy_nutrients(&requirement);

    let demand_spec = SweepSpec {
        dimension: price_dimension.clone(),
        grid: price_grid.clone(),
        retain: scenario.demand_goods(),
        transform: Transform::Identity,
    };
    let demand =
        demand_curves(&oracle, &baseline, &demand_spec, &mode).wrap_err("demand curve sweep")?;

    let price_spec = SweepSpec {
        dimension: price_dimension,
        grid: price_grid,
        retain: nutrients.clone(),
        transform: Transform::Log,
    };
    let adequacy_by_price =
        nutrient_adequacy_curves(&oracle, &baseline, &price_spec, &mode, &table, &requirement)
            .wrap_err("nutrient adequacy sweep over price")?;

    let budget_spec = SweepSpec {
        dimension: SweepDimension::Budget,
        grid: scenario.sweep.budget_grid.to_grid()?,
        retain: nutrients,
        transform: Transform::Log,
    };
    let adequacy_by_budget = nutrient_adequacy_curves(
        &oracle,
        &baseline,
        &budget_spec,
        &DemandMode::Uncompensated,
        &table,
        &requirement,
    )
    .wrap_err("nutrient adequacy sweep over budget")?;

    demand.check_finite()?;
    adequacy_by_price.check_finite()?;
    adequacy_by_budget.check_finite()?;

    Ok(Report {
        scenario: scenario.name.clone(),
        household_size: household.size(),
        days: scenario.days,
        mode,
        demand,
        adequacy_by_price,
        adequacy_by_budget,
    })
}
