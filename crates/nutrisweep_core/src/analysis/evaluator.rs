//! Sweep evaluator - evaluates a baseline at every grid point and tabulates.
//!
//! Each grid point gets its own copy of the baseline with the swept dimension
//! overridden; the caller's baseline is only read. Evaluator failures are
//! returned unchanged inside `SweepError::Evaluator`, and no partial table is
//! ever returned.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{AdequacyError, SweepError};
use crate::model::{Baseline, DemandMode, GoodId, Label, NutrientId, Quantities};
use crate::nutrition::{NutrientTable, adequacy};
use crate::oracle::DemandOracle;

use super::{SweepSpec, SweepTable, Transform};

/// Run a sweep, evaluating grid points sequentially in grid order.
///
/// `evaluate` receives the modified baseline for each grid point and returns
/// labelled quantities; `spec.retain` selects and orders the table columns.
pub fn sweep<K, E, F>(
    baseline: &Baseline,
    spec: &SweepSpec<K>,
    mut evaluate: F,
) -> Result<SweepTable<K>, SweepError<E>>
where
    K: Label,
    F: FnMut(&Baseline) -> Result<Quantities<K>, E>,
{
    let base_value = baseline.value(&spec.dimension)?;
    tracing::debug!(
        dimension = %spec.dimension,
        base_value,
        points = spec.total_points(),
        "Starting sweep"
    );

    let mut rows = Vec::with_capacity(spec.total_points());
    for point in spec.grid.points(base_value) {
        rows.push(evaluate_point(baseline, spec, point, &mut evaluate)?);
    }

    tracing::debug!(rows = rows.len(), "Sweep complete");
    Ok(SweepTable::new(
        spec.dimension.clone(),
        spec.transform,
        spec.retain.clone(),
        rows,
    ))
}

/// Run a sweep with grid points evaluated in parallel.
///
/// Produces the same table as `sweep` for a deterministic evaluator. When
/// several points fail, which error is returned is unspecified.
#[cfg(feature = "parallel")]
pub fn par_sweep<K, E, F>(
    baseline: &Baseline,
    spec: &SweepSpec<K>,
    evaluate: F,
) -> Result<SweepTable<K>, SweepError<E>>
where
    K: Label + Send + Sync,
    E: Send,
    F: Fn(&Baseline) -> Result<Quantities<K>, E> + Sync,
{
    let base_value = baseline.value(&spec.dimension)?;
    tracing::debug!(
        dimension = %spec.dimension,
        base_value,
        points = spec.total_points(),
        "Starting parallel sweep"
    );

    let rows = spec
        .grid
        .points(base_value)
        .into_par_iter()
        .map(|point| evaluate_point(baseline, spec, point, &mut &evaluate))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = rows.len(), "Parallel sweep complete");
    Ok(SweepTable::new(
        spec.dimension.clone(),
        spec.transform,
        spec.retain.clone(),
        rows,
    ))
}

/// Demand for `spec.retain` goods as the swept dimension varies
pub fn demand_curves<O: DemandOracle>(
    oracle: &O,
    baseline: &Baseline,
    spec: &SweepSpec<GoodId>,
    mode: &DemandMode,
) -> Result<SweepTable<GoodId>, SweepError<O::Error>> {
    tracing::debug!(mode = mode.name(), "Tabulating demand curves");
    sweep(baseline, spec, |b| oracle.demand(b.budget(), b.prices(), mode))
}

/// Nutrient adequacy ratios (nutrients obtained from demand over the household
/// requirement) as the swept dimension varies.
///
/// Only the nutrients in `spec.retain` are computed, so a required nutrient
/// the conversion table lacks fails the sweep only when it is retained.
pub fn nutrient_adequacy_curves<O: DemandOracle>(
    oracle: &O,
    baseline: &Baseline,
    spec: &SweepSpec<NutrientId>,
    mode: &DemandMode,
    table: &NutrientTable,
    requirement: &Quantities<NutrientId>,
) -> Result<SweepTable<NutrientId>, SweepError<AdequacyError<O::Error>>> {
    tracing::debug!(mode = mode.name(), "Tabulating nutrient adequacy");
    // Nutrients outside `spec.retain` are never looked up
    let requirement = requirement.restrict(&spec.retain);
    sweep(baseline, spec, |b| -> Result<_, AdequacyError<O::Error>> {
        let demand = oracle
            .demand(b.budget(), b.prices(), mode)
            .map_err(AdequacyError::Oracle)?;
        Ok(adequacy(&table.convert(&demand), &requirement)?)
    })
}

/// Evaluate a single grid point and extract its table row
fn evaluate_point<K, E, F>(
    baseline: &Baseline,
    spec: &SweepSpec<K>,
    point: f64,
    evaluate: &mut F,
) -> Result<(f64, Vec<f64>), SweepError<E>>
where
    K: Label,
    F: FnMut(&Baseline) -> Result<Quantities<K>, E>,
{
    let modified = baseline.with_value(&spec.dimension, point)?;
    let result = evaluate(&modified).map_err(SweepError::Evaluator)?;
    tracing::trace!(point, entries = result.len(), "Evaluated sweep point");
    if result.has_duplicates() {
        tracing::debug!(point, "Evaluator repeated a label, keeping its first value");
    }

    let values = result.select(&spec.retain)?;
    let row = spec
        .retain
        .iter()
        .zip(values)
        .map(|(label, value)| transform_value(spec.transform, point, label, value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((point, row))
}

fn transform_value<K: Label, E>(
    transform: Transform,
    point: f64,
    label: &K,
    value: f64,
) -> Result<f64, SweepError<E>> {
    if !value.is_finite() {
        return Err(SweepError::NonFinite {
            point,
            label: label.to_string(),
            value,
        });
    }
    transform
        .apply(value)
        .ok_or_else(|| SweepError::NonPositiveLog {
            point,
            label: label.to_string(),
            value,
        })
}
