//! Household nutrition arithmetic
//!
//! Turns a demand bundle into nutrients through a conversion table, builds a
//! household requirement from per-person recommended intakes, and compares the
//! two as adequacy ratios.
//!
//! Every table here resolves repeated entries to their first occurrence, the
//! same rule `Quantities` applies to oracle output.

use serde::Serialize;

use crate::error::{LookupError, NutritionError};
use crate::model::{CategoryId, GoodId, Label, NutrientId, Quantities};
use crate::{Map, Set};

/// Nutrient content of each good, per kilogram
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NutrientTable {
    nutrients: Set<NutrientId>,
    content: Map<GoodId, Map<NutrientId, f64>>,
}

impl NutrientTable {
    /// Build from `(good, nutrient, amount per kg)` entries.
    ///
    /// Nutrients keep the order in which they first appear.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (GoodId, NutrientId, f64)>,
    {
        let mut table = Self::default();
        for (good, nutrient, amount) in entries {
            table.nutrients.insert(nutrient.clone());
            table
                .content
                .entry(good)
                .or_default()
                .entry(nutrient)
                .or_insert(amount);
        }
        table
    }

    pub fn nutrients(&self) -> impl Iterator<Item = &NutrientId> {
        self.nutrients.iter()
    }

    pub fn goods(&self) -> impl Iterator<Item = &GoodId> {
        self.content.keys()
    }

    /// Nutrients supplied by a demand bundle.
    ///
    /// Goods with no row in the table contribute nothing.
    #[must_use]
    pub fn convert(&self, demand: &Quantities<GoodId>) -> Quantities<NutrientId> {
        let mut totals: Map<&NutrientId, f64> =
            self.nutrients.iter().map(|n| (n, 0.0)).collect();

        for (good, quantity) in demand.dedup_first().iter() {
            let Some(row) = self.content.get(good) else {
                tracing::debug!(%good, "Good has no nutrient conversion row, skipping");
                continue;
            };
            for (nutrient, amount) in row {
                if let Some(total) = totals.get_mut(nutrient) {
                    *total += quantity * amount;
                }
            }
        }

        totals
            .into_iter()
            .map(|(n, v)| (n.clone(), v))
            .collect()
    }
}

/// Recommended daily intake per person, by demographic category
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RecommendedIntake {
    nutrients: Set<NutrientId>,
    intake: Map<CategoryId, Map<NutrientId, f64>>,
}

impl RecommendedIntake {
    /// Build from `(category, nutrient, daily amount)` entries
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (CategoryId, NutrientId, f64)>,
    {
        let mut table = Self::default();
        for (category, nutrient, amount) in entries {
            table.nutrients.insert(nutrient.clone());
            table
                .intake
                .entry(category)
                .or_default()
                .entry(nutrient)
                .or_insert(amount);
        }
        table
    }

    pub fn nutrients(&self) -> impl Iterator<Item = &NutrientId> {
        self.nutrients.iter()
    }

    /// Daily intake of `nutrient` for one person of `category`
    pub fn daily(&self, category: &CategoryId, nutrient: &NutrientId) -> Result<f64, LookupError> {
        let row = self
            .intake
            .get(category)
            .ok_or_else(|| category.not_found())?;
        row.get(nutrient)
            .copied()
            .ok_or_else(|| LookupError::IntakeNotFound {
                category: category.to_string(),
                nutrient: nutrient.to_string(),
            })
    }
}

/// Head count of household members per demographic category
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HouseholdComposition {
    members: Map<CategoryId, f64>,
}

impl HouseholdComposition {
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, f64)> {
        self.members.iter().map(|(c, n)| (c, *n))
    }

    /// Total number of members
    #[must_use]
    pub fn size(&self) -> f64 {
        self.members.values().sum()
    }
}

impl<C: Into<CategoryId>> FromIterator<(C, f64)> for HouseholdComposition {
    fn from_iter<I: IntoIterator<Item = (C, f64)>>(iter: I) -> Self {
        let mut members = Map::default();
        for (category, count) in iter {
            members.entry(category.into()).or_insert(count);
        }
        Self { members }
    }
}

/// Household requirement over `days`: `days * Σ_c count_c * intake[c][n]`
/// for every nutrient of the intake table.
pub fn household_requirement(
    intake: &RecommendedIntake,
    household: &HouseholdComposition,
    days: f64,
) -> Result<Quantities<NutrientId>, NutritionError> {
    if !(days.is_finite() && days > 0.0) {
        return Err(NutritionError::InvalidHorizon(days));
    }

    let mut requirement = Quantities::new();
    for nutrient in intake.nutrients() {
        let mut daily = 0.0;
        for (category, count) in household.iter() {
            daily += count * intake.daily(category, nutrient)?;
        }
        requirement.push(nutrient.clone(), daily * days);
    }
    Ok(requirement)
}

/// Ratio of obtained to required amount for every required nutrient
pub fn adequacy(
    obtained: &Quantities<NutrientId>,
    requirement: &Quantities<NutrientId>,
) -> Result<Quantities<NutrientId>, NutritionError> {
    let mut ratios = Quantities::new();
    for (nutrient, required) in requirement.dedup_first().iter() {
        if !(required.is_finite() && required > 0.0) {
            return Err(NutritionError::NonPositiveRequirement {
                nutrient: nutrient.to_string(),
                value: required,
            });
        }
        ratios.push(nutrient.clone(), obtained.require(nutrient)? / required);
    }
    Ok(ratios)
}
