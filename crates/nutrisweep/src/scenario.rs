//! Scenario files
//!
//! A scenario is a YAML document describing one household: the goods it
//! buys (price, unit, budget share), its budget, the nutrient conversion and
//! recommended intake tables, its demographic composition, and which sweeps
//! to run.
//!
//! ```yaml
//! name: Example household
//! budget: 40.0
//! days: 7
//! goods:
//!   - { name: rice, price: 2.0, share: 0.6 }
//!   - { name: beans, price: 3.0, share: 0.4 }
//! nutrient_table:
//!   rice: { energy: 3600, protein: 70 }
//!   beans: { energy: 3400, protein: 220 }
//! recommended_intake:
//!   adult: { energy: 2400, protein: 50 }
//! household:
//!   adult: 2
//! sweep:
//!   good: rice
//! ```

use std::path::Path;

use color_eyre::eyre::{WrapErr, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use nutrisweep_core::error::{BaselineError, GridError, OracleError};
use nutrisweep_core::model::{
    Baseline, CANONICAL_UNIT, CategoryId, GoodId, NutrientId, PriceVector, Quantities, check_units,
};
use nutrisweep_core::nutrition::{HouseholdComposition, NutrientTable, RecommendedIntake};
use nutrisweep_core::{CobbDouglas, Grid};

/// One good of the household basket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodSpec {
    pub name: GoodId,
    #[serde(default = "default_unit")]
    pub unit: String,
    pub price: f64,
    /// Budget share weight; normalised across all goods
    pub share: f64,
}

/// Geometric multiplier grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    pub start: f64,
    pub stop: f64,
    pub steps: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            start: 0.25,
            stop: 4.0,
            steps: 25,
        }
    }
}

impl GridSettings {
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        Grid::geometric(self.start, self.stop, self.steps)
    }
}

/// Which sweeps to run and what to tabulate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSettings {
    /// Good whose price is swept
    pub good: GoodId,
    /// Use compensated (Hicksian) demand for the price sweeps
    #[serde(default)]
    pub compensated: bool,
    #[serde(default)]
    pub price_grid: GridSettings,
    #[serde(default)]
    pub budget_grid: GridSettings,
    /// Goods shown in the demand curves; empty means all goods
    #[serde(default)]
    pub goods: Vec<GoodId>,
    /// Nutrients shown in the adequacy curves; empty means every required nutrient
    #[serde(default)]
    pub nutrients: Vec<NutrientId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub budget: f64,
    /// Requirement horizon in days
    #[serde(default = "default_days")]
    pub days: f64,
    pub goods: Vec<GoodSpec>,
    /// Nutrient content per kilogram of each good
    pub nutrient_table: IndexMap<GoodId, IndexMap<NutrientId, f64>>,
    /// Daily recommended intake per person of each category
    pub recommended_intake: IndexMap<CategoryId, IndexMap<NutrientId, f64>>,
    /// Household members per category
    pub household: IndexMap<CategoryId, f64>,
    pub sweep: SweepSettings,
}

fn default_unit() -> String {
    CANONICAL_UNIT.to_string()
}

fn default_days() -> f64 {
    7.0
}

impl Scenario {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Read, parse and validate a scenario file
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading scenario {}", path.display()))?;
        let scenario = Self::from_yaml(&content)
            .wrap_err_with(|| format!("parsing scenario {}", path.display()))?;
        scenario
            .validate()
            .wrap_err_with(|| format!("invalid scenario {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            goods = scenario.goods.len(),
            "Loaded scenario"
        );
        Ok(scenario)
    }

    /// Check the scenario before any sweep runs
    pub fn validate(&self) -> color_eyre::Result<()> {
        check_units(
            self.goods.iter().map(|g| (&g.name, g.unit.as_str())),
            CANONICAL_UNIT,
        )?;

        self.baseline()?;
        self.oracle()?;
        self.sweep.price_grid.to_grid().wrap_err("price_grid")?;
        self.sweep.budget_grid.to_grid().wrap_err("budget_grid")?;

        if !self.goods.iter().any(|g| g.name == self.sweep.good) {
            bail!("swept good {:?} is not one of the scenario goods", self.sweep.good.as_str());
        }
        for good in &self.sweep.goods {
            if !self.goods.iter().any(|g| &g.name == good) {
                bail!("demand curve good {:?} is not one of the scenario goods", good.as_str());
            }
        }
        let table = self.nutrient_table();
        for good in table.goods() {
            if !self.goods.iter().any(|g| &g.name == good) {
                tracing::warn!(%good, "Nutrient table lists a good the household does not buy");
            }
        }
        for good in &self.goods {
            if !table.goods().any(|g| g == &good.name) {
                tracing::warn!(good = %good.name, "Good has no nutrient row and supplies no nutrients");
            }
        }
        Ok(())
    }

    pub fn baseline(&self) -> Result<Baseline, BaselineError> {
        let prices: PriceVector = self
            .goods
            .iter()
            .map(|g| (g.name.clone(), g.price))
            .collect();
        Baseline::new(prices, self.budget)
    }

    /// Reference Cobb-Douglas demand system built from the budget shares
    pub fn oracle(&self) -> Result<CobbDouglas, OracleError> {
        CobbDouglas::new(self.goods.iter().map(|g| (g.name.clone(), g.share)))
    }

    pub fn nutrient_table(&self) -> NutrientTable {
        NutrientTable::from_entries(self.nutrient_table.iter().flat_map(|(good, row)| {
            row.iter()
                .map(move |(nutrient, amount)| (good.clone(), nutrient.clone(), *amount))
        }))
    }

    pub fn recommended_intake(&self) -> RecommendedIntake {
        RecommendedIntake::from_entries(self.recommended_intake.iter().flat_map(
            |(category, row)| {
                row.iter().map(move |(nutrient, amount)| {
                    (category.clone(), nutrient.clone(), *amount)
                })
            },
        ))
    }

    pub fn household(&self) -> HouseholdComposition {
        self.household
            .iter()
            .map(|(category, count)| (category.clone(), *count))
            .collect()
    }

    /// Goods shown in the demand curves
    pub fn demand_goods(&self) -> Vec<GoodId> {
        if self.sweep.goods.is_empty() {
            self.goods.iter().map(|g| g.name.clone()).collect()
        } else {
            self.sweep.goods.clone()
        }
    }

    /// Nutrients shown in the adequacy curves
    pub fn adequacy_nutrients(&self, requirement: &Quantities<NutrientId>) -> Vec<NutrientId> {
        if self.sweep.nutrients.is_empty() {
            requirement.labels().cloned().collect()
        } else {
            self.sweep.nutrients.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
budget: 40.0
goods:
  - { name: rice, price: 2.0, share: 0.6 }
  - { name: beans, price: 3.0, share: 0.4 }
nutrient_table:
  rice: { energy: 3600, protein: 70 }
  beans: { energy: 3400, protein: 220 }
recommended_intake:
  adult: { energy: 2400, protein: 50 }
household:
  adult: 2
sweep:
  good: rice
"#;

    #[test]
    fn test_defaults() {
        let scenario = Scenario::from_yaml(MINIMAL).unwrap();

        assert_eq!(scenario.name, None);
        assert_eq!(scenario.days, 7.0);
        assert!(scenario.goods.iter().all(|g| g.unit == "kg"));
        assert_eq!(scenario.sweep.price_grid, GridSettings::default());
        assert!(!scenario.sweep.compensated);
        assert_eq!(
            scenario.demand_goods(),
            vec![GoodId::from("rice"), GoodId::from("beans")]
        );
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_tables_from_yaml() {
        let scenario = Scenario::from_yaml(MINIMAL).unwrap();

        let table = scenario.nutrient_table();
        let demand: Quantities<GoodId> = [("beans", 2.0)].into_iter().collect();
        assert_eq!(
            table.convert(&demand).get(&NutrientId::from("protein")),
            Some(440.0)
        );

        let intake = scenario.recommended_intake();
        assert_eq!(
            intake.daily(&CategoryId::from("adult"), &NutrientId::from("energy")),
            Ok(2400.0)
        );
        assert_eq!(scenario.household().size(), 2.0);
    }

    #[test]
    fn test_rejects_non_kg_goods() {
        let yaml = MINIMAL.replace(
            "{ name: beans, price: 3.0, share: 0.4 }",
            "{ name: beans, unit: g, price: 3.0, share: 0.4 }",
        );
        let scenario = Scenario::from_yaml(&yaml).unwrap();

        let err = scenario.validate().unwrap_err();
        assert!(format!("{err}").contains("beans in \"g\""), "{err}");
    }

    #[test]
    fn test_rejects_unknown_swept_good() {
        let yaml = MINIMAL.replace("good: rice", "good: maize");
        let scenario = Scenario::from_yaml(&yaml).unwrap();

        let err = scenario.validate().unwrap_err();
        assert!(format!("{err}").contains("maize"));
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let yaml = MINIMAL.replace("price: 2.0", "price: 0.0");
        let scenario = Scenario::from_yaml(&yaml).unwrap();
        assert!(scenario.validate().is_err());
    }
}
