//! Price vectors and the baseline a sweep varies

use serde::{Deserialize, Serialize};

use crate::Map;
use crate::analysis::SweepDimension;
use crate::error::{BaselineError, LookupError};

use super::{GoodId, Label};

/// Good → price, in insertion order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceVector {
    prices: Map<GoodId, f64>,
}

impl PriceVector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price of a good, replacing any previous price
    pub fn insert(&mut self, good: impl Into<GoodId>, price: f64) {
        self.prices.insert(good.into(), price);
    }

    #[must_use]
    pub fn get(&self, good: &GoodId) -> Option<f64> {
        self.prices.get(good).copied()
    }

    pub fn require(&self, good: &GoodId) -> Result<f64, LookupError> {
        self.get(good).ok_or_else(|| good.not_found())
    }

    #[must_use]
    pub fn contains(&self, good: &GoodId) -> bool {
        self.prices.contains_key(good)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn goods(&self) -> impl Iterator<Item = &GoodId> {
        self.prices.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GoodId, f64)> {
        self.prices.iter().map(|(g, p)| (g, *p))
    }

    /// Copy with the price of `good` replaced. The good must already be priced.
    pub fn with_price(&self, good: &GoodId, price: f64) -> Result<Self, LookupError> {
        let mut modified = self.clone();
        let slot = modified
            .prices
            .get_mut(good)
            .ok_or_else(|| good.not_found())?;
        *slot = price;
        Ok(modified)
    }

    fn validate(&self) -> Result<(), BaselineError> {
        if self.prices.is_empty() {
            return Err(BaselineError::NoGoods);
        }
        for (good, &price) in &self.prices {
            if !(price.is_finite() && price > 0.0) {
                return Err(BaselineError::InvalidPrice {
                    good: good.to_string(),
                    price,
                });
            }
        }
        Ok(())
    }
}

impl<G: Into<GoodId>> FromIterator<(G, f64)> for PriceVector {
    fn from_iter<I: IntoIterator<Item = (G, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().map(|(g, p)| (g.into(), p)).collect(),
        }
    }
}

/// The fixed inputs of a sweep: every price plus the household budget.
///
/// A `Baseline` is never modified in place by a sweep; each grid point works
/// on a copy produced by one of the `with_*` constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Baseline {
    prices: PriceVector,
    budget: f64,
}

impl Baseline {
    /// Build a baseline; every price and the budget must be positive and finite
    pub fn new(prices: PriceVector, budget: f64) -> Result<Self, BaselineError> {
        prices.validate()?;
        if !(budget.is_finite() && budget > 0.0) {
            return Err(BaselineError::InvalidBudget(budget));
        }
        Ok(Self { prices, budget })
    }

    #[must_use]
    pub fn prices(&self) -> &PriceVector {
        &self.prices
    }

    #[must_use]
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Current value of the swept dimension
    pub fn value(&self, dimension: &SweepDimension) -> Result<f64, LookupError> {
        match dimension {
            SweepDimension::Price(good) => self.prices.require(good),
            SweepDimension::Budget => Ok(self.budget),
        }
    }

    /// Copy with the swept dimension set to `value`
    pub fn with_value(&self, dimension: &SweepDimension, value: f64) -> Result<Self, LookupError> {
        match dimension {
            SweepDimension::Price(good) => self.with_price(good, value),
            SweepDimension::Budget => Ok(self.with_budget(value)),
        }
    }

    pub fn with_price(&self, good: &GoodId, price: f64) -> Result<Self, LookupError> {
        Ok(Self {
            prices: self.prices.with_price(good, price)?,
            budget: self.budget,
        })
    }

    #[must_use]
    pub fn with_budget(&self, budget: f64) -> Self {
        Self {
            prices: self.prices.clone(),
            budget,
        }
    }
}
