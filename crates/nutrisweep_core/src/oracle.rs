//! Demand oracles
//!
//! The sweep engine never computes demand itself. It asks a `DemandOracle`,
//! which in practice wraps an estimated demand system. `CobbDouglas` is a
//! closed-form oracle used as a reference and in tests.

use crate::Map;
use crate::error::OracleError;
use crate::model::{Baseline, DemandMode, GoodId, Label, PriceVector, Quantities};

/// A demand system that can be evaluated at arbitrary prices.
pub trait DemandOracle {
    type Error: std::error::Error + 'static;

    /// Quantities demanded at `prices`.
    ///
    /// `DemandMode::Uncompensated` evaluates Marshallian demand at `budget`.
    /// `DemandMode::Compensated` evaluates Hicksian demand at the mode's
    /// utility level, and `budget` is not used.
    fn demand(
        &self,
        budget: f64,
        prices: &PriceVector,
        mode: &DemandMode,
    ) -> Result<Quantities<GoodId>, Self::Error>;

    /// Utility attained with `budget` at `prices`
    fn indirect_utility(&self, budget: f64, prices: &PriceVector) -> Result<f64, Self::Error>;
}

impl<O: DemandOracle + ?Sized> DemandOracle for &O {
    type Error = O::Error;

    fn demand(
        &self,
        budget: f64,
        prices: &PriceVector,
        mode: &DemandMode,
    ) -> Result<Quantities<GoodId>, Self::Error> {
        (**self).demand(budget, prices, mode)
    }

    fn indirect_utility(&self, budget: f64, prices: &PriceVector) -> Result<f64, Self::Error> {
        (**self).indirect_utility(budget, prices)
    }
}

/// Compensated mode holding utility at the level attained at the baseline
pub fn compensated_mode<O: DemandOracle>(
    oracle: &O,
    baseline: &Baseline,
) -> Result<DemandMode, O::Error> {
    let utility_level = oracle.indirect_utility(baseline.budget(), baseline.prices())?;
    tracing::debug!(utility_level, "Resolved reference utility");
    Ok(DemandMode::Compensated { utility_level })
}

/// Cobb-Douglas demand system `U(x) = Π x_i^{a_i}` with shares summing to one.
///
/// - Marshallian: `x_i = a_i m / p_i`
/// - Indirect utility: `v(p, m) = m Π (a_i / p_i)^{a_i}`
/// - Expenditure: `e(p, u) = u Π (p_i / a_i)^{a_i}`
/// - Hicksian: `h_i = a_i e(p, u) / p_i`
#[derive(Debug, Clone, PartialEq)]
pub struct CobbDouglas {
    shares: Map<GoodId, f64>,
}

impl CobbDouglas {
    /// Create from budget shares. Shares are normalised to sum to one;
    /// a repeated good keeps its first share.
    pub fn new<G, I>(shares: I) -> Result<Self, OracleError>
    where
        G: Into<GoodId>,
        I: IntoIterator<Item = (G, f64)>,
    {
        let mut normalized: Map<GoodId, f64> = Map::default();
        for (good, share) in shares {
            let good = good.into();
            if !(share.is_finite() && share > 0.0) {
                return Err(OracleError::InvalidShare {
                    good: good.to_string(),
                    share,
                });
            }
            normalized.entry(good).or_insert(share);
        }
        if normalized.is_empty() {
            return Err(OracleError::NoGoods);
        }

        let total: f64 = normalized.values().sum();
        for share in normalized.values_mut() {
            *share /= total;
        }
        Ok(Self { shares: normalized })
    }

    /// Normalised budget share of a good
    #[must_use]
    pub fn share(&self, good: &GoodId) -> Option<f64> {
        self.shares.get(good).copied()
    }

    pub fn goods(&self) -> impl Iterator<Item = &GoodId> {
        self.shares.keys()
    }

    /// Expenditure needed to reach `utility` at `prices`
    pub fn expenditure(&self, utility: f64, prices: &PriceVector) -> Result<f64, OracleError> {
        if !(utility.is_finite() && utility > 0.0) {
            return Err(OracleError::NonPositiveUtility(utility));
        }
        Ok(utility * self.log_price_index(prices)?.exp())
    }

    /// `Σ a_i ln(p_i / a_i)`; every share-bearing good must be priced
    fn log_price_index(&self, prices: &PriceVector) -> Result<f64, OracleError> {
        let mut index = 0.0;
        for (good, &share) in &self.shares {
            let price = self.price(good, prices)?;
            index += share * (price / share).ln();
        }
        Ok(index)
    }

    fn price(&self, good: &GoodId, prices: &PriceVector) -> Result<f64, OracleError> {
        let price = prices.get(good).ok_or_else(|| good.not_found())?;
        if !(price.is_finite() && price > 0.0) {
            return Err(OracleError::NonPositivePrice {
                good: good.to_string(),
                price,
            });
        }
        Ok(price)
    }

    fn marshallian(&self, budget: f64, prices: &PriceVector) -> Result<Quantities<GoodId>, OracleError> {
        if !(budget.is_finite() && budget > 0.0) {
            return Err(OracleError::NonPositiveBudget(budget));
        }
        let mut quantities = Quantities::new();
        for (good, &share) in &self.shares {
            let price = self.price(good, prices)?;
            quantities.push(good.clone(), share * budget / price);
        }
        Ok(quantities)
    }
}

impl DemandOracle for CobbDouglas {
    type Error = OracleError;

    fn demand(
        &self,
        budget: f64,
        prices: &PriceVector,
        mode: &DemandMode,
    ) -> Result<Quantities<GoodId>, Self::Error> {
        match mode {
            DemandMode::Uncompensated => self.marshallian(budget, prices),
            // Hicksian demand is Marshallian demand at the compensating budget
            DemandMode::Compensated { utility_level } => {
                let expenditure = self.expenditure(*utility_level, prices)?;
                self.marshallian(expenditure, prices)
            }
        }
    }

    fn indirect_utility(&self, budget: f64, prices: &PriceVector) -> Result<f64, Self::Error> {
        if !(budget.is_finite() && budget > 0.0) {
            return Err(OracleError::NonPositiveBudget(budget));
        }
        Ok(budget * (-self.log_price_index(prices)?).exp())
    }
}
