//! Pricing output
//!
//! Premium and first-order sensitivities for a single contract.

use serde::{Deserialize, Serialize};

/// Price and Greeks of one option
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Discounted premium
    pub price: f64,
    /// Delta: dV/dF (sensitivity to the forward)
    pub delta: f64,
    /// Gamma: d²V/dF²
    pub gamma: f64,
    /// Vega: dV/dσ per unit volatility (divide by 100 for a 1% move)
    pub vega: f64,
    /// Theta: value change per year as time to expiry decreases
    pub theta: f64,
    /// Rho: dV/dr with the forward held fixed
    pub rho: f64,
}

impl PricingResult {
    /// Vega for a one-point (1%) volatility move
    pub fn vega_per_point(&self) -> f64 {
        self.vega / 100.0
    }

    /// Theta per calendar day
    pub fn theta_per_day(&self, days_per_year: f64) -> f64 {
        self.theta / days_per_year
    }

    /// Rho for a one basis point rate move
    pub fn rho_per_bp(&self) -> f64 {
        self.rho / 10_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions() {
        let r = PricingResult {
            price: 7.5,
            delta: 0.5,
            gamma: 0.02,
            vega: 37.8,
            theta: -3.65,
            rho: -7.5,
        };

        assert!((r.vega_per_point() - 0.378).abs() < 1e-12);
        assert!((r.theta_per_day(365.0) + 0.01).abs() < 1e-12);
        assert!((r.rho_per_bp() + 0.00075).abs() < 1e-12);
    }
}
