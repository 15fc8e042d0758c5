//! Validated entry points
//!
//! Primitive-argument operations for transport layers: inputs are validated,
//! then handed to the engine or the solver. Every failure comes back as a
//! typed [`Black76Error`].

use crate::config::SolverConfig;
use crate::core::{
    validate_contract, validate_query, Black76Error, Black76Result, ImpliedVolQuery,
    OptionContract, OptionType, PricingResult,
};
use crate::models::{black76, implied_vol, ImpliedVolatility};

/// Price and Greeks for a European option on a forward
pub fn price(
    forward: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> Black76Result<PricingResult> {
    price_contract(&OptionContract::new(
        forward,
        strike,
        time_to_expiry,
        rate,
        volatility,
        option_type,
    ))
}

pub fn price_contract(contract: &OptionContract) -> Black76Result<PricingResult> {
    validate_contract(contract)?;
    Ok(black76::price(contract))
}

/// Implied volatility with the default solver settings
pub fn implied_volatility(
    forward: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    market_price: f64,
    option_type: OptionType,
) -> Black76Result<ImpliedVolatility> {
    implied_volatility_with(
        forward,
        strike,
        time_to_expiry,
        rate,
        market_price,
        option_type,
        &SolverConfig::default(),
    )
}

#[allow(clippy::too_many_arguments)]
pub fn implied_volatility_with(
    forward: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    market_price: f64,
    option_type: OptionType,
    config: &SolverConfig,
) -> Black76Result<ImpliedVolatility> {
    solve_query(
        &ImpliedVolQuery::new(forward, strike, time_to_expiry, rate, market_price, option_type),
        config,
    )
}

pub fn solve_query(
    query: &ImpliedVolQuery,
    config: &SolverConfig,
) -> Black76Result<ImpliedVolatility> {
    validate_query(query)?;
    config.validate()?;
    let result = implied_vol::implied_volatility(query, config);
    if let Err(Black76Error::DidNotConverge { iterations, residual, .. }) = &result {
        tracing::debug!(
            "Implied vol for K={} T={} gave up after {} iterations (residual {:e})",
            query.strike,
            query.time_to_expiry,
            iterations,
            residual
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Field;

    #[test]
    fn test_price_rejects_bad_inputs() {
        let err = price(100.0, 0.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap_err();
        assert_eq!(err.fields(), vec![Field::Strike]);

        let err = price(-1.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap_err();
        assert_eq!(err.fields(), vec![Field::Forward]);

        let err = price(100.0, 100.0, -0.5, 0.05, 0.2, OptionType::Call).unwrap_err();
        assert_eq!(err.fields(), vec![Field::TimeToExpiry]);
    }

    #[test]
    fn test_price_rejects_unrepresentable_discount() {
        let err = price(100.0, 100.0, 1.0, -800.0, 0.2, OptionType::Call).unwrap_err();
        assert_eq!(err.fields(), vec![Field::Rate]);
    }

    #[test]
    fn test_price_round_trip() {
        let r = price(100.0, 95.0, 0.5, 0.03, 0.3, OptionType::Put).unwrap();
        let iv = implied_volatility(100.0, 95.0, 0.5, 0.03, r.price, OptionType::Put).unwrap();
        assert!((iv.volatility - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_implied_vol_validation_precedes_bounds() {
        let err = implied_volatility(100.0, 100.0, 1.0, 0.05, -3.0, OptionType::Call).unwrap_err();
        assert_eq!(err.fields(), vec![Field::MarketPrice]);
    }

    #[test]
    fn test_bad_config_rejected() {
        let config = SolverConfig {
            max_iterations: 0,
            ..Default::default()
        };
        let err = implied_volatility_with(100.0, 100.0, 1.0, 0.05, 7.5, OptionType::Call, &config)
            .unwrap_err();
        assert!(matches!(err, Black76Error::Config(_)));
    }
}
