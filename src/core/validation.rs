//! Input validation
//!
//! Range and sign checks applied before anything reaches the pricing engine
//! or the implied volatility solver. Every check runs independently so a
//! caller sees all rejected fields at once. Nothing is clamped or repaired.

use super::error::{Black76Error, Black76Result, Field, ValidationError};
use super::option::{ImpliedVolQuery, OptionContract, OptionType};

fn check_positive(errors: &mut Vec<ValidationError>, field: Field, value: f64) {
    if !value.is_finite() {
        errors.push(ValidationError::new(field, format!("must be finite, got {}", value)));
    } else if value <= 0.0 {
        errors.push(ValidationError::new(field, format!("must be > 0, got {}", value)));
    }
}

fn check_non_negative(errors: &mut Vec<ValidationError>, field: Field, value: f64) {
    if !value.is_finite() {
        errors.push(ValidationError::new(field, format!("must be finite, got {}", value)));
    } else if value < 0.0 {
        errors.push(ValidationError::new(field, format!("must be >= 0, got {}", value)));
    }
}

fn check_finite(errors: &mut Vec<ValidationError>, field: Field, value: f64) {
    if !value.is_finite() {
        errors.push(ValidationError::new(field, format!("must be finite, got {}", value)));
    }
}

/// Rejects r·T large enough in magnitude that exp(-rT), or the discounted
/// notional, leaves the normal f64 range
fn check_discount(errors: &mut Vec<ValidationError>, rate: f64, time: f64, notional: f64) {
    if !(rate.is_finite() && time.is_finite() && time >= 0.0) {
        return;
    }
    let notional = if notional.is_finite() && notional > 0.0 { notional } else { 1.0 };
    let df = (-rate * time).exp();
    if !(df.is_normal() && (df * notional).is_finite()) {
        errors.push(ValidationError::new(
            Field::Rate,
            format!(
                "rate * time_to_expiry = {} puts the discount factor out of range",
                rate * time
            ),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> Black76Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Black76Error::Validation { errors })
    }
}

/// Validate pricing inputs: F > 0, K > 0, T >= 0, σ >= 0, r finite with exp(-rT) representable
pub fn validate_contract(contract: &OptionContract) -> Black76Result<()> {
    let mut errors = Vec::new();
    check_positive(&mut errors, Field::Forward, contract.forward);
    check_positive(&mut errors, Field::Strike, contract.strike);
    check_non_negative(&mut errors, Field::TimeToExpiry, contract.time_to_expiry);
    check_finite(&mut errors, Field::Rate, contract.rate);
    check_discount(
        &mut errors,
        contract.rate,
        contract.time_to_expiry,
        contract.forward.max(contract.strike),
    );
    check_non_negative(&mut errors, Field::Volatility, contract.volatility);
    finish(errors)
}

/// Validate implied volatility inputs: F > 0, K > 0, T >= 0, price > 0, r finite with exp(-rT) representable
pub fn validate_query(query: &ImpliedVolQuery) -> Black76Result<()> {
    let mut errors = Vec::new();
    check_positive(&mut errors, Field::Forward, query.forward);
    check_positive(&mut errors, Field::Strike, query.strike);
    check_non_negative(&mut errors, Field::TimeToExpiry, query.time_to_expiry);
    check_finite(&mut errors, Field::Rate, query.rate);
    check_discount(
        &mut errors,
        query.rate,
        query.time_to_expiry,
        query.forward.max(query.strike),
    );
    check_positive(&mut errors, Field::MarketPrice, query.market_price);
    finish(errors)
}

/// Parse an option type label ("Call"/"Put", any case)
pub fn parse_option_type(label: &str) -> Black76Result<OptionType> {
    label.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_call() -> OptionContract {
        OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
    }

    #[test]
    fn test_valid_contract() {
        assert!(validate_contract(&atm_call()).is_ok());

        // T = 0 and σ = 0 are on the valid boundary
        let expiring = OptionContract {
            time_to_expiry: 0.0,
            volatility: 0.0,
            ..atm_call()
        };
        assert!(validate_contract(&expiring).is_ok());

        // Negative rates are allowed
        let negative_rate = OptionContract { rate: -0.01, ..atm_call() };
        assert!(validate_contract(&negative_rate).is_ok());
    }

    #[test]
    fn test_each_bad_field_is_named() {
        let zero_strike = OptionContract { strike: 0.0, ..atm_call() };
        assert_eq!(validate_contract(&zero_strike).unwrap_err().fields(), vec![Field::Strike]);

        let negative_forward = OptionContract { forward: -1.0, ..atm_call() };
        assert_eq!(
            validate_contract(&negative_forward).unwrap_err().fields(),
            vec![Field::Forward]
        );

        let negative_time = OptionContract { time_to_expiry: -0.5, ..atm_call() };
        assert_eq!(
            validate_contract(&negative_time).unwrap_err().fields(),
            vec![Field::TimeToExpiry]
        );

        let negative_vol = OptionContract { volatility: -0.1, ..atm_call() };
        assert_eq!(
            validate_contract(&negative_vol).unwrap_err().fields(),
            vec![Field::Volatility]
        );
    }

    #[test]
    fn test_all_violations_reported() {
        let bad = OptionContract::new(-1.0, 0.0, -0.5, f64::NAN, -0.2, OptionType::Put);
        let err = validate_contract(&bad).unwrap_err();
        assert_eq!(
            err.fields(),
            vec![
                Field::Forward,
                Field::Strike,
                Field::TimeToExpiry,
                Field::Rate,
                Field::Volatility
            ]
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let inf_forward = OptionContract { forward: f64::INFINITY, ..atm_call() };
        let err = validate_contract(&inf_forward).unwrap_err();
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_extreme_rate_rejected() {
        let blows_up = OptionContract { rate: -800.0, ..atm_call() };
        assert_eq!(validate_contract(&blows_up).unwrap_err().fields(), vec![Field::Rate]);

        let vanishes = OptionContract { rate: 800.0, ..atm_call() };
        assert_eq!(validate_contract(&vanishes).unwrap_err().fields(), vec![Field::Rate]);

        // Same rate is harmless at expiry
        let expired = OptionContract { time_to_expiry: 0.0, ..blows_up };
        assert!(validate_contract(&expired).is_ok());

        let q = ImpliedVolQuery::new(100.0, 100.0, 1.0, -800.0, 7.5, OptionType::Call);
        assert_eq!(validate_query(&q).unwrap_err().fields(), vec![Field::Rate]);
    }

    #[test]
    fn test_query_validation() {
        let ok = ImpliedVolQuery::new(100.0, 100.0, 1.0, 0.05, 7.5, OptionType::Call);
        assert!(validate_query(&ok).is_ok());

        let free = ImpliedVolQuery { market_price: 0.0, ..ok };
        assert_eq!(validate_query(&free).unwrap_err().fields(), vec![Field::MarketPrice]);

        let bad = ImpliedVolQuery { strike: 0.0, market_price: -1.0, ..ok };
        assert_eq!(
            validate_query(&bad).unwrap_err().fields(),
            vec![Field::Strike, Field::MarketPrice]
        );
    }

    #[test]
    fn test_parse_option_type() {
        assert_eq!(parse_option_type("Call").unwrap(), OptionType::Call);
        assert_eq!(parse_option_type("PUT").unwrap(), OptionType::Put);
        assert!(parse_option_type("TEST").is_err());
    }
}
