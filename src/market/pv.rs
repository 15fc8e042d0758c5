//! Present value of listed options
//!
//! Prices every listing for one commodity off a single set of market inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::book::{ListedOption, OptionBook};
use super::contract_month::Commodity;
use crate::api;
use crate::config::ValuationConfig;
use crate::core::{
    validate_contract, Black76Error, Black76Result, OptionContract, OptionType, PricingResult,
};

/// Market inputs shared by every listing of a commodity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PvQuery {
    pub commodity: Commodity,
    pub interest_rate: f64,
    pub volatility: f64,
    /// Futures price of the underlying
    pub forward: f64,
}

/// A listing with its valuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuedOption {
    #[serde(flatten)]
    pub option: ListedOption,
    pub interest_rate: f64,
    pub volatility: f64,
    pub forward: f64,
    pub time_to_expiry: f64,
    /// Premium rounded to the configured precision
    pub pv: f64,
    pub pricing: PricingResult,
}

/// Value one listing as of `as_of`
pub fn value_option(
    option: &ListedOption,
    query: &PvQuery,
    as_of: NaiveDate,
    config: &ValuationConfig,
) -> Black76Result<ValuedOption> {
    let time_to_expiry = option.time_to_expiry(as_of, config.day_count_basis);
    let contract = OptionContract::new(
        query.forward,
        option.strike_price,
        time_to_expiry,
        query.interest_rate,
        query.volatility,
        option.option_type,
    );
    let pricing = api::price_contract(&contract)?;

    Ok(ValuedOption {
        option: option.clone(),
        interest_rate: query.interest_rate,
        volatility: query.volatility,
        forward: query.forward,
        time_to_expiry,
        pv: config.round_pv(pricing.price),
        pricing,
    })
}

/// Value every listing of `query.commodity`.
///
/// Market inputs are checked once up front so a bad forward or volatility is
/// reported as a validation error rather than per listing.
pub fn value_book(
    book: &OptionBook,
    query: &PvQuery,
    as_of: NaiveDate,
    config: &ValuationConfig,
) -> Black76Result<Vec<ValuedOption>> {
    config.validate()?;
    // Strike and expiry come from the listings
    validate_contract(&OptionContract::new(
        query.forward,
        1.0,
        0.0,
        query.interest_rate,
        query.volatility,
        OptionType::Call,
    ))?;

    let listings = book.by_commodity(query.commodity);
    if listings.is_empty() {
        tracing::warn!("No options exist for commodity {}", query.commodity);
        return Err(Black76Error::market(format!(
            "No options exist for commodity {}",
            query.commodity
        )));
    }

    listings
        .into_iter()
        .map(|option| value_option(option, query, as_of, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Field;
    use crate::market::ListingRequest;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn book() -> OptionBook {
        let requests = [
            ("BRN", "Apr24", 100.0, "Call"),
            ("HH", "Mar24", 10.0, "Put"),
            ("BRN", "May24", 100.0, "Put"),
        ]
        .iter()
        .map(|&(c, e, k, t)| ListingRequest {
            commodity: c.to_string(),
            expires_on: e.to_string(),
            strike_price: k,
            option_type: t.to_string(),
            unit_of_measure: None,
        })
        .collect::<Vec<_>>();
        OptionBook::from_requests(&requests, as_of()).unwrap()
    }

    #[test]
    fn test_value_book() {
        let query = PvQuery {
            commodity: Commodity::Brn,
            interest_rate: 0.05,
            volatility: 0.3,
            forward: 98.0,
        };
        let valued = value_book(&book(), &query, as_of(), &ValuationConfig::default()).unwrap();

        assert_eq!(valued.len(), 2);
        for v in &valued {
            assert_eq!(v.option.commodity, Commodity::Brn);
            assert!(v.time_to_expiry > 0.0);
            assert!((v.pv - v.pricing.price).abs() <= 0.005);
            assert_eq!(v.pv, (v.pricing.price * 100.0).round() / 100.0);
        }

        // BRN Apr24 expires Thu 29 Feb 2024
        let call = &valued[0];
        assert_eq!(call.option.option_type, OptionType::Call);
        assert!((call.time_to_expiry - 45.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_value_book_unknown_commodity() {
        let mut b = book();
        b.remove(2);
        let query = PvQuery {
            commodity: Commodity::Hh,
            interest_rate: 0.05,
            volatility: 0.3,
            forward: 9.0,
        };
        let err = value_book(&b, &query, as_of(), &ValuationConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Market data error: No options exist for commodity HH");
    }

    #[test]
    fn test_value_book_bad_inputs() {
        let query = PvQuery {
            commodity: Commodity::Brn,
            interest_rate: 0.05,
            volatility: -0.3,
            forward: 0.0,
        };
        let err = value_book(&book(), &query, as_of(), &ValuationConfig::default()).unwrap_err();
        assert_eq!(err.fields(), vec![Field::Forward, Field::Volatility]);
    }

    #[test]
    fn test_valued_option_serializes_flat() {
        let query = PvQuery {
            commodity: Commodity::Hh,
            interest_rate: 0.02,
            volatility: 0.5,
            forward: 10.5,
        };
        let valued = value_book(&book(), &query, as_of(), &ValuationConfig::default()).unwrap();
        let json = serde_json::to_value(&valued[0]).unwrap();

        assert_eq!(json["commodity"], "HH");
        assert_eq!(json["option_type"], "Put");
        assert!(json["pricing"]["vega"].as_f64().unwrap() > 0.0);
    }
}
