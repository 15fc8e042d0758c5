//! Black-76 Model
//!
//! Provides:
//! - European option pricing on forwards/futures
//! - Greeks computation
//!
//! Inputs are expected to have passed `core::validation`; on that domain every
//! function here is total. When either T = 0 or σ = 0 the premium collapses to
//! the discounted intrinsic value and the general formulas (which divide by
//! σ√T) are never evaluated.

use super::normal::{norm_cdf, norm_pdf};
use crate::core::{OptionContract, OptionType, PricingResult};

/// Black-76 d1 parameter
pub fn d1(forward: f64, strike: f64, vol: f64, time: f64) -> f64 {
    ((forward / strike).ln() + 0.5 * vol * vol * time) / (vol * time.sqrt())
}

/// Black-76 d2 parameter
pub fn d2(forward: f64, strike: f64, vol: f64, time: f64) -> f64 {
    d1(forward, strike, vol, time) - vol * time.sqrt()
}

fn is_degenerate(contract: &OptionContract) -> bool {
    contract.time_to_expiry <= 0.0 || contract.volatility <= 0.0
}

/// Discounted premium only
pub fn premium(contract: &OptionContract) -> f64 {
    if is_degenerate(contract) {
        return contract.discounted_intrinsic();
    }

    let OptionContract {
        forward: f,
        strike: k,
        time_to_expiry: t,
        volatility: vol,
        ..
    } = *contract;
    let d1 = d1(f, k, vol, t);
    let d2 = d1 - vol * t.sqrt();
    let df = contract.discount();

    match contract.option_type {
        OptionType::Call => df * (f * norm_cdf(d1) - k * norm_cdf(d2)),
        OptionType::Put => df * (k * norm_cdf(-d2) - f * norm_cdf(-d1)),
    }
}

/// Raw vega, dV/dσ per unit volatility
pub fn vega(contract: &OptionContract) -> f64 {
    if is_degenerate(contract) {
        return 0.0;
    }
    let t = contract.time_to_expiry;
    let d1 = d1(contract.forward, contract.strike, contract.volatility, t);
    contract.discount() * contract.forward * norm_pdf(d1) * t.sqrt()
}

/// Price and Greeks at expiry or zero volatility.
///
/// Delta is a step in F: ±discount in the money, 0 out of the money and 0
/// exactly at the strike. Theta and rho only see the discount factor and are
/// 0 at T = 0.
fn degenerate(contract: &OptionContract) -> PricingResult {
    let df = contract.discount();
    let price = contract.discounted_intrinsic();

    let delta = if contract.is_itm() {
        contract.option_type.phi() * df
    } else {
        0.0
    };

    let (theta, rho) = if contract.time_to_expiry > 0.0 {
        (contract.rate * price, -contract.time_to_expiry * price)
    } else {
        (0.0, 0.0)
    };

    PricingResult {
        price,
        delta,
        gamma: 0.0,
        vega: 0.0,
        theta,
        rho,
    }
}

/// Black-76 price and Greeks
pub fn price(contract: &OptionContract) -> PricingResult {
    if is_degenerate(contract) {
        return degenerate(contract);
    }

    let OptionContract {
        forward: f,
        strike: k,
        time_to_expiry: t,
        rate,
        volatility: vol,
        option_type,
    } = *contract;

    let sqrt_t = t.sqrt();
    let sig_sqrt_t = vol * sqrt_t;
    let d1 = d1(f, k, vol, t);
    let d2 = d1 - sig_sqrt_t;
    let df = contract.discount();
    let pdf_d1 = norm_pdf(d1);

    let (price, delta) = match option_type {
        OptionType::Call => {
            let nd1 = norm_cdf(d1);
            (df * (f * nd1 - k * norm_cdf(d2)), df * nd1)
        }
        OptionType::Put => {
            let nd1 = norm_cdf(-d1);
            (df * (k * norm_cdf(-d2) - f * nd1), -df * nd1)
        }
    };

    // Gamma and vega are the same for call and put
    let gamma = df * pdf_d1 / (f * sig_sqrt_t);
    let vega = df * f * pdf_d1 * sqrt_t;

    // Decay of the undiscounted value plus carry on the discounted premium
    let theta = -df * f * pdf_d1 * vol / (2.0 * sqrt_t) + rate * price;

    // Forward held fixed, so only the discount factor moves with r
    let rho = -t * price;

    PricingResult {
        price,
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}

/// Alias of [`price`] for call sites that only want sensitivities
pub fn greeks(contract: &OptionContract) -> PricingResult {
    price(contract)
}
