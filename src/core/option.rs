//! Option contract definitions
//!
//! European options on a forward or futures price, described by the inputs
//! the Black-76 model consumes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Black76Error, Field};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    #[serde(alias = "CALL", alias = "call")]
    Call,
    #[serde(alias = "PUT", alias = "put")]
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Undiscounted intrinsic value against a forward
    pub fn intrinsic(&self, forward: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (forward - strike).max(0.0),
            OptionType::Put => (strike - forward).max(0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = Black76Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(Black76Error::invalid(
                Field::OptionType,
                format!("unrecognized option type {:?}, expected Call or Put", s),
            )),
        }
    }
}

/// Black-76 contract inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Forward/futures price (F)
    pub forward: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Years until expiry (T)
    pub time_to_expiry: f64,
    /// Continuously compounded discount rate (r)
    pub rate: f64,
    /// Annualized volatility (σ)
    pub volatility: f64,
    /// Option type (Call/Put)
    pub option_type: OptionType,
}

impl OptionContract {
    pub fn new(
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            forward,
            strike,
            time_to_expiry,
            rate,
            volatility,
            option_type,
        }
    }

    /// Discount factor exp(-rT)
    pub fn discount(&self) -> f64 {
        (-self.rate * self.time_to_expiry).exp()
    }

    /// Is this option in the money against the forward?
    pub fn is_itm(&self) -> bool {
        match self.option_type {
            OptionType::Call => self.forward > self.strike,
            OptionType::Put => self.forward < self.strike,
        }
    }

    /// Discounted intrinsic value, the σ → 0 limit of the price
    pub fn discounted_intrinsic(&self) -> f64 {
        self.discount() * self.option_type.intrinsic(self.forward, self.strike)
    }
}

/// Observed premium to be inverted for volatility
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolQuery {
    pub forward: f64,
    pub strike: f64,
    pub time_to_expiry: f64,
    pub rate: f64,
    /// Observed option premium
    pub market_price: f64,
    pub option_type: OptionType,
}

impl ImpliedVolQuery {
    pub fn new(
        forward: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        market_price: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            forward,
            strike,
            time_to_expiry,
            rate,
            market_price,
            option_type,
        }
    }

    /// The priced contract at a trial volatility
    pub fn contract(&self, volatility: f64) -> OptionContract {
        OptionContract::new(
            self.forward,
            self.strike,
            self.time_to_expiry,
            self.rate,
            volatility,
            self.option_type,
        )
    }

    /// Attainable premium range `(lower, upper)` over all volatilities.
    ///
    /// The lower end is the discounted intrinsic value (σ → 0), the upper end
    /// the discounted forward for a call or discounted strike for a put (σ → ∞).
    pub fn price_bounds(&self) -> (f64, f64) {
        let df = (-self.rate * self.time_to_expiry).exp();
        let lower = df * self.option_type.intrinsic(self.forward, self.strike);
        let upper = match self.option_type {
            OptionType::Call => df * self.forward,
            OptionType::Put => df * self.strike,
        };
        (lower, upper)
    }
}
