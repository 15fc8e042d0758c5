//! # Black-76 Options
//!
//! Pricing, Greeks and implied volatility for European options on forwards
//! and futures under the Black-76 model.
//!
//! ## Key Components
//!
//! - **Validation**: range/sign checks on raw inputs, all violations reported
//! - **Black-76**: closed-form premium, delta, gamma, vega, theta, rho
//! - **Implied Vol**: Newton-Raphson on vega with a bisection safeguard
//! - **Listed options**: BRN/HH contract months, option book, present values
//!
//! ## Usage
//!
//! ```rust
//! use black76_options::prelude::*;
//!
//! let result = black76_options::price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! assert!((result.price - 7.577).abs() < 1e-3);
//!
//! let iv = black76_options::implied_volatility(
//!     100.0, 100.0, 1.0, 0.05, result.price, OptionType::Call,
//! ).unwrap();
//! assert!((iv.volatility - 0.2).abs() < 1e-6);
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - Price American or exotic payoffs
//! - Build or calibrate volatility surfaces
//! - Day-count or calendar handling beyond a scalar time to expiry
//!   (the listed-option helpers use Actual/365)
//!
//! Every function is pure; nothing holds global state, so all of it can be
//! called from any number of threads at once.

pub mod api;
pub mod config;
pub mod core;
pub mod market;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        parse_option_type, validate_contract, validate_query, Black76Error, Black76Result, Field,
        ImpliedVolQuery, OptionContract, OptionType, PricingResult, ValidationError,
    };

    // Configuration
    pub use crate::config::{EngineConfig, InitialGuess, SolverConfig, ValuationConfig};

    // Models
    pub use crate::models::{
        black76, implied_volatility as solve_implied_volatility, norm_cdf, norm_pdf,
        ImpliedVolatility, SolveMethod,
    };

    // Listed options
    pub use crate::market::{
        last_trading_day, value_book, Commodity, ContractMonth, ListedOption, ListingRequest,
        OptionBook, PvQuery, ValuedOption,
    };
}

// Re-export the validated entry points at crate root
pub use crate::api::{implied_volatility, implied_volatility_with, price, price_contract, solve_query};
pub use crate::core::{Black76Error, Black76Result};
