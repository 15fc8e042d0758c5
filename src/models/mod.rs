//! Pricing Models
//!
//! Implements:
//! - Standard normal distribution helpers
//! - Black-76 closed-form pricing and Greeks
//! - Implied volatility inversion of Black-76

pub mod black76;
pub mod implied_vol;
pub mod normal;

pub use black76::{d1, d2, greeks, premium, price, vega};
pub use implied_vol::*;
pub use normal::*;
