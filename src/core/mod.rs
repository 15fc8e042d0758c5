//! Core data types
//!
//! Defines fundamental types:
//! - OptionContract / ImpliedVolQuery: Black-76 inputs
//! - PricingResult: premium and Greeks
//! - Black76Error: failure taxonomy
//! - validation: input checks run before pricing

pub mod error;
pub mod greeks;
pub mod option;
pub mod validation;

pub use error::*;
pub use greeks::*;
pub use option::*;
pub use validation::*;
