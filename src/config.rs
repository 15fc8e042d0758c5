//! Engine configuration
//!
//! Solver tolerances and valuation conventions. Every section has a `Default`
//! and the whole tree round-trips through JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Black76Error, Black76Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Implied volatility solver
    pub solver: SolverConfig,
    /// Listed-contract valuation
    pub valuation: ValuationConfig,
}

impl EngineConfig {
    /// Load from a JSON file; missing sections fall back to defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Black76Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&json)?;
        config.validate()?;
        tracing::info!("Loaded engine config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Black76Result<()> {
        self.solver.validate()?;
        self.valuation.validate()
    }
}

/// Seed for the Newton iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialGuess {
    /// Always start from the same volatility
    Fixed(f64),
    /// Brenner-Subrahmanyam: σ₀ ≈ √(2π/T) · time value / (discount · F)
    BrennerSubrahmanyam,
}

/// Implied volatility solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Starting volatility
    /// Default: Brenner-Subrahmanyam
    pub initial_guess: InitialGuess,

    /// Stop when |model price - market price| falls below this
    /// Default: 1e-8 (price units)
    pub price_tolerance: f64,

    /// Iteration budget across Newton and bisection steps
    /// Default: 100
    pub max_iterations: usize,

    /// Vega below which Newton is abandoned for bisection
    /// Default: 1e-8
    pub min_vega: f64,

    /// Consecutive Newton steps without residual improvement before giving up on Newton
    /// Default: 3
    pub max_newton_stalls: usize,

    /// Largest volatility tried while bracketing the root
    /// Default: 100.0
    pub max_volatility: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: InitialGuess::BrennerSubrahmanyam,
            price_tolerance: 1e-8,
            max_iterations: 100,
            min_vega: 1e-8,
            max_newton_stalls: 3,
            max_volatility: 100.0,
        }
    }
}

impl SolverConfig {
    /// Tight tolerance, generous budget
    pub fn precise() -> Self {
        Self {
            price_tolerance: 1e-12,
            max_iterations: 200,
            ..Default::default()
        }
    }

    /// Loose tolerance and a fixed 20% seed for quick quoting
    pub fn fast() -> Self {
        Self {
            initial_guess: InitialGuess::Fixed(0.2),
            price_tolerance: 1e-6,
            max_iterations: 50,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Black76Result<()> {
        if !(self.price_tolerance > 0.0) {
            return Err(Black76Error::config("solver.price_tolerance must be > 0"));
        }
        if self.max_iterations == 0 {
            return Err(Black76Error::config("solver.max_iterations must be >= 1"));
        }
        if !(self.min_vega >= 0.0) {
            return Err(Black76Error::config("solver.min_vega must be >= 0"));
        }
        if !(self.max_volatility > 1.0) {
            return Err(Black76Error::config("solver.max_volatility must be > 1"));
        }
        if let InitialGuess::Fixed(vol) = self.initial_guess {
            if !(vol > 0.0 && vol.is_finite()) {
                return Err(Black76Error::config("solver.initial_guess must be a positive volatility"));
            }
        }
        Ok(())
    }
}

/// Listed-contract valuation conventions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Days per year for time to expiry (Actual/basis)
    /// Default: 365
    pub day_count_basis: f64,

    /// Decimal places kept in reported present values
    /// Default: 2
    pub pv_decimals: u32,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            day_count_basis: 365.0,
            pv_decimals: 2,
        }
    }
}

impl ValuationConfig {
    pub fn validate(&self) -> Black76Result<()> {
        if !(self.day_count_basis > 0.0) {
            return Err(Black76Error::config("valuation.day_count_basis must be > 0"));
        }
        if self.pv_decimals > 12 {
            return Err(Black76Error::config("valuation.pv_decimals must be <= 12"));
        }
        Ok(())
    }

    /// Round a present value to the configured precision
    pub fn round_pv(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.pv_decimals as i32);
        (value * scale).round() / scale
    }
}
