//! Implied volatility solver
//!
//! Inverts the Black-76 premium in σ with Newton-Raphson on vega, safeguarded
//! by a bisection bracket:
//! - the market price is checked against the attainable range first, so an
//!   unreachable premium fails fast instead of iterating
//! - every evaluation tightens the bracket `[lo, hi]`
//! - a Newton step that leaves the bracket (e.g. would go negative) becomes a
//!   bisection step for that iteration
//! - Newton is dropped for good when vega is too small or the residual stops
//!   shrinking

use serde::{Deserialize, Serialize};

use super::black76;
use crate::config::{InitialGuess, SolverConfig};
use crate::core::{Black76Error, Black76Result, ImpliedVolQuery};

/// Step that produced the returned volatility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMethod {
    /// Premium sits on the discounted intrinsic value, σ = 0
    Intrinsic,
    Newton,
    Bisection,
}

/// Solved volatility with diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolatility {
    pub volatility: f64,
    /// Pricing evaluations inside the iteration loop
    pub iterations: usize,
    /// Model price minus market price at `volatility`
    pub residual: f64,
    pub method: SolveMethod,
}

/// Starting volatility before it is clamped into the bracket
fn seed(query: &ImpliedVolQuery, config: &SolverConfig, lower: f64) -> f64 {
    match config.initial_guess {
        InitialGuess::Fixed(vol) => vol,
        InitialGuess::BrennerSubrahmanyam => {
            let df = (-query.rate * query.time_to_expiry).exp();
            let time_value = query.market_price - lower;
            time_value * (2.0 * std::f64::consts::PI / query.time_to_expiry).sqrt()
                / (df * query.forward)
        }
    }
}

/// Solve for σ such that the Black-76 premium matches `query.market_price`.
///
/// Expects `query` to have passed `core::validate_query`.
pub fn implied_volatility(
    query: &ImpliedVolQuery,
    config: &SolverConfig,
) -> Black76Result<ImpliedVolatility> {
    let target = query.market_price;
    let tol = config.price_tolerance;
    let (lower, upper) = query.price_bounds();

    if query.time_to_expiry <= 0.0 {
        // Every volatility prices at intrinsic
        if (target - lower).abs() < tol {
            return Ok(ImpliedVolatility {
                volatility: 0.0,
                iterations: 0,
                residual: lower - target,
                method: SolveMethod::Intrinsic,
            });
        }
        return Err(Black76Error::OutOfBounds {
            market_price: target,
            lower,
            upper: lower,
        });
    }

    if target < lower - tol || target > upper - tol {
        return Err(Black76Error::OutOfBounds {
            market_price: target,
            lower,
            upper,
        });
    }

    if target - lower < tol {
        return Ok(ImpliedVolatility {
            volatility: 0.0,
            iterations: 0,
            residual: lower - target,
            method: SolveMethod::Intrinsic,
        });
    }

    // Bracket the root: premium(lo) < target <= premium(hi)
    let mut lo = 0.0;
    let mut hi = 1.0;
    loop {
        let residual = black76::premium(&query.contract(hi)) - target;
        if residual >= 0.0 {
            break;
        }
        if hi >= config.max_volatility {
            return Err(Black76Error::DidNotConverge {
                iterations: 0,
                volatility: hi,
                residual,
            });
        }
        lo = hi;
        hi = (hi * 2.0).min(config.max_volatility);
    }

    let mut vol = seed(query, config, lower);
    let mut method = SolveMethod::Newton;
    if !(vol > lo && vol < hi) {
        vol = 0.5 * (lo + hi);
        method = SolveMethod::Bisection;
    }

    let mut use_newton = true;
    let mut stalls = 0;
    let mut prev_abs = f64::INFINITY;
    let mut residual = f64::NAN;

    for iteration in 1..=config.max_iterations {
        let contract = query.contract(vol);
        residual = black76::premium(&contract) - target;

        if residual.abs() < tol {
            return Ok(ImpliedVolatility {
                volatility: vol,
                iterations: iteration,
                residual,
                method,
            });
        }

        if residual > 0.0 {
            hi = vol;
        } else {
            lo = vol;
        }

        if use_newton {
            if residual.abs() >= prev_abs {
                stalls += 1;
                if stalls >= config.max_newton_stalls {
                    tracing::debug!(
                        "Newton stalled {} times at vol {}, switching to bisection",
                        stalls,
                        vol
                    );
                    use_newton = false;
                }
            } else {
                stalls = 0;
            }
        }
        prev_abs = residual.abs();

        let mut next = None;
        if use_newton {
            let vega = black76::vega(&contract);
            if vega < config.min_vega {
                tracing::debug!("Vega {:e} too small at vol {}, switching to bisection", vega, vol);
                use_newton = false;
            } else {
                let candidate = vol - residual / vega;
                if candidate > lo && candidate < hi {
                    next = Some(candidate);
                }
            }
        }

        match next {
            Some(candidate) => {
                vol = candidate;
                method = SolveMethod::Newton;
            }
            None => {
                vol = 0.5 * (lo + hi);
                method = SolveMethod::Bisection;
            }
        }
    }

    Err(Black76Error::DidNotConverge {
        iterations: config.max_iterations,
        volatility: vol,
        residual,
    })
}
