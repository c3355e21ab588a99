use crate::analytic::black_scholes::{call_unchecked, d1_d2, vega};
use crate::common::models::OptionParameters;
use crate::error::PricingError;

/// Starting point of the Newton-Raphson search.
const INITIAL_SIGMA: f64 = 0.5;
/// Below this vega the Newton step divides by (almost) zero.
const VEGA_FLOOR: f64 = 1e-10;
/// Working volatility stays inside these bounds; values outside carry no
/// physical meaning.
const SIGMA_FLOOR: f64 = 1e-4;
const SIGMA_CAP: f64 = 5.0;

/// Tolerance on the price residual and cap on the Newton iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 100,
        }
    }
}

/// Outcome of an implied volatility search. `converged` separates a residual
/// below tolerance from the best estimate of an exhausted iteration budget,
/// so a fallback guess is never mistaken for a trustworthy answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolatility {
    pub sigma: f64,
    /// Newton updates applied before the search stopped.
    pub iterations: usize,
    pub converged: bool,
}

/// Inverts the Black-Scholes call price with Newton-Raphson over `vola`:
/// at each step the model price is re-evaluated at the working volatility
/// and the price residual divided by vega drives the next estimate.
/// See https://en.wikipedia.org/wiki/Implied_volatility
///
/// The stored `vola` of `dp` is ignored and never mutated; the working
/// volatility is local to the search, and the caller decides whether to
/// adopt the returned estimate into its own parameters.
pub fn implied_volatility(
    dp: &OptionParameters,
    observed_price: f64,
    config: &SolverConfig,
) -> Result<ImpliedVolatility, PricingError> {
    dp.validate_contract()?;
    if !observed_price.is_finite() {
        return Err(PricingError::InvalidParameter {
            name: "observed_price",
            value: observed_price,
        });
    }

    let mut working = *dp;
    working.vola = INITIAL_SIGMA;

    for iteration in 0..config.max_iterations {
        let price = call_unchecked(&working);
        let residual = observed_price - price;
        if residual.abs() < config.tolerance {
            return Ok(ImpliedVolatility {
                sigma: working.vola,
                iterations: iteration,
                converged: true,
            });
        }

        let (d1, _) = d1_d2(&working);
        let slope = vega(&working, d1);
        if !slope.is_finite() || slope < VEGA_FLOOR {
            return Err(PricingError::NumericalInstability {
                reason: "vega below threshold",
                sigma: working.vola,
                iteration,
            });
        }

        let next = working.vola + residual / slope;
        if !next.is_finite() {
            return Err(PricingError::NumericalInstability {
                reason: "volatility update not finite",
                sigma: working.vola,
                iteration,
            });
        }
        working.vola = next.clamp(SIGMA_FLOOR, SIGMA_CAP);
    }

    Ok(ImpliedVolatility {
        sigma: working.vola,
        iterations: config.max_iterations,
        converged: false,
    })
}
