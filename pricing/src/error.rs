use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// An input outside its valid domain, rejected before any formula is
    /// evaluated. The prices and greeks never return NaN or infinity.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The Newton-Raphson update can no longer be trusted, e.g. vega
    /// underflowed for a deep in- or out-of-the-money contract.
    #[error("implied volatility search unstable at sigma {sigma} (iteration {iteration}): {reason}")]
    NumericalInstability {
        reason: &'static str,
        sigma: f64,
        iteration: usize,
    },
}
