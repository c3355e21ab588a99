use crate::analytic::black_scholes::{cdf, d1_d2, pdf, vega};
use crate::common::models::OptionParameters;
use crate::error::PricingError;

/// Sensitivities of the Black-Scholes price to its inputs.
/// Theta is per year; vega and rho are per unit change of `vola` and `rfr`.
/// https://en.wikipedia.org/wiki/Greeks_(finance)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

impl Greeks {
    pub fn call(dp: &OptionParameters) -> Result<Self, PricingError> {
        dp.validate()?;
        let (d1, d2) = d1_d2(dp);
        let sqrt_t = dp.time_to_expiration.sqrt();
        let discounted_strike = dp.strike * (-dp.rfr * dp.time_to_expiration).exp();
        Ok(Self {
            delta: cdf(d1),
            gamma: pdf(d1) / (dp.asset_price * dp.vola * sqrt_t),
            vega: vega(dp, d1),
            theta: -dp.asset_price * pdf(d1) * dp.vola / (2.0 * sqrt_t)
                - dp.rfr * discounted_strike * cdf(d2),
            rho: dp.time_to_expiration * discounted_strike * cdf(d2),
        })
    }

    pub fn put(dp: &OptionParameters) -> Result<Self, PricingError> {
        dp.validate()?;
        let (d1, d2) = d1_d2(dp);
        let sqrt_t = dp.time_to_expiration.sqrt();
        let discounted_strike = dp.strike * (-dp.rfr * dp.time_to_expiration).exp();
        Ok(Self {
            delta: cdf(d1) - 1.0,
            gamma: pdf(d1) / (dp.asset_price * dp.vola * sqrt_t),
            vega: vega(dp, d1),
            theta: -dp.asset_price * pdf(d1) * dp.vola / (2.0 * sqrt_t)
                + dp.rfr * discounted_strike * cdf(-d2),
            rho: -dp.time_to_expiration * discounted_strike * cdf(-d2),
        })
    }
}
