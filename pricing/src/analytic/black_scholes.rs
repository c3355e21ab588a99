use crate::common::models::OptionParameters;
use crate::error::PricingError;
use probability::distribution::{Continuous, Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub(crate) fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

/// The auxiliary terms of the Black-Scholes formula. Recomputed from the
/// current parameter values on every call since `vola` changes between
/// solver iterations.
pub(crate) fn d1_d2(dp: &OptionParameters) -> (f64, f64) {
    let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
    let d1 = ((dp.asset_price / dp.strike).ln()
        + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
        / sigma_exp;
    (d1, d1 - sigma_exp)
}

/// Price sensitivity to `vola`, the Newton-Raphson derivative.
pub(crate) fn vega(dp: &OptionParameters, d1: f64) -> f64 {
    dp.asset_price * pdf(d1) * dp.time_to_expiration.sqrt()
}

/// Assumes `dp` was already validated; prices one closed-form evaluation
/// inside the implied volatility loop without re-checking the contract.
pub(crate) fn call_unchecked(dp: &OptionParameters) -> f64 {
    let (d1, d2) = d1_d2(dp);
    cdf(d1) * dp.asset_price - cdf(d2) * dp.strike * (-dp.rfr * dp.time_to_expiration).exp()
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> Result<f64, PricingError>;
    fn call(params: &Self::Params) -> Result<f64, PricingError>;
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn call(dp: &OptionParameters) -> Result<f64, PricingError> {
        dp.validate()?;
        Ok(call_unchecked(dp))
    }

    fn put(dp: &OptionParameters) -> Result<f64, PricingError> {
        dp.validate()?;
        let (d1, d2) = d1_d2(dp);
        Ok(cdf(-d2) * dp.strike * (-dp.rfr * dp.time_to_expiration).exp()
            - cdf(-d1) * dp.asset_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn normal_cdf() {
        let center_value = cdf(0.0);
        assert_eq!(center_value, 0.5);

        let sigma_top = cdf(1.0); // mu + 1 sigma
        assert_approx_eq!(sigma_top, 0.8413, 0.0001); // table value for 1.0
    }

    #[test]
    fn normal_pdf() {
        let center_value = pdf(0.0);
        assert_approx_eq!(center_value, 0.39894, 1e-5); // 1 / sqrt(2 pi)

        let sigma_top = pdf(1.0);
        assert_approx_eq!(sigma_top, 0.24197, 1e-5); // table value for 1.0
    }

    #[test]
    fn european_call() {
        let dp = OptionParameters::new(300.0, 250.0, 1.0, 0.03, 0.15);
        assert_approx_eq!(BlackScholesMerton::call(&dp).unwrap(), 58.8197, TOLERANCE);

        let dp = OptionParameters::new(310.0, 250.0, 3.5, 0.05, 0.25);
        assert_approx_eq!(BlackScholesMerton::call(&dp).unwrap(), 113.4155, TOLERANCE);

        // standard reference values
        let dp = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
        assert_approx_eq!(BlackScholesMerton::call(&dp).unwrap(), 10.4506, TOLERANCE);
    }

    #[test]
    fn european_put() {
        let dp = OptionParameters::new(300.0, 250.0, 1.0, 0.03, 0.15);
        assert_approx_eq!(BlackScholesMerton::put(&dp).unwrap(), 1.4311, TOLERANCE);

        let dp = OptionParameters::new(310.0, 250.0, 3.5, 0.05, 0.25);
        assert_approx_eq!(BlackScholesMerton::put(&dp).unwrap(), 13.2797, TOLERANCE);

        let dp = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
        assert_approx_eq!(BlackScholesMerton::put(&dp).unwrap(), 5.5735, TOLERANCE);
    }

    #[test]
    fn european_put_call_parity() {
        let dp = OptionParameters::new(300.0, 250.0, 1.0, 0.03, 0.15);
        let put_call_parity =
            BlackScholesMerton::call(&dp).unwrap() - BlackScholesMerton::put(&dp).unwrap();
        assert_approx_eq!(
            put_call_parity,
            dp.asset_price - dp.strike * (-dp.rfr * dp.time_to_expiration).exp(),
            1e-9
        );
    }

    #[test]
    fn call_price_increases_with_vola() {
        let mut previous = 0.0;
        for vola in [0.05, 0.1, 0.2, 0.4, 0.8, 1.6] {
            let dp = OptionParameters::new(100.0, 110.0, 0.5, 0.02, vola);
            let price = BlackScholesMerton::call(&dp).unwrap();
            assert!(price > previous, "call not increasing at vola {}", vola);
            previous = price;
        }
    }

    #[test]
    fn short_expiry_converges_to_intrinsic_value() {
        let dp = OptionParameters::new(105.0, 100.0, 1e-9, 0.0, 0.2);
        assert_approx_eq!(BlackScholesMerton::call(&dp).unwrap(), 5.0, 1e-6);
        assert_approx_eq!(BlackScholesMerton::put(&dp).unwrap(), 0.0, 1e-6);

        let dp = OptionParameters::new(95.0, 100.0, 1e-9, 0.0, 0.2);
        assert_approx_eq!(BlackScholesMerton::call(&dp).unwrap(), 0.0, 1e-6);
        assert_approx_eq!(BlackScholesMerton::put(&dp).unwrap(), 5.0, 1e-6);
    }

    #[test]
    fn invalid_inputs_never_price() {
        let dp = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0);
        assert!(BlackScholesMerton::call(&dp).is_err());
        assert!(BlackScholesMerton::put(&dp).is_err());

        let dp = OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2);
        assert!(matches!(
            BlackScholesMerton::call(&dp),
            Err(PricingError::InvalidParameter {
                name: "time_to_expiration",
                ..
            })
        ));
    }
}
