use crate::error::PricingError;

/// Market and contract inputs of a European option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate, continuously compounded
    pub rfr: f64,
    /// the annualized standard deviation of the asset's returns
    pub vola: f64,
}

impl OptionParameters {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// All five inputs must lie in their domain before a price is computed.
    pub fn validate(&self) -> Result<(), PricingError> {
        self.validate_contract()?;
        require_positive("vola", self.vola)
    }

    /// The four inputs that stay fixed during an implied volatility search.
    /// `vola` is the solver's working variable and not checked here.
    pub fn validate_contract(&self) -> Result<(), PricingError> {
        require_positive("asset_price", self.asset_price)?;
        require_positive("strike", self.strike)?;
        require_positive("time_to_expiration", self.time_to_expiration)?;
        if !self.rfr.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rfr",
                value: self.rfr,
            });
        }
        Ok(())
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PricingError::InvalidParameter { name, value });
    }
    Ok(())
}
