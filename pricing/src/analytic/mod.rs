mod black_scholes;
mod greeks;
mod implied_volatility;

pub use black_scholes::{BlackScholesMerton, OptionPrice};
pub use greeks::Greeks;
pub use implied_volatility::{implied_volatility, ImpliedVolatility, SolverConfig};
