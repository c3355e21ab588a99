pub mod analytic;
pub mod common;
pub mod error;
