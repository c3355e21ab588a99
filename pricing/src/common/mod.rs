pub mod models;

pub use models::OptionParameters;
