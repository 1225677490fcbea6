pub mod defaults;
pub mod errors;

pub use errors::ConfigError;
