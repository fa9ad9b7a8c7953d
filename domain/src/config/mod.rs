//! Domain-level configuration value objects

pub mod output_format;
pub mod validation;

pub use output_format::OutputFormat;
