//! Structured-output extraction from model responses.

pub mod json;

pub use json::{ExtractionError, JsonObject, extract_json};
