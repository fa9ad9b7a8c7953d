//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: hosted models backing responders, moderator and judge
//! - [`string`]: text helpers for previews and log lines

pub mod model;
pub mod string;
