//! Progress reporting for debate execution

pub mod reporter;
