//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod assign_roles;
pub mod judge_debate;
pub mod run_debate;

#[cfg(test)]
pub(crate) mod test_support;
