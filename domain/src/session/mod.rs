//! Chat message types exchanged with a model backend.
//!
//! - [`entities::Message`]: one prior message in a context window
//! - [`entities::Role`]: who authored it, from the model's point of view

pub mod entities;
