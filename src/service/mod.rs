// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the binding engine.
//!
//! The [`Builder`] merges flat key/value sources, runs the optional value
//! pre-processor, and binds the result onto [`Record`](crate::domain::Record)
//! types through the population engine.

pub mod builder;
pub mod normalize;
mod populate;

// Re-export commonly used types
pub use builder::{Builder, DEFAULT_SLICE_DELIMITER};
pub use normalize::lines_to_map;
