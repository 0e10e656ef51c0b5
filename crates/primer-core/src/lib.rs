//! Primer Core - Shared foundations for primitive value types
//!
//! This crate defines what every element and sequence type builds on:
//! - Grammar fragments and anchored matchers for source text
//! - Float locking and canonical float formatting
//! - Aspect traits (continuous, discrete, sequential, ...)
//! - 1-based ordinal indexing
//! - Escape codec shared by quoted literals
//! - Source layout configuration
//! - Error types

pub mod aspect;
pub mod error;
pub mod escape;
pub mod float;
pub mod grammar;
pub mod index;
pub mod layout;

pub use aspect::*;
pub use error::*;
pub use escape::*;
pub use float::*;
pub use grammar::*;
pub use index::*;
pub use layout::*;
