//! Primer Sequences - Ordered primitive values
//!
//! Every sequence is an immutable run of values with 1-based (and
//! negative, from the end) indexing and a canonical delimited source text:
//! - Binary strings (`'>` base64 `<'`) and bytecode (`:xxxx` instructions)
//! - Names (`/folder/folder`) and identifiers
//! - Narratives (`">` lines `<"`), quotes and patterns
//! - Tags (`#` base32) and versions (`v1.2.3`)

pub mod binary;
pub mod bytecode;
pub mod identifier;
pub mod name;
pub mod narrative;
pub mod pattern;
pub mod quote;
pub mod tag;
pub mod version;

pub use binary::*;
pub use bytecode::*;
pub use identifier::*;
pub use name::*;
pub use narrative::*;
pub use pattern::*;
pub use quote::*;
pub use tag::*;
pub use version::*;
