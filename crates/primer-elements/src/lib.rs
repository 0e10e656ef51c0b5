//! Primer Elements - Scalar primitive values
//!
//! Each element wraps a single intrinsic value and has a canonical source
//! text that parses back to the same value:
//! - Numbers on the Riemann sphere (`3+4i`, `5e^~1i`, `∞`)
//! - Angles (`~π`), booleans, glyphs (`'a'`)
//! - Percentages (`25%`) and probabilities (`p0.5`)
//! - Symbols (`$name`) and resources (`<https://...>`)
//! - Durations (`~PT1M`) and moments (`<2009-04-01T12:34>`)

pub mod angle;
pub mod boolean;
pub mod duration;
pub mod glyph;
pub mod moment;
pub mod number;
pub mod percentage;
pub mod probability;
pub mod resource;
pub mod symbol;

pub use angle::*;
pub use boolean::*;
pub use duration::*;
pub use glyph::*;
pub use moment::*;
pub use number::*;
pub use percentage::*;
pub use probability::*;
pub use resource::*;
pub use symbol::*;
