//! # folio-typing
//!
//! Timer-driven text animation for the hero heading and section titles.
//!
//! - [`effect::TypingEffect`]: type, pause, delete, advance. Optional
//!   scramble of the unrevealed suffix and natural per-character pacing.
//! - [`driver::TypingDriver`]: runs an effect on tokio timers and hands back
//!   a cancellable [`driver::TypingHandle`].
//! - [`variants`]: natural-speed delays and the matrix reveal frame.

pub mod driver;
pub mod effect;
pub mod entropy;
pub mod variants;

mod error;

pub use driver::{TextTarget, TypingDriver, TypingHandle};
pub use effect::{Frame, SCRAMBLE_GLYPHS, TypingEffect, TypingOptions, TypingState};
pub use entropy::{Entropy, OsEntropy, SequenceEntropy};
pub use error::TypingError;
