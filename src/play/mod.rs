//! Playing games on top of the rules layer.
//!
//! The rules layer validates and classifies; this module supplies the
//! collaborators that drive actual games: a seeded RNG, pluggable move
//! sources, the turn loop, and text rendering. Everything here consumes
//! the core through its public operations only.

pub mod driver;
pub mod render;
pub mod rng;
pub mod source;

pub use driver::Match;
pub use render::render;
pub use rng::PlayoutRng;
pub use source::{MoveSource, RandomSource, ScriptedSource};
