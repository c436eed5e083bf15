//! Core board vocabulary: players, indices, position sets, the win-line
//! predicate, and the packed board itself.
//!
//! Everything here is pure data with O(1) operations; the rules layer
//! derives every judgement from these primitives on demand.

pub mod board;
pub mod grid;
pub mod index;
pub mod lines;
pub mod player;

pub use board::Board;
pub use grid::GridSet;
pub use index::{CellId, SubBoardId};
pub use lines::{has_line, LINES};
pub use player::Player;
