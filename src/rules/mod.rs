//! The rules layer: per-sub-board and meta-level judgements, move
//! application with the obligation rule, and whole-game classification.
//!
//! Everything here is a pure function of the board it receives. The only
//! mutation is [`apply`], which is atomic: a rejected move leaves the
//! board untouched.

pub mod engine;
pub mod outcome;
pub mod sub_board;
pub mod super_board;

pub use engine::{apply, legal_moves, Move, MoveError, Obligation};
pub use outcome::{classify, Outcome};
pub use sub_board::{status, SubBoardStatus};
pub use super_board::closed_sub_boards;
