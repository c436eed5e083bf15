//! # rust-uttt
//!
//! An Ultimate Tic-Tac-Toe rules engine for RL/MCTS training.
//!
//! Ultimate Tic-Tac-Toe is a 3×3 grid of 3×3 tic-tac-toe sub-boards. The
//! cell you play in a sub-board names the sub-board your opponent must
//! answer in; win three sub-boards in a row to win the game.
//!
//! ## Design Principles
//!
//! 1. **Derived, never cached**: every judgement (sub-board status, the
//!    closed set, the overall outcome) is recomputed from the board on
//!    demand, so state can never go stale across mutations.
//!
//! 2. **One win predicate, two levels**: the three-in-a-row test is a
//!    pure function over nine-position sets, applied unchanged to the
//!    cells of a sub-board and to the sub-boards of the whole game.
//!
//! 3. **Caller-owned state**: the board is a 24-byte `Copy` value owned
//!    by the caller. The engine takes it by reference, applies one atomic
//!    move, and retains nothing.
//!
//! 4. **Injected move selection**: the turn loop asks a `MoveSource` for
//!    moves, so seeded random play, scripted replays, and interactive
//!    input share one driver and playouts are reproducible.
//!
//! ## Modules
//!
//! - `core`: players, grid indices, nine-bit position sets, the win-line
//!   table, and the bit-packed board
//! - `rules`: sub-board and super-board judgements, move application with
//!   the obligation rule, game classification
//! - `play`: move sources, the turn loop, rendering

pub mod core;
pub mod play;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{has_line, Board, CellId, GridSet, Player, SubBoardId, LINES};

pub use crate::rules::{
    apply, classify, closed_sub_boards, legal_moves, status, Move, MoveError, Obligation, Outcome,
    SubBoardStatus,
};

pub use crate::play::{Match, MoveSource, PlayoutRng, RandomSource, ScriptedSource};
