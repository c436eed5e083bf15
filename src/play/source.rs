//! Move selection as an injected capability.
//!
//! The turn loop never decides moves itself; it asks a [`MoveSource`].
//! A source sees the board and the current obligation and proposes the
//! next move, so random play, scripted replays, and interactive input all
//! plug into the same driver.

use std::collections::VecDeque;

use crate::core::Board;
use crate::rules::{legal_moves, Move, Obligation};

use super::rng::PlayoutRng;

/// Supplier of the next move for whichever player is to act.
///
/// Implementations are expected to propose moves inside `obligation`;
/// `None` means the source has nothing to offer (an exhausted script, or
/// no legal move remaining).
pub trait MoveSource {
    fn next_move(&mut self, board: &Board, obligation: Obligation) -> Option<Move>;
}

/// Uniformly random legal play from a seeded RNG.
///
/// The same seed reproduces the same game against the same opponent
/// moves.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: PlayoutRng,
}

impl RandomSource {
    /// Create a random source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: PlayoutRng::new(seed),
        }
    }

    /// Create a random source from an existing RNG branch.
    #[must_use]
    pub fn from_rng(rng: PlayoutRng) -> Self {
        Self { rng }
    }
}

impl MoveSource for RandomSource {
    fn next_move(&mut self, board: &Board, obligation: Obligation) -> Option<Move> {
        let moves = legal_moves(board, obligation);
        self.rng.choose(&moves).copied()
    }
}

/// Replays a fixed move sequence, then runs dry.
///
/// The scripted analog of interactive input; handy for driving exact
/// positions in tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Move>,
}

impl ScriptedSource {
    /// Create a source that will propose `moves` in order.
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            queue: moves.into_iter().collect(),
        }
    }

    /// Number of moves left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl MoveSource for ScriptedSource {
    fn next_move(&mut self, _board: &Board, _obligation: Obligation) -> Option<Move> {
        self.queue.pop_front()
    }
}
