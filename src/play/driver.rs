//! The turn loop.
//!
//! [`Match`] owns the board, the side to move, and the current obligation,
//! and drives turns through the rules layer. The engine itself holds no
//! turn state; alternation and obligation tracking live here, in the
//! collaborator, exactly like the loop the engine was designed for.

use tracing::debug;

use crate::core::{Board, Player};
use crate::rules::{apply, classify, legal_moves, Move, MoveError, Obligation, Outcome};

use super::source::MoveSource;

/// One game in progress: board, side to move, current obligation.
#[derive(Clone, Debug)]
pub struct Match {
    board: Board,
    to_move: Player,
    obligation: Obligation,
    moves_played: u32,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// Start a match with `X` to move and no target restriction.
    #[must_use]
    pub fn new() -> Self {
        Self::with_starting_player(Player::X)
    }

    /// Start a match with a chosen first mover.
    #[must_use]
    pub fn with_starting_player(player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: player,
            obligation: Obligation::unrestricted(),
            moves_played: 0,
        }
    }

    /// The board as it stands.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The sub-boards the player to move may target.
    #[must_use]
    pub fn obligation(&self) -> Obligation {
        self.obligation
    }

    /// Moves applied so far.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Classify the current position.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        classify(&self.board)
    }

    /// Every legal move for the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> smallvec::SmallVec<[Move; 32]> {
        legal_moves(&self.board, self.obligation)
    }

    /// Apply one move for the side to move, then flip the turn.
    ///
    /// Callers pick targets from [`Match::obligation`]; the engine rejects
    /// closed sub-boards and occupied cells, and a rejected move changes
    /// nothing: the same player is still to move.
    pub fn play(&mut self, mv: Move) -> Result<Obligation, MoveError> {
        debug_assert!(
            self.obligation.contains(mv.sub_board),
            "{mv} is outside the current obligation {}",
            self.obligation
        );

        let obligation = apply(&mut self.board, mv, self.to_move)?;
        self.obligation = obligation;
        self.to_move = self.to_move.opponent();
        self.moves_played += 1;
        Ok(obligation)
    }

    /// Drive turns from `source` until the game ends.
    ///
    /// Rejected proposals are skipped and the source asked again, as are
    /// turns where the source proposes nothing while moves remain. A
    /// source that keeps declining leaves the game `InProgress`, which is
    /// returned as-is.
    pub fn run(&mut self, source: &mut dyn MoveSource) -> Outcome {
        loop {
            let outcome = self.outcome();
            if outcome.is_terminal() {
                debug!(%outcome, moves = self.moves_played, "game over");
                return outcome;
            }

            let Some(mv) = source.next_move(&self.board, self.obligation) else {
                return outcome;
            };

            if let Err(err) = self.play(mv) {
                debug!(%mv, %err, "move rejected");
            }
        }
    }
}
