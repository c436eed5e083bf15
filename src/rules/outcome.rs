//! Whole-game classification.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};
use crate::rules::super_board::{closed_sub_boards, is_won_by};

/// Overall state of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Legal moves remain and nobody has a meta-line.
    InProgress,
    /// Three sub-boards in a row for one player.
    Won(Player),
    /// Every sub-board is closed with no meta-line for either player.
    Drawn,
}

impl Outcome {
    /// Check whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(player) => write!(f, "won by {player}"),
            Outcome::Drawn => write!(f, "drawn"),
        }
    }
}

/// Classify the whole board.
///
/// A win is reported as soon as one player holds a meta-line, regardless
/// of how many sub-boards remain open. A draw is every sub-board closed
/// with no meta-line; since the wildcard obligation is the complement of
/// the closed set, this is exactly the no-legal-continuation condition.
///
/// Panics if both players hold a meta-line simultaneously. That state is
/// unreachable under checked play and means the board was corrupted.
#[must_use]
pub fn classify(board: &Board) -> Outcome {
    let x_won = is_won_by(board, Player::X);
    let o_won = is_won_by(board, Player::O);
    assert!(
        !(x_won && o_won),
        "both players hold a winning line on the super-board"
    );

    if x_won {
        Outcome::Won(Player::X)
    } else if o_won {
        Outcome::Won(Player::O)
    } else if closed_sub_boards(board).is_full() {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    }
}
