//! Per-sub-board judgements.
//!
//! A sub-board is a self-contained tic-tac-toe game. Its status is derived
//! from the nine cells on every call. Nothing is cached, so a status can
//! never go stale across mutations.

use serde::{Deserialize, Serialize};

use crate::core::{has_line, Board, CellId, GridSet, Player, SubBoardId};

/// Outcome of a single sub-board.
///
/// Once a sub-board leaves `Open` it never returns: marks are never
/// removed, so a win or a full grid is permanent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubBoardStatus {
    /// Still accepting moves.
    Open,
    /// Three in a row for one player.
    Won(Player),
    /// All nine cells filled with no winner.
    Drawn,
}

impl SubBoardStatus {
    /// Check whether the sub-board accepts no further moves.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        !matches!(self, SubBoardStatus::Open)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            SubBoardStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// The cells of `sub_board` occupied by `player`.
#[must_use]
pub fn occupancy(board: &Board, sub_board: SubBoardId, player: Player) -> GridSet {
    let mut set = GridSet::EMPTY;
    for cell in CellId::all() {
        if board.get(sub_board, cell) == Some(player) {
            set.insert(cell.0);
        }
    }
    set
}

/// The cells of `sub_board` occupied by either player.
#[must_use]
pub fn filled(board: &Board, sub_board: SubBoardId) -> GridSet {
    let mut set = GridSet::EMPTY;
    for cell in CellId::all() {
        if board.get(sub_board, cell).is_some() {
            set.insert(cell.0);
        }
    }
    set
}

/// Check whether `player` has three in a row on `sub_board`.
#[must_use]
pub fn is_won_by(board: &Board, sub_board: SubBoardId, player: Player) -> bool {
    has_line(occupancy(board, sub_board, player))
}

/// Check whether every cell of `sub_board` is occupied.
#[must_use]
pub fn is_full(board: &Board, sub_board: SubBoardId) -> bool {
    filled(board, sub_board).is_full()
}

/// Classify one sub-board.
///
/// A win is reported even when the grid is also full: `Won` takes
/// precedence over `Drawn`.
#[must_use]
pub fn status(board: &Board, sub_board: SubBoardId) -> SubBoardStatus {
    if is_won_by(board, sub_board, Player::X) {
        SubBoardStatus::Won(Player::X)
    } else if is_won_by(board, sub_board, Player::O) {
        SubBoardStatus::Won(Player::O)
    } else if is_full(board, sub_board) {
        SubBoardStatus::Drawn
    } else {
        SubBoardStatus::Open
    }
}
