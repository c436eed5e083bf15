//! Meta-level judgements over the nine sub-boards.
//!
//! The 3×3 arrangement of sub-board outcomes is evaluated with the same
//! win-line predicate as the sub-boards themselves. All queries recompute
//! from the board; there is no cached meta-state to go stale.

use crate::core::{has_line, Board, GridSet, Player, SubBoardId};
use crate::rules::sub_board::{self, SubBoardStatus};

/// The sub-boards won by `player`.
#[must_use]
pub fn meta_occupancy(board: &Board, player: Player) -> GridSet {
    let mut set = GridSet::EMPTY;
    for sub in SubBoardId::all() {
        if sub_board::status(board, sub) == SubBoardStatus::Won(player) {
            set.insert(sub.0);
        }
    }
    set
}

/// Check whether `player` holds three sub-boards in a row.
#[must_use]
pub fn is_won_by(board: &Board, player: Player) -> bool {
    has_line(meta_occupancy(board, player))
}

/// The sub-boards that accept no further moves: won by either player or
/// drawn-full. These are never legal targets, whatever the obligation.
#[must_use]
pub fn closed_sub_boards(board: &Board) -> GridSet {
    let mut set = GridSet::EMPTY;
    for sub in SubBoardId::all() {
        if sub_board::status(board, sub).is_closed() {
            set.insert(sub.0);
        }
    }
    set
}
