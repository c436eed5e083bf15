//! Move validation, application, and the obligation rule.
//!
//! [`apply`] is the only mutation path with legality checks. It validates
//! in a fixed order (closed sub-board, then occupied cell), writes the
//! mark, and derives where the opponent may answer:
//!
//! - the cell just played names the natural target sub-board;
//! - if that sub-board is closed *after* the move (the move itself may
//!   have closed it), the obligation widens to every open sub-board;
//! - otherwise the obligation is exactly the natural target.
//!
//! Rejected moves mutate nothing. Obligation membership is the caller's
//! restriction to honor when choosing the next move; `apply` itself only
//! rejects closed targets and occupied cells.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::instrument;

use crate::core::{Board, CellId, GridSet, Player, SubBoardId};
use crate::rules::super_board::closed_sub_boards;

/// One move: a cell within a target sub-board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub sub_board: SubBoardId,
    pub cell: CellId,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(sub_board: SubBoardId, cell: CellId) -> Self {
        Self { sub_board, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.sub_board, self.cell)
    }
}

/// Why a move was rejected. Both conditions are recoverable: pick a
/// different target and retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// The target sub-board is already won or drawn-full.
    SubBoardClosed,
    /// The target cell already holds a mark.
    CellOccupied,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::SubBoardClosed => write!(f, "target sub-board is closed"),
            MoveError::CellOccupied => write!(f, "target cell is occupied"),
        }
    }
}

impl std::error::Error for MoveError {}

/// The sub-boards the next mover may target.
///
/// Empty only when every sub-board is closed, i.e. the game just ended;
/// [`crate::rules::classify`] reports that as a terminal outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation(GridSet);

impl Obligation {
    /// The opening obligation: any sub-board may be targeted.
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self(GridSet::ALL)
    }

    /// Build an obligation from a set of sub-board positions.
    #[must_use]
    pub const fn from_set(set: GridSet) -> Self {
        Self(set)
    }

    /// The permitted sub-board positions as a set.
    #[must_use]
    pub const fn as_set(self) -> GridSet {
        self.0
    }

    /// Check whether `sub_board` is a permitted target.
    #[must_use]
    pub fn contains(self, sub_board: SubBoardId) -> bool {
        self.0.contains(sub_board.0)
    }

    /// Number of permitted target sub-boards.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.len()
    }

    /// Check whether no target is permitted (no legal continuation).
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the permitted target sub-boards.
    pub fn targets(self) -> impl Iterator<Item = SubBoardId> {
        self.0.iter().map(SubBoardId)
    }
}

impl std::fmt::Display for Obligation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Obligation({})", self.0)
    }
}

/// Validate and apply one move for `mover`.
///
/// Checks, in order:
/// 1. the target sub-board must not be closed on the pre-move board;
/// 2. the target cell must be vacant.
///
/// On success the mark is written and the obligation for the opponent is
/// derived from the *post-move* closed set, so a sub-board closed by this
/// very move (completed line or last cell filled) is already accounted
/// for. On rejection the board is untouched.
///
/// ```
/// use rust_uttt::{apply, Board, CellId, Move, Player, SubBoardId};
///
/// let mut board = Board::new();
/// let mv = Move::new(SubBoardId::new(0), CellId::new(4));
/// let obligation = apply(&mut board, mv, Player::X).unwrap();
/// assert!(obligation.contains(SubBoardId::new(4)));
/// assert_eq!(obligation.len(), 1);
/// ```
#[instrument(level = "trace", skip(board))]
pub fn apply(board: &mut Board, mv: Move, mover: Player) -> Result<Obligation, MoveError> {
    if closed_sub_boards(board).contains(mv.sub_board.0) {
        return Err(MoveError::SubBoardClosed);
    }
    if !board.is_vacant(mv.sub_board, mv.cell) {
        return Err(MoveError::CellOccupied);
    }

    board.set(mv.sub_board, mv.cell, mover);

    // The move may have closed its own sub-board; the obligation must
    // reflect the board the opponent will actually face.
    let closed = closed_sub_boards(board);
    let natural = mv.cell.sub_board();
    let obligation = if closed.contains(natural.0) {
        Obligation::from_set(closed.complement())
    } else {
        Obligation::from_set(GridSet::single(natural.0))
    };

    tracing::trace!(%mv, %mover, %obligation, "move applied");
    Ok(obligation)
}

/// Every legal move under `obligation`: a vacant cell in an open,
/// permitted sub-board.
///
/// Empty exactly when the game has no legal continuation from this
/// obligation.
#[must_use]
pub fn legal_moves(board: &Board, obligation: Obligation) -> SmallVec<[Move; 32]> {
    let closed = closed_sub_boards(board);
    let mut moves = SmallVec::new();
    for sub in obligation.targets() {
        if closed.contains(sub.0) {
            continue;
        }
        for cell in CellId::all() {
            if board.is_vacant(sub, cell) {
                moves.push(Move::new(sub, cell));
            }
        }
    }
    moves
}
