//! Player identification for a two-player match.
//!
//! `Player` is the mark a mover places on the board. Cell contents are
//! `Option<Player>`: `None` for a vacant cell, `Some` for an occupied one,
//! so no invalid occupant is representable.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `X` moves first by convention; the engine itself never assumes a move
/// order and takes the mover explicitly on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the other player.
    ///
    /// ```
    /// use rust_uttt::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark used when rendering a board.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}
