//! Bit-packed board state.
//!
//! The full game state is 81 cells at 2 bits each, packed into three
//! `u64` words. Each word carries three sub-boards (18 bits per
//! sub-board), so every cell is reachable with one shift and mask:
//!
//! - word: `sub_board / 3`
//! - shift: `2 * ((sub_board % 3) * 9 + cell)`
//!
//! The packing is an internal detail; the public surface is O(1)
//! `get`/`set` by (sub-board, cell). The board is a plain value the caller
//! owns; every rules operation takes it by reference and keeps nothing.

use serde::{Deserialize, Serialize};

use super::index::{CellId, SubBoardId};
use super::player::Player;

const VACANT: u64 = 0b00;
const CELL_MASK: u64 = 0b11;

/// Encode an occupant into its 2-bit cell value.
const fn encode(occupant: Option<Player>) -> u64 {
    match occupant {
        None => VACANT,
        Some(Player::X) => 0b01,
        Some(Player::O) => 0b10,
    }
}

/// Decode a 2-bit cell value. The pattern `0b11` is never written.
fn decode(bits: u64) -> Option<Player> {
    match bits {
        0b00 => None,
        0b01 => Some(Player::X),
        0b10 => Some(Player::O),
        _ => unreachable!("invalid cell encoding {bits:#b}"),
    }
}

/// The complete game state: 81 cells, 2 bits each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    words: [u64; 3],
}

impl Board {
    /// Create an empty board, all cells vacant.
    #[must_use]
    pub const fn new() -> Self {
        Self { words: [0; 3] }
    }

    const fn locate(sub_board: SubBoardId, cell: CellId) -> (usize, u32) {
        let word = sub_board.index() / 3;
        let shift = 2 * ((sub_board.index() % 3) * 9 + cell.index()) as u32;
        (word, shift)
    }

    /// Get the occupant of a cell.
    #[must_use]
    pub fn get(&self, sub_board: SubBoardId, cell: CellId) -> Option<Player> {
        let (word, shift) = Self::locate(sub_board, cell);
        decode((self.words[word] >> shift) & CELL_MASK)
    }

    /// Check whether a cell is vacant.
    #[must_use]
    pub fn is_vacant(&self, sub_board: SubBoardId, cell: CellId) -> bool {
        self.get(sub_board, cell).is_none()
    }

    /// Write a mark into a cell.
    ///
    /// Performs no legality checks; [`crate::rules::apply`] is the checked
    /// path and never overwrites an occupied cell. Direct writes are for
    /// setting up positions.
    pub fn set(&mut self, sub_board: SubBoardId, cell: CellId, player: Player) {
        debug_assert!(
            self.is_vacant(sub_board, cell),
            "cell {cell} of {sub_board} is already occupied"
        );
        let (word, shift) = Self::locate(sub_board, cell);
        self.words[word] &= !(CELL_MASK << shift);
        self.words[word] |= encode(Some(player)) << shift;
    }

    /// Check whether the board has no marks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words == [0; 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_vacant() {
        let board = Board::new();
        assert!(board.is_empty());
        for sub in SubBoardId::all() {
            for cell in CellId::all() {
                assert_eq!(board.get(sub, cell), None);
            }
        }
    }

    #[test]
    fn test_set_then_get_every_position() {
        for sub in SubBoardId::all() {
            for cell in CellId::all() {
                let mut board = Board::new();
                board.set(sub, cell, Player::X);
                assert_eq!(board.get(sub, cell), Some(Player::X));
            }
        }
    }

    #[test]
    fn test_set_does_not_disturb_neighbors() {
        let mut board = Board::new();
        board.set(SubBoardId::new(4), CellId::new(4), Player::O);

        let mut occupied = 0;
        for sub in SubBoardId::all() {
            for cell in CellId::all() {
                if board.get(sub, cell).is_some() {
                    occupied += 1;
                }
            }
        }
        assert_eq!(occupied, 1);
    }

    #[test]
    fn test_both_marks_coexist_in_one_word() {
        // Sub-boards 0..=2 share the first word.
        let mut board = Board::new();
        board.set(SubBoardId::new(0), CellId::new(0), Player::X);
        board.set(SubBoardId::new(1), CellId::new(0), Player::O);
        board.set(SubBoardId::new(2), CellId::new(8), Player::X);

        assert_eq!(board.get(SubBoardId::new(0), CellId::new(0)), Some(Player::X));
        assert_eq!(board.get(SubBoardId::new(1), CellId::new(0)), Some(Player::O));
        assert_eq!(board.get(SubBoardId::new(2), CellId::new(8)), Some(Player::X));
    }

    #[test]
    fn test_is_vacant() {
        let mut board = Board::new();
        assert!(board.is_vacant(SubBoardId::new(3), CellId::new(5)));
        board.set(SubBoardId::new(3), CellId::new(5), Player::X);
        assert!(!board.is_vacant(SubBoardId::new(3), CellId::new(5)));
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new();
        board.set(SubBoardId::new(8), CellId::new(8), Player::O);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
