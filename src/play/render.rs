//! Text rendering of a board.
//!
//! Presentation only: reads the board through the public query interface
//! and produces the 9×9 grid with sub-board separators.

use crate::core::{Board, CellId, SubBoardId};

/// Render the board as nine rows of nine marks, `.` for vacant cells.
///
/// ```text
/// x..|...|...
/// ...|.o.|...
/// ...|...|...
/// ---+---+---
/// ...|...|...
/// ...|.x.|...
/// ...|...|...
/// ---+---+---
/// ...|...|...
/// ...|...|...
/// ...|...|..o
/// ```
#[must_use]
pub fn render(board: &Board) -> String {
    let mut out = String::with_capacity(12 * 10);
    for row in 0..9u8 {
        if row % 3 == 0 && row > 0 {
            out.push_str("---+---+---\n");
        }
        for col in 0..9u8 {
            if col % 3 == 0 && col > 0 {
                out.push('|');
            }
            let sub = SubBoardId::new(3 * (row / 3) + col / 3);
            let cell = CellId::new(3 * (row % 3) + col % 3);
            out.push(match board.get(sub, cell) {
                Some(player) => player.glyph(),
                None => '.',
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_empty_board() {
        let text = render(&Board::new());
        let expected = "\
...|...|...
...|...|...
...|...|...
---+---+---
...|...|...
...|...|...
...|...|...
---+---+---
...|...|...
...|...|...
...|...|...
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_marks_land_in_their_sub_boards() {
        let mut board = Board::new();
        // Top-left cell of the top-left sub-board, center of the center
        // sub-board, bottom-right of the bottom-right sub-board.
        board.set(SubBoardId::new(0), CellId::new(0), Player::X);
        board.set(SubBoardId::new(4), CellId::new(4), Player::O);
        board.set(SubBoardId::new(8), CellId::new(8), Player::X);

        let rendered = render(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "x..|...|...");
        assert_eq!(lines[5], "...|.o.|...");
        assert_eq!(lines[10], "...|...|..x");
    }

    #[test]
    fn test_row_within_sub_board_maps_across_columns() {
        let mut board = Board::new();
        // Cells 3,4,5 are the middle row of sub-board 1.
        for cell in [3, 4, 5] {
            board.set(SubBoardId::new(1), CellId::new(cell), Player::O);
        }

        let rendered = render(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "...|ooo|...");
    }
}
