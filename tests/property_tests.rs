//! Property-based checks over the win predicate, the position sets, and
//! random legal play.

use proptest::prelude::*;

use rust_uttt::{
    apply, classify, closed_sub_boards, has_line, GridSet, Match, MoveSource, Outcome,
    RandomSource,
};

/// The eight lines written out independently of the production table.
const TRIPLES: [(u8, u8, u8); 8] = [
    (0, 1, 2),
    (3, 4, 5),
    (6, 7, 8),
    (0, 3, 6),
    (1, 4, 7),
    (2, 5, 8),
    (0, 4, 8),
    (2, 4, 6),
];

proptest! {
    /// `has_line` agrees with a direct bit test against the eight
    /// three-in-a-row triples, for every possible nine-bit set.
    #[test]
    fn line_predicate_matches_reference(bits in 0u16..512) {
        let reference = TRIPLES.iter().any(|&(a, b, c)| {
            (bits >> a) & 1 == 1 && (bits >> b) & 1 == 1 && (bits >> c) & 1 == 1
        });
        prop_assert_eq!(has_line(GridSet::from_bits(bits)), reference);
    }

    /// Complement is an involution and partitions the nine positions.
    #[test]
    fn complement_partitions_the_grid(bits in 0u16..512) {
        let set = GridSet::from_bits(bits);
        let comp = set.complement();

        prop_assert_eq!(comp.complement(), set);
        prop_assert_eq!(set.len() + comp.len(), 9);
        for i in 0..9 {
            prop_assert_ne!(set.contains(i), comp.contains(i));
        }
    }

    /// Adding a position never removes one, and membership reads back.
    #[test]
    fn insert_is_monotone(bits in 0u16..512, index in 0u8..9) {
        let set = GridSet::from_bits(bits);
        let grown = set.with(index);

        prop_assert!(grown.contains(index));
        prop_assert!(grown.contains_all(set));
        prop_assert!(grown.len() <= set.len() + 1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any seeded game of legal random play terminates within the board
    /// size, with the obligation inside the open set after every move
    /// and classification stable between moves.
    #[test]
    fn random_play_upholds_engine_invariants(seed in any::<u64>()) {
        let mut game = Match::new();
        let mut source = RandomSource::new(seed);
        let mut moves = 0u32;

        while game.outcome() == Outcome::InProgress {
            prop_assert!(moves < 81);
            let mv = source
                .next_move(game.board(), game.obligation())
                .expect("legal move exists while in progress");

            let mover = game.to_move();
            let before_closed = closed_sub_boards(game.board());
            let obligation = game.play(mv).unwrap();
            moves += 1;

            let after_closed = closed_sub_boards(game.board());
            prop_assert!(after_closed.contains_all(before_closed));
            prop_assert!(after_closed.complement().contains_all(obligation.as_set()));
            prop_assert_eq!(game.board().get(mv.sub_board, mv.cell), Some(mover));

            // Classification is a pure function of the board.
            prop_assert_eq!(classify(game.board()), classify(game.board()));
        }

        prop_assert!(game.outcome().is_terminal());
        if game.outcome() == Outcome::Drawn {
            prop_assert!(closed_sub_boards(game.board()).is_full());
        }
    }

    /// Replaying a full game move-for-move through a fresh engine call
    /// sequence produces the identical board: `apply` is deterministic.
    #[test]
    fn apply_is_deterministic(seed in any::<u64>()) {
        let mut game = Match::new();
        let mut source = RandomSource::new(seed);
        let mut log = Vec::new();

        while game.outcome() == Outcome::InProgress {
            let mv = source
                .next_move(game.board(), game.obligation())
                .expect("legal move exists while in progress");
            log.push((mv, game.to_move()));
            game.play(mv).unwrap();
        }

        let mut replay = rust_uttt::Board::new();
        for (mv, mover) in log {
            apply(&mut replay, mv, mover).unwrap();
        }
        prop_assert_eq!(replay, *game.board());
    }
}
