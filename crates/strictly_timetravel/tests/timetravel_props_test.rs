//! Property tests for evaluation purity and history invariants.

use proptest::prelude::*;
use strictly_timetravel::invariants::{InvariantSet, TimelineInvariants};
use strictly_timetravel::{evaluate, Board, Game, GameStatus, Player, Position, Square};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(Board::from_squares)
}

fn position() -> impl Strategy<Value = Position> {
    (0usize..9).prop_map(|index| Position::ALL[index])
}

/// An operation an adapter can send: play a cell or jump somewhere.
#[derive(Debug, Clone)]
enum Op {
    Play(Position),
    Jump(usize),
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            position().prop_map(Op::Play),
            (0usize..10).prop_map(Op::Jump),
        ],
        0..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// evaluate is deterministic and does not touch its input
    #[test]
    fn evaluate_is_pure(board in board()) {
        let copy = board;
        let first = evaluate(&board);
        let second = evaluate(&board);
        prop_assert_eq!(first, second);
        prop_assert_eq!(board, copy);
    }

    /// A winning line is always three equal marks of the winner
    #[test]
    fn winning_line_matches_winner(board in board()) {
        let evaluation = evaluate(&board);
        match (evaluation.status(), evaluation.winning_line()) {
            (GameStatus::Won(player), Some(line)) => {
                for position in line {
                    prop_assert_eq!(board.get(position), Square::Occupied(player));
                }
            }
            (GameStatus::Draw, None) => prop_assert!(board.is_full()),
            (GameStatus::InProgress, None) => prop_assert!(!board.is_full()),
            (status, line) => prop_assert!(false, "inconsistent {:?} / {:?}", status, line),
        }
    }

    /// Any sequence of adapter events keeps the timeline consistent
    #[test]
    fn operations_preserve_invariants(ops in ops()) {
        let mut game = Game::new();
        for op in ops {
            let before = game.clone();
            match op {
                Op::Play(position) => {
                    if game.play_move(position).is_played() {
                        prop_assert_eq!(game.timeline().len(), game.position() + 1);
                        prop_assert_eq!(game.position(), before.position() + 1);
                        prop_assert_eq!(
                            &game.timeline().records()[..=before.position()],
                            &before.timeline().records()[..=before.position()]
                        );
                    } else {
                        prop_assert_eq!(&game, &before);
                    }
                }
                Op::Jump(target) => {
                    let result = game.jump_to(target);
                    prop_assert_eq!(game.timeline().len(), before.timeline().len());
                    if result.is_err() {
                        prop_assert_eq!(&game, &before);
                    } else {
                        prop_assert_eq!(game.position(), target);
                    }
                }
            }
            prop_assert!(TimelineInvariants::check_all(&game).is_ok());
            prop_assert_eq!(*game.evaluation(), evaluate(game.current_board()));
        }
    }
}
