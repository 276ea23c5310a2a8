//! End-to-end scenarios for playing, jumping, and branching.

use strictly_timetravel::{
    evaluate, Game, GameStatus, MoveRejection, PlayOutcome, Player, Position, SortOrder,
};

fn positions(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|index| Position::from_index(*index).expect("index 0-8"))
        .collect()
}

#[test]
fn test_anti_diagonal_win() {
    // X: 4 2 6, O: 0 1
    let game = Game::replay(&positions(&[4, 0, 2, 1, 6])).expect("legal replay");
    let evaluation = evaluate(game.current_board());

    assert_eq!(evaluation.status(), GameStatus::Won(Player::X));
    assert_eq!(evaluation.winner(), Some(Player::X));
    assert_eq!(
        evaluation.winning_line(),
        Some([Position::TopRight, Position::Center, Position::BottomLeft])
    );
    assert_eq!(game.view().status_line(), "Winner: X");
}

#[test]
fn test_full_board_draw() {
    // X: 0 8 7 2 3, O: 4 1 6 5
    let game = Game::replay(&positions(&[0, 4, 8, 1, 7, 6, 2, 5, 3])).expect("legal replay");

    assert_eq!(game.evaluation().status(), GameStatus::Draw);
    assert_eq!(game.evaluation().winning_line(), None);
    assert_eq!(game.to_move(), None);
    assert_eq!(game.view().status_line(), "Draw");
}

#[test]
fn test_clicks_after_win_are_ignored() {
    let mut game = Game::replay(&positions(&[4, 0, 2, 1, 6])).expect("legal replay");
    let before = game.clone();

    assert_eq!(game.evaluation().status(), GameStatus::Won(Player::X));

    let outcome = game.play_move(Position::BottomCenter);
    assert_eq!(
        outcome,
        PlayOutcome::Ignored(MoveRejection::GameOver(GameStatus::Won(Player::X)))
    );
    assert_eq!(game, before);
}

#[test]
fn test_jump_back_and_branch_discards_later_moves() {
    let mut game = Game::replay(&positions(&[4, 0, 8])).expect("legal replay");
    assert_eq!(game.timeline().len(), 4);

    game.jump_to(1).expect("in range");
    assert_eq!(game.timeline().len(), 4);
    assert!(game.current_board().is_empty(Position::TopLeft));

    assert!(game.play_move(Position::TopLeft).is_played());
    // Game start, move 1, and the new move 2; old moves 2 and 3 are gone
    assert_eq!(game.timeline().len(), 3);
    assert_eq!(game.position(), 2);
    assert_eq!(
        game.timeline().played_positions(),
        vec![None, Some(Position::Center), Some(Position::TopLeft)]
    );
    assert!(game.current_board().is_empty(Position::BottomRight));
}

#[test]
fn test_jump_does_not_discard_until_next_play() {
    let mut game = Game::replay(&positions(&[4, 0, 8])).expect("legal replay");
    game.jump_to(0).expect("in range");
    game.jump_to(3).expect("in range");

    assert_eq!(game.timeline().len(), 4);
    assert_eq!(game.to_move(), Some(Player::O));
}

#[test]
fn test_replaying_from_jump_matches_original_line() {
    let original = Game::replay(&positions(&[4, 0, 8])).expect("legal replay");

    let mut rewound = original.clone();
    rewound.jump_to(2).expect("in range");
    rewound.play_move(Position::BottomRight);

    assert_eq!(rewound.current_board(), original.current_board());
    assert_eq!(rewound.timeline(), original.timeline());
}

#[test]
fn test_jump_to_past_win_allows_play_again() {
    let mut game = Game::replay(&positions(&[4, 0, 2, 1, 6])).expect("legal replay");
    game.jump_to(4).expect("in range");

    assert_eq!(game.evaluation().status(), GameStatus::InProgress);
    assert_eq!(game.to_move(), Some(Player::X));

    let outcome = game.play_move(Position::BottomCenter);
    assert_eq!(outcome.rejection(), None);
    assert_eq!(game.timeline().len(), 6);
    assert_eq!(game.evaluation().status(), GameStatus::InProgress);
}

#[test]
fn test_move_list_follows_sort_order() {
    let mut game = Game::with_sort(SortOrder::Descending);
    game.play_move(Position::TopLeft);
    game.play_move(Position::BottomRight);

    assert_eq!(
        game.view().move_labels(),
        vec![
            "You are at move #2".to_string(),
            "Go to move #1, (1, 1)".to_string(),
            "Go to game start".to_string(),
        ]
    );

    game.toggle_sort();
    game.jump_to(1).expect("in range");
    assert_eq!(
        game.view().move_labels(),
        vec![
            "Go to game start".to_string(),
            "You are at move #1".to_string(),
            "Go to move #2, (3, 3)".to_string(),
        ]
    );
}
