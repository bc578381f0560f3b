use rankmax::{
    Error, InvalidActionReason,
    tictactoe::{Action, BOARD_SIZE, Board, Cell, Player, WINNING_LINES, rules},
};

fn board_with_line(line: &[(usize, usize); 3], cell: Cell) -> Board {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for &(r, c) in line {
        cells[r][c] = cell;
    }
    Board::from_cells(cells)
}

fn reason(err: Error) -> InvalidActionReason {
    match err {
        Error::InvalidAction { reason, .. } => reason,
        other => panic!("expected invalid action, got {other}"),
    }
}

#[test]
fn first_move_marks_x_and_leaves_input_untouched() {
    let board = rules::initial_state();
    let next = rules::result(&board, Some(Action::new(0, 0))).unwrap();

    assert_eq!(next.cells[0][0], Cell::X);
    assert_eq!(board, Board::new());
    assert_eq!(rules::player(&board), Player::X);
    assert_eq!(rules::player(&next), Player::O);
}

#[test]
fn every_legal_action_passes_the_turn() {
    let boards = [
        rules::initial_state(),
        Board::from_string("X.. .O. ...").unwrap(),
        Board::from_string("XO. .X. ...").unwrap(),
        Board::from_string("XOX OX. ...").unwrap(),
    ];
    for board in boards {
        for action in rules::actions(&board) {
            let next = rules::result(&board, Some(action)).unwrap();
            assert_ne!(rules::player(&next), rules::player(&board));
            assert_eq!(next.count_pieces().empty + 1, board.count_pieces().empty);
        }
    }
}

#[test]
fn missing_action_is_rejected() {
    let err = rules::result(&rules::initial_state(), None).unwrap_err();
    assert_eq!(reason(err), InvalidActionReason::Missing);
}

#[test]
fn out_of_bounds_actions_are_rejected() {
    for (row, col) in [(-1_isize, 0_isize), (0, -1), (3, 0), (0, 3), (-5, 7)] {
        let err = Action::try_from((row, col)).unwrap_err();
        assert_eq!(reason(err), InvalidActionReason::OutOfBounds);
    }

    let board = rules::initial_state();
    for action in [Action::new(3, 0), Action::new(0, 3), Action::new(9, 9)] {
        let err = rules::result(&board, Some(action)).unwrap_err();
        assert_eq!(reason(err), InvalidActionReason::OutOfBounds);
    }
}

#[test]
fn occupied_cell_is_rejected() {
    let board = Board::from_string("X.. ... ...").unwrap();
    let err = rules::result(&board, Some(Action::new(0, 0))).unwrap_err();
    assert_eq!(reason(err), InvalidActionReason::Occupied);
}

#[test]
fn winner_detects_every_line_for_both_players() {
    for line in &WINNING_LINES {
        for (cell, player) in [(Cell::X, Player::X), (Cell::O, Player::O)] {
            let board = board_with_line(line, cell);
            assert_eq!(rules::winner(&board), Some(player), "line {line:?}");
            assert!(rules::terminal(&board));
        }
    }
}

#[test]
fn full_draw_board_has_no_winner() {
    let board = Board::from_string("XOX XOO OXX").unwrap();
    assert_eq!(rules::winner(&board), None);
    assert!(rules::terminal(&board));
    assert_eq!(rules::utility(&board), 0);
    assert!(rules::actions(&board).is_empty());
}

#[test]
fn unfinished_boards_have_no_winner() {
    for s in ["... ... ...", "X.. ... ...", "XO. ... ...", "XOX .O. ..X"] {
        let board = Board::from_string(s).unwrap();
        assert_eq!(rules::winner(&board), None, "{s}");
        assert!(!rules::terminal(&board));
        assert_eq!(rules::utility(&board), 0);
    }
}

#[test]
fn utility_scores_wins_from_x_perspective() {
    let x_wins = Board::from_string("XXX OO. ...").unwrap();
    let o_wins = Board::from_string("OOO XX. X..").unwrap();
    assert_eq!(rules::utility(&x_wins), 1);
    assert_eq!(rules::utility(&o_wins), -1);
}

#[test]
fn board_strings_with_bad_counts_are_rejected() {
    assert!(matches!(
        Board::from_string("XX. ... ..."),
        Err(Error::InvalidPieceCounts { x_count: 2, o_count: 0 })
    ));
    assert!(matches!(
        Board::from_string("O.. ... ..."),
        Err(Error::InvalidPieceCounts { .. })
    ));
    assert!(matches!(
        Board::from_string("X.."),
        Err(Error::InvalidBoardLength { .. })
    ));
}
