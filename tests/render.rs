use fading_ttt::domain::{Snapshot, WireCell};
use fading_ttt::{project, render_board, render_status, Board, Placement, Player, Session};

fn place(board: &mut Board, row: usize, col: usize, owner: Player, move_index: u32) {
    board.place(row, col, Placement { owner, move_index }).unwrap();
}

#[test]
fn lone_mark_renders_as_uppercase_glyph() {
    let mut board = Board::empty();
    place(&mut board, 0, 0, Player::X, 0);

    let expected = concat!(
        "    ╔═══════════╗\n",
        "    ║    A B C  ║\n",
        "    ╠═══════════╣\n",
        "    ║ 1  X · ·  ║\n",
        "    ║ 2  · · ·  ║\n",
        "    ║ 3  · · ·  ║\n",
        "    ╚═══════════╝\n",
        "    Legend: X O = placed   x o = fading   · = empty\n",
    );
    assert_eq!(render_board(&project(&board)), expected);
}

#[test]
fn fading_marks_render_lowercase() {
    let mut board = Board::empty();
    place(&mut board, 0, 0, Player::X, 0);
    place(&mut board, 0, 1, Player::X, 1);
    place(&mut board, 0, 2, Player::X, 2);
    place(&mut board, 1, 0, Player::O, 0);
    place(&mut board, 1, 1, Player::O, 1);
    place(&mut board, 1, 2, Player::O, 2);

    let out = render_board(&project(&board));
    // Oldest mark of each seat is suppressed, second-oldest fades.
    assert!(out.contains("║ 1  · x X  ║"));
    assert!(out.contains("║ 2  · o O  ║"));
}

fn session(turn: char, game_over: bool, winner: Option<&str>) -> Session {
    Session::try_from(Snapshot {
        board: vec![vec![None::<WireCell>; 3]; 3],
        turn,
        game_over,
        winner: winner.map(str::to_string),
        message: None,
    })
    .unwrap()
}

#[test]
fn status_line_tracks_the_session() {
    assert_eq!(render_status(&session('X', false, None)), "Your move.");
    assert_eq!(
        render_status(&session('O', false, None)),
        "Waiting for the opponent."
    );
    assert_eq!(render_status(&session('X', true, Some("X"))), "You win!");
    assert_eq!(
        render_status(&session('X', true, Some("O"))),
        "You lose. O wins."
    );
    assert_eq!(render_status(&session('X', true, Some("Draw"))), "Draw.");
    assert_eq!(render_status(&session('X', true, None)), "Game over.");
}
