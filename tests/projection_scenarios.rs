use fading_ttt::{project, Board, Placement, Player, RenderState};

fn place(board: &mut Board, row: usize, col: usize, owner: Player, move_index: u32) {
    board.place(row, col, Placement { owner, move_index }).unwrap();
}

#[test]
fn single_mark_renders_visible() {
    let mut board = Board::empty();
    place(&mut board, 0, 0, Player::X, 0);

    let view = project(&board);
    assert_eq!(view.get(0, 0), RenderState::Visible(Player::X));
    for (row, col, state) in view.iter() {
        if (row, col) != (0, 0) {
            assert_eq!(state, RenderState::Empty);
        }
    }
}

#[test]
fn third_mark_starts_pushing_out_the_first() {
    let mut board = Board::empty();
    place(&mut board, 0, 0, Player::X, 0);
    place(&mut board, 1, 1, Player::X, 1);
    place(&mut board, 2, 2, Player::X, 2);

    let view = project(&board);
    assert_eq!(view.get(0, 0), RenderState::Empty);
    assert_eq!(view.get(1, 1), RenderState::Fading(Player::X));
    assert_eq!(view.get(2, 2), RenderState::Visible(Player::X));
}

#[test]
fn unpruned_marks_stay_suppressed() {
    // The authority may lag in pruning: with four live marks, the two
    // oldest are past the window and must not render.
    let mut board = Board::empty();
    place(&mut board, 0, 0, Player::X, 0);
    place(&mut board, 0, 1, Player::X, 1);
    place(&mut board, 0, 2, Player::X, 2);
    place(&mut board, 1, 0, Player::X, 3);

    let view = project(&board);
    assert_eq!(view.get(0, 0), RenderState::Empty);
    assert_eq!(view.get(0, 1), RenderState::Empty);
    assert_eq!(view.get(0, 2), RenderState::Fading(Player::X));
    assert_eq!(view.get(1, 0), RenderState::Visible(Player::X));
}

#[test]
fn seats_fade_on_their_own_clocks() {
    // X has three marks (oldest fading); O's single mark is unaffected.
    let mut board = Board::empty();
    place(&mut board, 0, 0, Player::X, 0);
    place(&mut board, 0, 1, Player::X, 1);
    place(&mut board, 0, 2, Player::X, 2);
    place(&mut board, 2, 2, Player::O, 0);

    let view = project(&board);
    assert_eq!(view.get(0, 0), RenderState::Empty);
    assert_eq!(view.get(2, 2), RenderState::Visible(Player::O));
}

#[test]
fn one_mark_each_renders_both_visible() {
    let mut board = Board::empty();
    place(&mut board, 0, 0, Player::X, 0);
    place(&mut board, 1, 1, Player::O, 0);

    let view = project(&board);
    assert_eq!(view.get(0, 0), RenderState::Visible(Player::X));
    assert_eq!(view.get(1, 1), RenderState::Visible(Player::O));
}

#[test]
fn sparse_indices_keep_the_newest_window() {
    // Indices need not be contiguous once older marks have been pruned
    // upstream: three live marks with indices 2, 3, 4 and count 3.
    let mut board = Board::empty();
    place(&mut board, 0, 0, Player::O, 2);
    place(&mut board, 1, 0, Player::O, 3);
    place(&mut board, 2, 0, Player::O, 4);

    let view = project(&board);
    // count 3 never reaches index + 3 for any of these, so all render;
    // none is at the fading edge either.
    assert_eq!(view.get(0, 0), RenderState::Visible(Player::O));
    assert_eq!(view.get(1, 0), RenderState::Visible(Player::O));
    assert_eq!(view.get(2, 0), RenderState::Visible(Player::O));
}
