//! Playfield tests - collision, lock-in and row clears

use frame_tetris::core::{get_shape, Playfield};
use frame_tetris::types::{Cell, LockOutcome, PieceKind, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

#[test]
fn test_playfield_new_empty() {
    let field = Playfield::new();
    assert_eq!(field.width(), PLAYFIELD_WIDTH);
    assert_eq!(field.height(), PLAYFIELD_HEIGHT);
    assert_eq!(field.rows().count(), 22);

    for row in field.rows() {
        assert_eq!(row.len(), 10);
        assert!(row.iter().all(Cell::is_empty));
    }
}

#[test]
fn test_playfield_get_set_bounds() {
    let mut field = Playfield::new();

    assert!(field.set(10, 5, Cell::Occupied(PieceKind::T)));
    assert_eq!(field.get(10, 5), Some(Cell::Occupied(PieceKind::T)));

    assert!(!field.set(-1, 0, Cell::Occupied(PieceKind::T)));
    assert!(!field.set(0, 10, Cell::Occupied(PieceKind::T)));
    assert!(!field.set(22, 0, Cell::Occupied(PieceKind::T)));
    assert_eq!(field.get(0, -1), None);
}

#[test]
fn test_valid_position_walls_and_floor() {
    let field = Playfield::new();
    let o = get_shape(PieceKind::O);

    assert!(field.is_valid_position(&o, 0, 0));
    assert!(field.is_valid_position(&o, 20, 8));

    assert!(!field.is_valid_position(&o, 5, -1));
    assert!(!field.is_valid_position(&o, 5, 9));
    assert!(!field.is_valid_position(&o, 21, 0));
}

#[test]
fn test_valid_position_ignores_empty_matrix_cells() {
    let field = Playfield::new();
    let i = get_shape(PieceKind::I);

    // Only matrix row 1 is filled, so anchor row 20 keeps blocks on row 21.
    assert!(field.is_valid_position(&i, 20, 6));
    assert!(!field.is_valid_position(&i, 21, 6));
    assert!(!field.is_valid_position(&i, 20, 7));
}

#[test]
fn test_valid_position_detects_overlap() {
    let mut field = Playfield::new();
    field.set(10, 4, Cell::Occupied(PieceKind::L));
    let t = get_shape(PieceKind::T);

    // T blocks: (r, 4) and (r + 1, 3..=5) for anchor (r, 3)
    assert!(!field.is_valid_position(&t, 10, 3));
    assert!(!field.is_valid_position(&t, 9, 3));
    assert!(field.is_valid_position(&t, 11, 3));
    // Corner of the T matrix over the block is empty.
    assert!(field.is_valid_position(&t, 10, 4));
}

#[test]
fn test_lock_writes_piece_name() {
    let mut field = Playfield::new();
    let s = get_shape(PieceKind::S);

    let outcome = field.lock_and_clear(&s, 20, 0, PieceKind::S);
    assert_eq!(outcome, LockOutcome::Locked { lines_cleared: 0 });

    assert_eq!(field.get(20, 1), Some(Cell::Occupied(PieceKind::S)));
    assert_eq!(field.get(20, 2), Some(Cell::Occupied(PieceKind::S)));
    assert_eq!(field.get(21, 0), Some(Cell::Occupied(PieceKind::S)));
    assert_eq!(field.get(21, 1), Some(Cell::Occupied(PieceKind::S)));
    assert_eq!(field.cells().iter().filter(|c| c.is_occupied()).count(), 4);
}

#[test]
fn test_single_line_clear_shifts_rows_down() {
    // Row 21 is full except where the O lands; row 20 holds a marker.
    let mut field = Playfield::from_ascii(&["Z.........", "JJJJ..JJJJ"]).unwrap();
    let o = get_shape(PieceKind::O);

    let outcome = field.lock_and_clear(&o, 20, 4, PieceKind::O);
    assert_eq!(outcome, LockOutcome::Locked { lines_cleared: 1 });

    // Former row 20 (marker + top of the O) is now row 21.
    assert_eq!(field.get(21, 0), Some(Cell::Occupied(PieceKind::Z)));
    assert_eq!(field.get(21, 4), Some(Cell::Occupied(PieceKind::O)));
    assert_eq!(field.get(21, 5), Some(Cell::Occupied(PieceKind::O)));
    assert_eq!(field.get(21, 1), Some(Cell::Empty));

    assert!(field.row(20).iter().all(Cell::is_empty));
    assert!(field.row(0).iter().all(Cell::is_empty));
    assert_eq!(field.rows().count(), PLAYFIELD_HEIGHT);
}

#[test]
fn test_clear_empties_top_row() {
    let mut field = Playfield::new();
    field.set(0, 0, Cell::Occupied(PieceKind::T));
    field.set(0, 9, Cell::Occupied(PieceKind::T));
    field.set(1, 3, Cell::Occupied(PieceKind::S));
    for col in 0..PLAYFIELD_WIDTH as i32 {
        field.set(21, col, Cell::Occupied(PieceKind::L));
    }

    assert_eq!(field.clear_full_rows(), 1);

    assert!(field.row(0).iter().all(Cell::is_empty));
    // Old row 0 moved to row 1, old row 1 to row 2.
    assert_eq!(field.get(1, 0), Some(Cell::Occupied(PieceKind::T)));
    assert_eq!(field.get(1, 9), Some(Cell::Occupied(PieceKind::T)));
    assert_eq!(field.get(1, 3), Some(Cell::Empty));
    assert_eq!(field.get(2, 3), Some(Cell::Occupied(PieceKind::S)));
    assert_eq!(field.cells().iter().filter(|c| c.is_occupied()).count(), 3);
}

#[test]
fn test_clear_row_zero_itself() {
    let mut field = Playfield::new();
    for col in 0..PLAYFIELD_WIDTH as i32 {
        field.set(0, col, Cell::Occupied(PieceKind::I));
    }
    field.set(1, 4, Cell::Occupied(PieceKind::J));

    field.clear_row(0);

    assert!(field.row(0).iter().all(Cell::is_empty));
    assert_eq!(field.get(1, 4), Some(Cell::Occupied(PieceKind::J)));
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut field = Playfield::from_ascii(&[
        "IIIIIIIII.",
        "T.........",
        "IIIIIIIII.",
    ])
    .unwrap();
    let i = get_shape(PieceKind::I).rotated();

    // Vertical I in matrix column 2; anchor col 7 puts it in column 9, rows 18..=21.
    let outcome = field.lock_and_clear(&i, 18, 7, PieceKind::I);
    assert_eq!(outcome, LockOutcome::Locked { lines_cleared: 2 });

    assert_eq!(field.get(21, 0), Some(Cell::Occupied(PieceKind::T)));
    assert_eq!(field.get(21, 9), Some(Cell::Occupied(PieceKind::I)));
    assert_eq!(field.get(20, 9), Some(Cell::Occupied(PieceKind::I)));
    assert!(field.row(19).iter().all(Cell::is_empty));
}

#[test]
fn test_lock_into_row_zero_is_game_over() {
    let mut field = Playfield::new();
    let t = get_shape(PieceKind::T);

    // Matrix row 0 is filled, so anchor row 0 gives 0 + 0 - 1 < 0.
    assert_eq!(field.lock_and_clear(&t, 0, 3, PieceKind::T), LockOutcome::GameOver);
    // Anchor row 1 is still allowed.
    assert_eq!(
        field.lock_and_clear(&t, 1, 3, PieceKind::T),
        LockOutcome::Locked { lines_cleared: 0 }
    );
}

#[test]
fn test_i_piece_game_over_uses_filled_rows_only() {
    let mut field = Playfield::new();
    let i = get_shape(PieceKind::I);

    // Horizontal I at anchor 0 has its blocks on matrix row 1: 0 + 1 - 1 == 0.
    assert_eq!(
        field.lock_and_clear(&i, 0, 3, PieceKind::I),
        LockOutcome::Locked { lines_cleared: 0 }
    );
    assert_eq!(field.get(1, 3), Some(Cell::Occupied(PieceKind::I)));

    let mut field = Playfield::new();
    assert_eq!(field.lock_and_clear(&i, -1, 3, PieceKind::I), LockOutcome::GameOver);
}
