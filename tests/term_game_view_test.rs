use frame_tetris::core::{ActiveSnapshot, Engine, GameSnapshot, Playfield, Tetromino};
use frame_tetris::term::{GameView, Rgb, Viewport};
use frame_tetris::types::PieceKind;

fn text_row(fb: &frame_tetris::term::FrameBuffer, y: u16) -> String {
    fb.row(y).iter().map(|c| c.ch).collect()
}

#[test]
fn locked_cells_are_drawn_in_piece_color() {
    let field = Playfield::from_ascii(&["L........T"]).unwrap();
    let engine = Engine::with_playfield(4, field);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let layout = view.layout(viewport);

    let fb = view.render(&engine.snapshot(), viewport);

    let (x, y) = layout.origin(21, 0);
    for dx in 0..layout.block_width() as i32 {
        let cell = fb.get((x + dx) as u16, y as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(PieceKind::L.color()));
    }

    let (x, y) = layout.origin(21, 9);
    let cell = fb.get(x as u16, y as u16).unwrap();
    assert_eq!(cell.style.fg, Rgb::from(PieceKind::T.color()));

    // Row 20 stays empty well.
    let (x, y) = layout.origin(20, 0);
    assert_eq!(fb.get(x as u16, y as u16).unwrap().ch, ' ');
}

#[test]
fn active_piece_is_drawn() {
    let tetromino = Tetromino {
        row: 10,
        col: 4,
        ..Tetromino::spawn(PieceKind::O)
    };
    let engine = Engine::with_state(1, Playfield::new(), tetromino);
    let view = GameView::default();
    let viewport = Viewport::new(100, 44);
    let layout = view.layout(viewport);

    let fb = view.render(&engine.snapshot(), viewport);

    for (row, col) in [(10, 4), (10, 5), (11, 4), (11, 5)] {
        let (x, y) = layout.origin(row, col);
        let cell = fb.get(x as u16, y as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(PieceKind::O.color()));
    }
}

#[test]
fn blocks_above_the_field_are_clipped() {
    let mut snap = GameSnapshot::default();
    snap.active = Some(ActiveSnapshot::from(Tetromino {
        row: -1,
        col: 3,
        ..Tetromino::spawn(PieceKind::T)
    }));
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let layout = view.layout(viewport);

    let fb = view.render(&snap, viewport);

    // T's lower row lands on field row 0; the upper block is off-surface.
    for col in 3..=5 {
        let (x, y) = layout.origin(0, col);
        assert_eq!(fb.get(x as u16, y as u16).unwrap().ch, '█');
    }
    let blocks = text_row(&fb, 0).chars().filter(|c| *c == '█').count();
    assert_eq!(blocks, 3 * layout.block_width() as usize);
}

#[test]
fn adjacent_blocks_are_separated_by_well() {
    let field = Playfield::from_ascii(&["II........"]).unwrap();
    let engine = Engine::with_playfield(4, field);
    let view = GameView::default();
    let viewport = Viewport::new(100, 44);
    let layout = view.layout(viewport);

    let fb = view.render(&engine.snapshot(), viewport);

    let (x, y) = layout.origin(21, 0);
    let x = x as u16;
    let y = y as u16;
    for dy in 0..layout.cell_h {
        assert_eq!(fb.get(x, y + dy).unwrap().ch, '█');
        let gap = fb.get(x + layout.cell_w - 1, y + dy).unwrap();
        assert_eq!(gap.ch, ' ');
        assert_eq!(gap.style.bg, Rgb::BLACK);
        assert_eq!(fb.get(x + layout.cell_w, y + dy).unwrap().ch, '█');
    }
}

#[test]
fn game_over_overlay_is_centered() {
    let mut snap = GameSnapshot::default();
    snap.game_over = true;
    let view = GameView::default();

    let fb = view.render(&snap, Viewport::new(80, 24));

    let line = text_row(&fb, 12);
    assert_eq!(&line[35..45], "GAME OVER!");
    let cell = fb.get(35, 12).unwrap();
    assert!(cell.style.bold);
    assert_eq!(cell.style.fg, Rgb::WHITE);
}

#[test]
fn no_overlay_while_playing() {
    let engine = Engine::new(3);
    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(80, 24));
    assert!(!text_row(&fb, 12).contains("GAME OVER!"));
}
