use tui_2048::core::{GameSnapshot, GameState, MemoryStore};
use tui_2048::term::{tile_style, AnchorY, AudioStatusView, FrameBuffer, GameView, Viewport};
use tui_2048::types::Notice;

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn empty_snapshot() -> GameSnapshot {
    GameSnapshot::default()
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    // 35x19 frame exactly fills the viewport.
    let fb = view.render(&empty_snapshot(), Viewport::new(35, 19));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(34, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 18).unwrap().ch, '└');
    assert_eq!(fb.get(34, 18).unwrap().ch, '┘');
}

#[test]
fn term_view_centres_tile_value() {
    let mut snap = empty_snapshot();
    snap.board[0][0] = 2048;
    snap.board[3][3] = 8;

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(35, 19));

    // Tile (0,0): border + gap => origin (2,2), 7 wide, value on the middle row.
    let (x0, y0) = view.tile_origin(0, 0, 0, 0);
    assert_eq!((x0, y0), (2, 2));
    let tile: String = fb.row_text(y0 + 1).chars().skip(x0 as usize).take(7).collect();
    assert_eq!(tile, " 2048  ");
    assert_eq!(fb.get(x0, y0).unwrap().style.bg, tile_style(2048).bg);

    let (x3, y3) = view.tile_origin(0, 0, 3, 3);
    assert_eq!(fb.get(x3 + 3, y3 + 1).unwrap().ch, '8');
    assert_eq!(fb.get(x3, y3).unwrap().style.bg, tile_style(8).bg);

    // Empty tiles carry no text.
    let (x1, y1) = view.tile_origin(0, 0, 1, 0);
    assert_eq!(fb.get(x1 + 3, y1 + 1).unwrap().ch, ' ');
    assert_eq!(fb.get(x1, y1).unwrap().style.bg, tile_style(0).bg);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1, Box::new(MemoryStore::with_best(9000))).snapshot();
    snap.score = 1234;

    let audio = AudioStatusView {
        enabled: true,
        music_playing: true,
    };
    let fb = GameView::default().render_with_audio(&snap, Some(&audio), Viewport::new(80, 24));
    let text = all_text(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("BEST"));
    assert!(text.contains("9000"));
    assert!(text.contains("♪ on"));
    assert!(text.contains("u undo"));
}

#[test]
fn term_view_skips_panel_when_narrow() {
    let mut snap = empty_snapshot();
    snap.score = 4321;
    let fb = GameView::default().render(&snap, Viewport::new(40, 24));
    let text = all_text(&fb);
    assert!(!text.contains("SCORE"));
    assert!(!text.contains("4321"));
}

#[test]
fn term_view_shows_notices() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let mut snap = empty_snapshot();
    snap.notice = Some(Notice::Won);
    assert!(all_text(&view.render(&snap, vp)).contains("YOU WIN!"));

    snap.notice = Some(Notice::Lost);
    let text = all_text(&view.render(&snap, vp));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("press r to restart"));

    snap.notice = Some(Notice::Undone);
    assert!(all_text(&view.render(&snap, vp)).contains("last move undone"));

    snap.notice = None;
    let text = all_text(&view.render(&snap, vp));
    assert!(!text.contains("GAME OVER") && !text.contains("undone"));
}

#[test]
fn term_view_render_into_reuses_buffer_across_resizes() {
    let snap = empty_snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    view.render_into(&snap, Viewport::new(50, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 20));
    assert_eq!(fb.cells().len(), 50 * 20);
}
