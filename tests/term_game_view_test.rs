use lines::core::{Game, SimpleRng};
use lines::term::{GameView, Highlight, Tone, ViewState, Viewport};
use lines::types::{Cell, Color};

/// 9x9 with a red ball at (0, 0) and a gold one at (8, 8).
fn two_ball_game() -> Game {
    let bytes = [9, 2, 0, 0, 0, 8, 8, 3, 3, 1, 2, 5, 12, 4];
    Game::restore_with_rng(&bytes, SimpleRng::new(1)).unwrap()
}

fn screen_text(fb: &lines::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let game = two_ball_game();
    // 9 cells * 2 columns + border = 20 wide, 9 rows + border = 11 tall.
    let fb = GameView::default().render(&game, &ViewState::default(), Viewport::new(20, 11));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(19, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 10).unwrap().ch, '└');
    assert_eq!(fb.get(19, 10).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_colored_balls() {
    let game = two_ball_game();
    let fb = GameView::default().render(&game, &ViewState::default(), Viewport::new(20, 11));

    let red = fb.get(1, 1).unwrap();
    assert_eq!(red.ch, '●');
    assert_eq!(red.tone, Tone::Ball(Color::Red));
    assert_eq!(red.highlight, Highlight::Board);

    // (8, 8) starts at column 1 + 8 * 2.
    let gold = fb.get(17, 9).unwrap();
    assert_eq!(gold.ch, '●');
    assert_eq!(gold.tone, Tone::Ball(Color::Gold));

    let dot = fb.get(3, 1).unwrap();
    assert_eq!(dot.ch, '·');
    assert_eq!(dot.tone, Tone::Muted);
    // Outside the frame nothing is highlighted.
    assert_eq!(fb.get(0, 0).unwrap().highlight, Highlight::Screen);
}

#[test]
fn term_view_highlights_cursor_and_selection() {
    let game = two_ball_game();
    let ui = ViewState {
        cursor: Cell::new(4, 4),
        selected: Some(Cell::new(0, 0)),
    };
    let fb = GameView::default().render(&game, &ui, Viewport::new(20, 11));

    assert_eq!(fb.get(5, 3).unwrap().highlight, Highlight::Board);
    assert_eq!(fb.get(9, 5).unwrap().highlight, Highlight::Cursor);
    let selected = fb.get(1, 1).unwrap();
    assert_eq!(selected.highlight, Highlight::Selected);
    assert!(selected.bold);
    // Both columns of a cell share the highlight.
    assert_eq!(fb.get(10, 5).unwrap().highlight, Highlight::Cursor);
    assert_eq!(fb.get(2, 1).unwrap().highlight, Highlight::Selected);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let game = two_ball_game();
    let fb = GameView::default().render(&game, &ViewState::default(), Viewport::new(40, 11));

    let text = screen_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("MOVES"));
    assert!(text.contains("NEXT"));
    assert!(text.contains("12"));

    let narrow = GameView::default().render(&game, &ViewState::default(), Viewport::new(20, 11));
    assert!(!screen_text(&narrow).contains("SCORE"));
}

#[test]
fn term_view_shows_game_over() {
    let mut game = Game::new(2, Some(4)).unwrap();
    game.start();
    assert!(game.is_finished());

    let fb = GameView::default().render(&game, &ViewState::default(), Viewport::new(30, 8));
    assert!(screen_text(&fb).contains("GAME OVER"));

    let live = two_ball_game();
    let fb = GameView::default().render(&live, &ViewState::default(), Viewport::new(30, 13));
    assert!(!screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board() {
    let game = two_ball_game();
    let fb = GameView::default().render(&game, &ViewState::default(), Viewport::new(20, 21));
    // start_y = (21 - 11) / 2 = 5
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');
}
