//! App shell tests: input events driving the mounted screen.

use std::time::Duration;

use ratatui::layout::Rect;

use glitch_screen::tui::app::App;
use glitch_screen::tui::events::{apply_event, InputEvent};
use glitch_screen::tui::ui::retry_button_area;
use glitch_screen::{AnimatedErrorScreen, ScreenConfig};

fn app() -> App {
    let mut config = ScreenConfig::default();
    config.random.seed = Some(21);
    let screen =
        AnimatedErrorScreen::mount(&config).unwrap_or_else(|e| panic!("mount failed: {e}"));
    let mut app = App::new(screen, Duration::from_millis(100));
    apply_event(&mut app, InputEvent::Resize(100, 30));
    app
}

fn button(app: &App) -> Rect {
    retry_button_area(app.viewport).unwrap_or_else(|| panic!("button not laid out"))
}

#[tokio::test(start_paused = true)]
async fn test_n_retries_show_counter() {
    let mut app = app();
    assert_eq!(app.screen.snapshot().retry_label, "TRY AGAIN");

    for _ in 0..7 {
        apply_event(&mut app, InputEvent::Retry);
    }
    let snap = app.screen.snapshot();
    assert_eq!(snap.retry_count, 7);
    assert_eq!(snap.retry_label, "RETRY (7)");
}

#[tokio::test(start_paused = true)]
async fn test_click_on_button_retries() {
    let mut app = app();
    let b = button(&app);
    apply_event(&mut app, InputEvent::Click(b.x + 1, b.y + 1));
    assert_eq!(app.screen.retry().count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_click_outside_button_ignored() {
    let mut app = app();
    apply_event(&mut app, InputEvent::Click(0, 0));
    assert_eq!(app.screen.retry().count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_hover_tracks_pointer() {
    let mut app = app();
    let b = button(&app);

    apply_event(&mut app, InputEvent::Hover(b.x, b.y));
    assert!(app.hovered);

    apply_event(&mut app, InputEvent::Hover(0, 0));
    assert!(!app.hovered);
}

#[tokio::test(start_paused = true)]
async fn test_resize_clears_hover() {
    let mut app = app();
    let b = button(&app);
    apply_event(&mut app, InputEvent::Hover(b.x, b.y));
    apply_event(&mut app, InputEvent::Resize(120, 40));
    assert!(!app.hovered);
    assert_eq!(app.viewport, Rect::new(0, 0, 120, 40));
}

#[tokio::test(start_paused = true)]
async fn test_too_small_viewport_has_no_button() {
    let mut app = app();
    apply_event(&mut app, InputEvent::Resize(60, 20));
    apply_event(&mut app, InputEvent::Click(30, 10));
    assert_eq!(app.screen.retry().count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_retry_while_help_open_only_closes_help() {
    let mut app = app();
    apply_event(&mut app, InputEvent::Help);
    assert!(app.show_help);

    apply_event(&mut app, InputEvent::Retry);
    assert!(!app.show_help);
    assert_eq!(app.screen.retry().count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_quit_sets_flag_and_timers_keep_running() {
    let mut app = app();
    apply_event(&mut app, InputEvent::Quit);
    assert!(app.should_quit);
    assert!(app.screen.is_mounted());
}

#[tokio::test(start_paused = true)]
async fn test_retry_does_not_touch_other_widgets() {
    let mut app = app();
    tokio::time::sleep(Duration::from_millis(2050)).await;
    let before = app.screen.snapshot();

    apply_event(&mut app, InputEvent::Retry);
    let after = app.screen.snapshot();
    assert_eq!(after.error_code, before.error_code);
    assert_eq!(after.progress, before.progress);
    assert_eq!(after.log_lines, before.log_lines);
}
