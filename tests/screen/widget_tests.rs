//! Full-frame rendering on ratatui's `TestBackend`.

use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use glitch_screen::screen::LOG_SCRIPT;
use glitch_screen::tui::app::App;
use glitch_screen::tui::events::{apply_event, InputEvent};
use glitch_screen::tui::ui;
use glitch_screen::{AnimatedErrorScreen, ScreenConfig};

fn app(seed: u64) -> App {
    let mut config = ScreenConfig::default();
    config.random.seed = Some(seed);
    let screen =
        AnimatedErrorScreen::mount(&config).unwrap_or_else(|e| panic!("mount failed: {e}"));
    App::new(screen, Duration::from_millis(100))
}

fn render(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap_or_else(|e| panic!("{e}"));
    terminal
        .draw(|f| {
            app.viewport = f.area();
            ui::draw(f, app);
        })
        .unwrap_or_else(|e| panic!("{e}"));
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[tokio::test(start_paused = true)]
async fn test_full_frame_shows_every_region() {
    let mut app = app(31);
    app.on_frame();
    let text = render(&mut app, 100, 30);

    assert!(text.contains("SYSTEM"), "title missing:\n{text}");
    assert!(text.contains("Sorry, I couldn't build that app right now."));
    assert!(text.contains("ERR_0x4F2B"));
    assert!(text.contains("ATTEMPTING RECOVERY..."));
    assert!(text.contains("0%"));
    assert!(text.contains("TRY AGAIN"));
    assert!(text.contains("system_log.exe"));
    assert!(text.contains("@clonkbot"));
}

#[tokio::test(start_paused = true)]
async fn test_frame_before_mount_shows_background_only() {
    let mut app = app(32);
    let text = render(&mut app, 100, 30);
    assert!(!text.contains("TRY AGAIN"));
    assert!(!text.contains("system_log.exe"));
}

#[tokio::test(start_paused = true)]
async fn test_log_lines_rendered_after_ticks() {
    let mut app = app(33);
    app.on_frame();
    tokio::time::sleep(Duration::from_millis(4050)).await;
    let text = render(&mut app, 120, 30);

    assert!(text.contains(LOG_SCRIPT[0]), "first line missing:\n{text}");
    assert!(text.contains("ERROR: Memory address"));
}

#[tokio::test(start_paused = true)]
async fn test_retry_label_rendered() {
    let mut app = app(34);
    app.on_frame();
    apply_event(&mut app, InputEvent::Retry);
    apply_event(&mut app, InputEvent::Retry);
    let text = render(&mut app, 100, 30);
    assert!(text.contains("RETRY (2)"));
}

#[tokio::test(start_paused = true)]
async fn test_too_small_terminal_shows_warning() {
    let mut app = app(35);
    app.on_frame();
    let text = render(&mut app, 60, 20);
    assert!(text.contains("Terminal too small"));
    assert!(!text.contains("TRY AGAIN"));
}

#[tokio::test(start_paused = true)]
async fn test_minimum_size_renders_without_panic() {
    let mut app = app(36);
    for _ in 0..60 {
        app.on_frame();
        let text = render(&mut app, 80, 24);
        assert!(text.contains("TRY AGAIN"));
    }
}

#[tokio::test(start_paused = true)]
async fn test_help_overlay_rendered() {
    let mut app = app(37);
    app.on_frame();
    apply_event(&mut app, InputEvent::Help);
    let text = render(&mut app, 100, 30);
    assert!(text.contains("Toggle this help"), "help overlay missing:\n{text}");
}
