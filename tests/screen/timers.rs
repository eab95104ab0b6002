//! Timer schedule tests on paused tokio time.
//!
//! Each timer first fires one full period after mount. Sleeps land 50ms past
//! a tick so the tick has been processed before the snapshot is taken.

use std::time::Duration;

use glitch_screen::screen::{ErrorCode, LOG_SCRIPT, LOG_WINDOW, PIXEL_COUNT};
use glitch_screen::{AnimatedErrorScreen, ScreenConfig};

fn mount(seed: u64) -> AnimatedErrorScreen {
    let mut config = ScreenConfig::default();
    config.random.seed = Some(seed);
    AnimatedErrorScreen::mount(&config).unwrap_or_else(|e| panic!("mount failed: {e}"))
}

async fn advance_to(start: tokio::time::Instant, ms: u64) {
    tokio::time::sleep_until(start + Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_log_scenario_over_twelve_seconds() {
    let start = tokio::time::Instant::now();
    let screen = mount(11);

    advance_to(start, 1950).await;
    assert!(screen.snapshot().log_lines.is_empty());

    advance_to(start, 2050).await;
    assert_eq!(screen.snapshot().log_lines, vec![LOG_SCRIPT[0]]);

    advance_to(start, 4050).await;
    assert_eq!(screen.snapshot().log_lines, vec![LOG_SCRIPT[0], LOG_SCRIPT[1]]);

    advance_to(start, 12050).await;
    let lines = screen.snapshot().log_lines;
    assert_eq!(lines.len(), LOG_WINDOW);
    assert_eq!(lines, LOG_SCRIPT[1..=5].to_vec());
}

#[tokio::test(start_paused = true)]
async fn test_schedule_counts_from_mount_when_first_poll_is_late() {
    let start = tokio::time::Instant::now();
    let screen = mount(19);

    // The first frame can take a while before the timer tasks run.
    tokio::time::advance(Duration::from_millis(400)).await;

    advance_to(start, 2150).await;
    assert_eq!(screen.snapshot().log_lines, vec![LOG_SCRIPT[0]]);
}

#[tokio::test(start_paused = true)]
async fn test_log_wraps_the_script() {
    let start = tokio::time::Instant::now();
    let screen = mount(12);

    // 10 appends: script lines 0..=7 then 0, 1
    advance_to(start, 20050).await;
    let lines = screen.snapshot().log_lines;
    assert_eq!(
        lines,
        vec![
            LOG_SCRIPT[5],
            LOG_SCRIPT[6],
            LOG_SCRIPT[7],
            LOG_SCRIPT[0],
            LOG_SCRIPT[1],
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_error_code_initial_then_member_of_set() {
    let start = tokio::time::Instant::now();
    let screen = mount(13);
    assert_eq!(screen.snapshot().error_code, ErrorCode::Err4F2B);

    for step in 1..=10u64 {
        advance_to(start, step * 3000 + 50).await;
        let code = screen.snapshot().error_code;
        assert!(ErrorCode::ALL.contains(&code));
        assert!(code.as_str().starts_with("ERR_0x"));
    }
}

#[tokio::test(start_paused = true)]
async fn test_progress_follows_transition_rule() {
    let start = tokio::time::Instant::now();
    let screen = mount(14);
    let mut prior = screen.snapshot().progress;
    assert_eq!(prior, 0.0);

    for step in 1..=120u64 {
        advance_to(start, step * 500 + 50).await;
        let next = screen.snapshot().progress;
        if prior >= 87.0 {
            assert_eq!(next, 0.0, "step {step}: {prior} should reset");
        } else {
            let inc = next - prior;
            assert!(
                (0.0..15.0).contains(&inc),
                "step {step}: increment {inc} out of range"
            );
        }
        assert!(next < 102.0, "step {step}: value {next} above reachable max");
        prior = next;
    }
}

#[tokio::test(start_paused = true)]
async fn test_percent_is_floor_of_progress() {
    let start = tokio::time::Instant::now();
    let screen = mount(15);

    for step in 1..=20u64 {
        advance_to(start, step * 500 + 50).await;
        let snap = screen.snapshot();
        assert_eq!(snap.progress_percent, snap.progress.floor() as u32);
        assert!((0.0..=1.0).contains(&snap.progress_ratio));
    }
}

#[tokio::test(start_paused = true)]
async fn test_unmount_freezes_every_widget() {
    let start = tokio::time::Instant::now();
    let mut screen = mount(16);

    advance_to(start, 6050).await;
    screen.unmount();
    let frozen = screen.snapshot();
    assert_eq!(frozen.log_lines.len(), 3);

    advance_to(start, 60_000).await;
    assert_eq!(screen.snapshot(), frozen);
}

#[tokio::test(start_paused = true)]
async fn test_unmount_is_idempotent() {
    let mut screen = mount(17);
    screen.unmount();
    screen.unmount();
    assert!(!screen.is_mounted());
}

#[tokio::test(start_paused = true)]
async fn test_pixels_fixed_for_the_mount() {
    let start = tokio::time::Instant::now();
    let screen = mount(18);
    let before = screen.pixels().to_vec();
    assert_eq!(before.len(), PIXEL_COUNT);

    advance_to(start, 10_050).await;
    assert_eq!(screen.pixels(), before.as_slice());

    for pixel in &before {
        assert!((0.0..4.0).contains(&pixel.delay_seconds));
        assert!((20.0..120.0).contains(&pixel.size_pixels));
        assert!((0.0..100.0).contains(&pixel.left));
        assert!((0.0..100.0).contains(&pixel.top));
    }
}

#[tokio::test(start_paused = true)]
async fn test_same_seed_same_animation() {
    let start = tokio::time::Instant::now();
    let a = mount(99);
    let b = mount(99);
    assert_eq!(a.pixels(), b.pixels());

    advance_to(start, 9050).await;
    let (sa, sb) = (a.snapshot(), b.snapshot());
    assert_eq!(sa.error_code, sb.error_code);
    assert_eq!(sa.progress, sb.progress);
    assert_eq!(sa.log_lines, sb.log_lines);
}
