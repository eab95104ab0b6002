//! Integration tests for the animated error screen.
//!
//! These tests verify cross-module behaviour: timer schedules on virtual
//! time, input handling through the app shell, full-frame rendering on a
//! test backend, and configuration files feeding a mounted screen.

mod app_state;
mod config_files;
mod timers;
mod widget_tests;
