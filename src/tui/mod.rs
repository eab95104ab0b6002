//! # Module: TUI
//!
//! ## Responsibility
//! Terminal front end for the screen using Ratatui: app shell state, input
//! handling, layout and widget rendering.
//!
//! ## Guarantees
//! - No panics in any rendering or update path
//! - Clean terminal restore on exit, including on panic (see the binary)
//! - Graceful resize handling down to 80x24
//!
//! ## NOT Responsible For
//! - Animating widget state (that belongs to `screen`)

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;
