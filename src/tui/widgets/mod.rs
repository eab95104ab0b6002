//! # Module: TUI Widgets
//!
//! ## Responsibility
//! Individual renderers for each region of the screen. Each widget is a pure
//! function of a layout rect and a snapshot (or the frame counter) that
//! renders into a frame.
//!
//! ## Guarantees
//! - All widgets handle an empty log and a zero counter gracefully
//! - No widget panics on any input range or terminal size
//! - Content widgets clear their area so background effects never bleed through

pub mod details;
pub mod effects;
pub mod icon;
pub mod loading;
pub mod retry;
pub mod terminal;
pub mod title;
