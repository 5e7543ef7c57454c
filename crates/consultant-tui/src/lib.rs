//! consultant-tui - Terminal UI for Stock Consultant
//!
//! This crate provides the ratatui-based terminal interface on top of
//! consultant-app: terminal setup, event polling, the render pass for every
//! screen and the widgets those screens are built from.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
