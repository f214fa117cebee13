//! GUI module for Lines of Action
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::LoaApp;
pub use game_state::{EndReason, GameMode, GameResult, GameState};
