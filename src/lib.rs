//! Snake Feast - grid snake with a field full of food
//!
//! This library provides:
//! - Core simulation (game module): snake, food, score, pause and restart rules
//! - Keyboard translation (input module)
//! - TUI rendering (render module)
//! - Per-process play statistics (metrics module)
//! - The interactive terminal driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
