//! Core game logic module for Snake
//!
//! This module contains all the simulation rules without any I/O or rendering
//! dependencies. Drivers call [`GameSession::tick`] on a fixed interval and
//! read [`GameSession::snapshot`] to draw the result.

pub mod config;
pub mod food;
pub mod session;
pub mod snake;
pub mod vector;

// Re-export commonly used types
pub use config::{GameConfig, GridSize};
pub use food::FoodSet;
pub use session::{GameSession, SessionState, Snapshot, TickOutcome};
pub use snake::{AdvanceResult, SnakeBody};
pub use vector::Vector;
