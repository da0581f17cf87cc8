//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The host owns the timer and calls [`SimulationEngine::tick`] serially.

pub mod action;
pub mod config;
pub mod engine;
pub mod schedule;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{FoodPlacement, GameConfig, TickPolicy};
pub use engine::{CollisionType, SimulationEngine, TickOutcome};
pub use schedule::TickSchedule;
pub use speed::{INITIAL_SPEED_DELAY_MS, MIN_SPEED_DELAY_MS};
pub use state::{GameState, Lifecycle, Position, Snake, CENTER, GRID_SIZE};
