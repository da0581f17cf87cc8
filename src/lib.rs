//! Grid Snake - a single-player snake game on a 20x20 grid
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard and drag input translation (input module)
//! - TUI rendering (render module)
//! - Session counters (metrics module)
//! - The interactive timer-driven host (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
