//! Slither - fixed-timestep terminal snake arcade game
//!
//! This module exposes the simulation core for testing and external use.

pub mod audio;
pub mod constants;
pub mod food;
pub mod game_loop;
pub mod game_state;
pub mod geometry;
pub mod input;
pub mod persistence;
pub mod snake;

// Terminal-coupled rendering, used by the binary only
pub mod ui;

pub use game_loop::{GameEvent, Session};
pub use game_state::Screen;
