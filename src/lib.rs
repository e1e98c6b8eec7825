//! Maze navigation and pursuit AI core library.

pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod maze;
pub mod systems;
