//! Galaga-style arcade shooter core.
//!
//! Enemies fly a spiral entrance into a grid formation and periodically dive
//! at the player. The simulation is frame-driven and deterministic for a
//! given RNG; rendering, input and sound are supplied by the caller.

pub mod audio;
pub mod collision;
pub mod compute;
pub mod config;
pub mod enemy;
pub mod entities;
pub mod error;
pub mod path;
pub mod spawner;
pub mod tuning;

pub use error::{GameError, Result};
