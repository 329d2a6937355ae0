//! Crossfall: a falling-block puzzle on a grid sized to the window.
//!
//! Shapes appear in the middle of the grid and keep moving the way they were
//! last steered until they hit something, where they lock. Full rows and full
//! columns are cleared for points.

pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod piece;
pub mod render;
pub mod scoring;
pub mod shape;

pub use config::{Cli, RowClearPolicy, Settings};
pub use error::ConfigError;
pub use game::{Command, Phase, Simulator, Step, TickReport};
pub use grid::{ClearReport, Grid};
pub use piece::{Direction, Heading, Piece};
pub use shape::{rotate_shape, Shape, ShapeKind};
