pub mod app;
pub mod config;
pub mod error;
pub mod generators;
pub mod image;
pub mod maze;
pub mod solvers;

pub use error::{MazeError, Result};
pub use maze::{Cell, Maze};
