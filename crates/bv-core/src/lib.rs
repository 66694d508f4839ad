/// Configuration, types, and shared structures for braillevec.
///
/// This crate contains the braille dot-mask tables, the character grid,
/// the geometry output types, and the configuration logic used across
/// the braillevec workspace.

pub mod braille;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;

pub use braille::{braille_char, dot_mask, DOT_OFFSETS};
pub use config::{ConvertConfig, PitchMode, TrimMode};
pub use error::CoreError;
pub use geometry::{Dot, Geometry};
pub use grid::Grid;
