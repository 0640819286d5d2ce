pub mod cell;
pub mod config;
pub mod driver;
pub mod error;
pub mod generation;
pub mod grid;
pub mod rules;

pub use cell::Cell;
pub use cell::Position;
pub use generation::Generation;
pub use grid::Grid;
pub use grid::Phase;
pub use rules::State;
