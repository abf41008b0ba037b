//! Conway's Game of Life on a fixed square board, printed to a console
//! generation by generation until the population dies out.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod proc;

pub use draw::{ App, Phase };
pub use error::{ Error, Result };
pub use proc::{ Cell, Coord, Field };
