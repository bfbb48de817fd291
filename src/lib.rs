//! **mazes3d** generates perfect three dimensional mazes and the block by block plans to build them.
//!
//! A maze is a lattice of 2x2x2 chambers stacked in floors. Wilson's algorithm picks a
//! uniformly random spanning tree of the lattice, so every chamber is reachable and there is
//! exactly one route between any two of them. The tree is then carved into an enclosing
//! structure of solid blocks, passages between floors becoming ladders, and rendered one
//! layer of blocks at a time.

pub mod carver;
pub mod coordinates;
pub mod errors;
pub mod generators;
pub mod geometry;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod maze;
pub mod pathing;
pub mod shell;
pub mod terminals;
pub mod units;
