//! `binfill` models a single rectangular container being filled with rectangular items on an integer grid.
//! It provides the placement state, the occupancy grid and the discovery of free space inside the container.

/// Entities to model the packing of rectangular items into a single container
pub mod entities;

/// Integer geometric primitives
pub mod geometry;

/// Everything related to discovering free space inside a container
pub mod space;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
