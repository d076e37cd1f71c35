//! Hexa engine crate.
//!
//! Renderer-independent building blocks for the hexagon progress widgets:
//! coordinates, hexagon geometry, paint, and a recording drawing surface.

pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod scene;
