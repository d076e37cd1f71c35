//! Coordinate and geometry types shared across the engine and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod segment;
mod vec2;

pub use rect::Rect;
pub use segment::Segment;
pub use vec2::Vec2;
