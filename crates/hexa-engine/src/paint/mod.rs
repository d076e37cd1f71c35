//! Paint model shared between UI and surfaces.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources for strokes (solid, gradient along the path)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use gradient::{ColorStop, StrokeGradient};

/// Paint source for a stroke.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(StrokeGradient),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_converts_to_solid_paint() {
        let p: Paint = Color::red().into();
        assert_eq!(p, Paint::Solid(Color::red()));
    }
}
