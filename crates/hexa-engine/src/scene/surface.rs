use crate::coords::Vec2;
use crate::paint::{Color, StrokeGradient};

/// Path-based drawing capability handed to widgets on every redraw.
///
/// The model follows a canvas-style painter: pen state (`set_*`) persists
/// until changed, `begin_path` discards the current path, and `stroke` /
/// `fill` render the current path without consuming it.
///
/// Only the gradient's stops reach the surface. How stop positions map
/// onto the stroked geometry is up to the implementation.
pub trait DrawingSurface {
    /// Starts a new, empty path.
    fn begin_path(&mut self);

    /// Begins a new subpath at `p`.
    fn move_to(&mut self, p: Vec2);

    /// Extends the current subpath to `p`. With no current subpath this
    /// behaves like [`move_to`](Self::move_to).
    fn line_to(&mut self, p: Vec2);

    /// Sets a solid stroke color, replacing any stroke gradient.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets a stroke gradient, replacing any solid stroke color.
    fn set_stroke_gradient(&mut self, gradient: &StrokeGradient);

    fn set_line_width(&mut self, width: f32);

    fn set_fill_color(&mut self, color: Color);

    /// Strokes the current path with the current stroke paint and width.
    fn stroke(&mut self);

    /// Fills the current path (subpaths implicitly closed).
    fn fill(&mut self);
}
