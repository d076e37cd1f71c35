use crate::coords::Vec2;
use crate::paint::{Color, Paint, StrokeGradient};

use super::shapes::Path;
use super::{DrawCmd, DrawingSurface};

/// Pen state carried between surface calls.
#[derive(Debug, Clone, PartialEq)]
struct Pen {
    stroke: Paint,
    line_width: f32,
    fill: Color,
}

impl Default for Pen {
    fn default() -> Self {
        let black = Color::from_premul(0.0, 0.0, 0.0, 1.0);
        Self { stroke: Paint::Solid(black), line_width: 1.0, fill: black }
    }
}

/// Recorded draw stream for a frame.
///
/// `DrawList` implements [`DrawingSurface`]: every `stroke` / `fill` call
/// snapshots the current path and pen into a [`DrawCmd`]. Commands are kept
/// in call order, which is also paint order.
///
/// ```
/// use hexa_engine::coords::Vec2;
/// use hexa_engine::scene::{DrawList, DrawingSurface};
///
/// let mut list = DrawList::new();
/// list.begin_path();
/// list.move_to(Vec2::new(0.0, 0.0));
/// list.line_to(Vec2::new(10.0, 0.0));
/// list.stroke();
/// assert_eq!(list.strokes().count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    pen: Pen,
    path: Path,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, the current path and pen state. Keeps
    /// allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.path.clear();
        self.pen = Pen::default();
    }

    /// Returns items in recording order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    fn accept(p: Vec2) -> bool {
        if p.is_finite() {
            true
        } else {
            log::warn!("dropping non-finite path point {p:?}");
            false
        }
    }
}

impl DrawingSurface for DrawList {
    #[inline]
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        if Self::accept(p) {
            self.path.move_to(p);
        }
    }

    fn line_to(&mut self, p: Vec2) {
        if Self::accept(p) {
            self.path.line_to(p);
        }
    }

    #[inline]
    fn set_stroke_color(&mut self, color: Color) {
        self.pen.stroke = color.into();
    }

    #[inline]
    fn set_stroke_gradient(&mut self, gradient: &StrokeGradient) {
        self.pen.stroke = Paint::Gradient(gradient.clone());
    }

    #[inline]
    fn set_line_width(&mut self, width: f32) {
        self.pen.line_width = width;
    }

    #[inline]
    fn set_fill_color(&mut self, color: Color) {
        self.pen.fill = color;
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.push_stroke(self.path.clone(), self.pen.stroke.clone(), self.pen.line_width);
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.push_fill(self.path.clone(), self.pen.fill);
    }
}
