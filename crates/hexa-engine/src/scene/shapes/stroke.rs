use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

use super::Path;

/// Stroked path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub path: Path,
    pub paint: Paint,
    pub width: f32,
}

impl StrokeCmd {
    #[inline]
    pub fn new(path: Path, paint: Paint, width: f32) -> Self {
        Self { path, paint, width }
    }
}

impl DrawList {
    /// Records a stroke command.
    #[inline]
    pub fn push_stroke(&mut self, path: Path, paint: Paint, width: f32) {
        self.push(DrawCmd::Stroke(StrokeCmd::new(path, paint, width)));
    }

    /// Stroke commands in recording order.
    pub fn strokes(&self) -> impl Iterator<Item = &StrokeCmd> {
        self.items().iter().filter_map(|cmd| match cmd {
            DrawCmd::Stroke(s) => Some(s),
            _ => None,
        })
    }
}
