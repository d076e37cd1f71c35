use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Path;

/// Filled path payload. Subpaths are implicitly closed.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub path: Path,
    pub color: Color,
}

impl FillCmd {
    #[inline]
    pub fn new(path: Path, color: Color) -> Self {
        Self { path, color }
    }
}

impl DrawList {
    /// Records a fill command.
    #[inline]
    pub fn push_fill(&mut self, path: Path, color: Color) {
        self.push(DrawCmd::Fill(FillCmd::new(path, color)));
    }

    /// Fill commands in recording order.
    pub fn fills(&self) -> impl Iterator<Item = &FillCmd> {
        self.items().iter().filter_map(|cmd| match cmd {
            DrawCmd::Fill(f) => Some(f),
            _ => None,
        })
    }
}
