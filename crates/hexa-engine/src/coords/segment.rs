use super::Vec2;

/// Directed line segment from `start` to `end`.
///
/// Segments are transient values: renderers compute them per draw and
/// never keep them between frames.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// `end - start`.
    #[inline]
    pub fn direction(self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.direction().length()
    }

    #[inline]
    pub fn midpoint(self) -> Vec2 {
        self.start.lerp(self.end, 0.5)
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }
}
