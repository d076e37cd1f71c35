use super::Color;

/// A single gradient stop.
///
/// `t` is the position along the stroke in [0, 1]; the stop's alpha is
/// carried by `color`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Color ramp applied along the length of a stroked path.
///
/// Unlike a fill gradient it has no start/end points: position 0 is the
/// first point of the path and 1 the last.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeGradient {
    pub stops: Vec<ColorStop>,
}

impl StrokeGradient {
    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self { stops }
    }

    /// Evenly spaced stops alternating `primary`, `secondary`, `primary`, …
    ///
    /// `count` is clamped to at least 2 so the result is always usable.
    pub fn banded(primary: Color, secondary: Color, count: usize) -> Self {
        let count = count.max(2);
        let last = (count - 1) as f32;
        let stops = (0..count)
            .map(|i| {
                let color = if i % 2 == 0 { primary } else { secondary };
                ColorStop::new(i as f32 / last, color)
            })
            .collect();
        Self { stops }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.windows(2).all(|w| w[0].t <= w[1].t)
    }
}
