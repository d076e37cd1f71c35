use hexa_engine::paint::Color;

/// Track color used until the host or a theme overrides it.
pub const DEFAULT_TRACK_COLOR: Color = Color::red();
/// Progress color used until the host or a theme overrides it.
pub const DEFAULT_PROGRESS_COLOR: Color = Color::from_premul(0.7, 0.0, 0.0, 1.0);
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Persistent state of a hexagon progress widget.
///
/// `progress` is nominally in `[0, 100]`. Out-of-range values are stored
/// as given and only clamped when painting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    pub progress: f32,
    pub track_color: Color,
    pub progress_color: Color,
    /// Outline stroke width. The filled widget always strokes at 1.
    pub line_width: f32,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            track_color: DEFAULT_TRACK_COLOR,
            progress_color: DEFAULT_PROGRESS_COLOR,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl ProgressState {
    /// Progress with the upper bound clamped to 100 and NaN read as 0.
    /// The lower bound is left alone.
    #[inline]
    pub fn clamped_progress(&self) -> f32 {
        if self.progress.is_nan() {
            0.0
        } else {
            self.progress.min(100.0)
        }
    }

    /// Copies every field present in `style`. Returns whether anything was
    /// present.
    pub(crate) fn merge(&mut self, style: &ExternalStyle) -> bool {
        if let Some(c) = style.track_color {
            self.track_color = c;
        }
        if let Some(c) = style.progress_color {
            self.progress_color = c;
        }
        if let Some(w) = style.line_width {
            self.line_width = w;
        }
        !style.is_empty()
    }
}

/// Theme values resolved by the host's style system.
///
/// Hand the whole set to `apply_external_style` so the widget updates every
/// field before requesting a single redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExternalStyle {
    pub track_color: Option<Color>,
    pub progress_color: Option<Color>,
    pub line_width: Option<f32>,
}

impl ExternalStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_color(mut self, v: Color) -> Self { self.track_color = Some(v); self }
    pub fn progress_color(mut self, v: Color) -> Self { self.progress_color = Some(v); self }
    pub fn line_width(mut self, v: f32) -> Self { self.line_width = Some(v); self }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.track_color.is_none() && self.progress_color.is_none() && self.line_width.is_none()
    }
}
