use hexa_engine::coords::{Rect, Vec2};
use hexa_engine::scene::DrawingSurface;

// ── Widget trait ──────────────────────────────────────────────────────────

/// A drawable widget the host can paint and hit-test.
///
/// There is no layout pass: the host owns the content rectangle and hands
/// it over on every redraw.
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use hexa_ui::prelude::*;
///
/// pub struct Dot { color: Color }
///
/// impl Widget for Dot {
///     fn paint(&self, surface: &mut dyn DrawingSurface, rect: Rect) {
///         surface.set_fill_color(self.color);
///         surface.begin_path();
///         surface.move_to(rect.origin);
///         surface.line_to(rect.max());
///         surface.line_to(Vec2::new(rect.origin.x, rect.max().y));
///         surface.fill();
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Draw this widget into `surface` within the bounds of `rect`.
    ///
    /// Must not keep anything from one call to the next: each paint is
    /// computed from the widget's persistent state alone.
    fn paint(&self, surface: &mut dyn DrawingSurface, rect: Rect);

    /// Whether `local` (relative to the content rect's origin) lies on the
    /// widget, given the content `size`.
    ///
    /// The default is the half-open content rectangle.
    fn hit_test(&self, local: Vec2, size: Vec2) -> bool {
        Rect::from_origin_size(Vec2::zero(), size).contains(local)
    }
}
