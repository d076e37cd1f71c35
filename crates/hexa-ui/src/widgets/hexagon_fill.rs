use hexa_engine::coords::{Rect, Segment, Vec2};
use hexa_engine::geometry::hexagon;
use hexa_engine::paint::Color;
use hexa_engine::scene::DrawingSurface;

use crate::redraw::RedrawRequest;
use crate::style::{ExternalStyle, ProgressState};
use crate::widget::Widget;

/// Extra rotation for the filled hexagon. Five full turns, so the
/// vertices land where the outline's do (up to rounding).
pub const FILL_ROTATION_DEG: f32 = 1800.0;

/// Width of the outline stroked around the filled area.
const OUTLINE_WIDTH: f32 = 1.0;

/// Vertical extent of the fill and the current cut line, in the same
/// coordinates as the content rect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillBand {
    /// Cut line at 100 %: one unit above the top flat edge.
    pub start_y: f32,
    /// Cut line at 0 %: one unit below the bottom flat edge.
    pub max_y: f32,
    /// Everything at or below this line (larger y) is filled.
    pub cut_y: f32,
}

impl FillBand {
    /// `progress` is expected already capped at 100.
    pub fn new(width: f32, height: f32, origin: Vec2, progress: f32) -> Self {
        let radius = hexagon::radius(width, height);
        let triangle_height = radius * 30f32.to_radians().cos();
        // One unit of slack so the flat edges land strictly inside the band.
        let height_diff = radius - triangle_height - 1.0;
        let start_y = height_diff + origin.y;
        let max_y = height - height_diff + origin.y;

        let fraction = progress.min(100.0) / 100.0;
        let cut_y = start_y + (max_y - start_y) * (1.0 - fraction);
        Self { start_y, max_y, cut_y }
    }
}

/// Hexagon that fills from the bottom up like a liquid level.
///
/// Each frame the hexagon outline is clipped against a horizontal cut line
/// and the surviving polygon is filled with the progress color and
/// outlined with the track color.
///
/// # Example
/// ```rust,ignore
/// let mut gauge = HexagonFill::new()
///     .progress_color(Color::from_straight(0.1, 0.6, 0.9, 1.0))
///     .on_redraw(move || window.request_redraw());
/// gauge.set_progress(75.0);
/// ```
#[derive(Debug, Default)]
pub struct HexagonFill {
    state: ProgressState,
    redraw: RedrawRequest,
}

impl HexagonFill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(mut self, v: f32) -> Self { self.state.progress = v; self }
    pub fn track_color(mut self, v: Color) -> Self { self.state.track_color = v; self }
    pub fn progress_color(mut self, v: Color) -> Self { self.state.progress_color = v; self }
    pub fn on_redraw(mut self, f: impl FnMut() + 'static) -> Self {
        self.redraw.set(f);
        self
    }

    #[inline]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn set_progress(&mut self, v: f32) {
        self.state.progress = v;
        self.redraw.request();
    }

    pub fn set_track_color(&mut self, v: Color) {
        self.state.track_color = v;
        self.redraw.request();
    }

    pub fn set_progress_color(&mut self, v: Color) {
        self.state.progress_color = v;
        self.redraw.request();
    }

    /// Applies theme colors in one step and requests a single redraw when
    /// the style carried a color. `line_width` is ignored: the fill outline
    /// is always one unit wide.
    pub fn apply_external_style(&mut self, style: ExternalStyle) -> bool {
        let colors = ExternalStyle { line_width: None, ..style };
        if !self.state.merge(&colors) {
            return false;
        }
        log::debug!("hexagon fill: external style applied {colors:?}");
        self.redraw.request();
        true
    }
}

impl Widget for HexagonFill {
    fn paint(&self, surface: &mut dyn DrawingSurface, rect: Rect) {
        let (width, height) = (rect.width(), rect.height());
        if !(hexagon::radius(width, height) > 0.0) {
            return;
        }
        let vertices =
            hexagon::vertices(width, height, rect.origin, FILL_ROTATION_DEG.to_radians());
        let band = FillBand::new(width, height, rect.origin, self.state.clamped_progress());

        surface.set_stroke_color(self.state.track_color);
        surface.set_fill_color(self.state.progress_color);
        surface.set_line_width(OUTLINE_WIDTH);
        surface.begin_path();

        let mut started = false;
        for edge in hexagon::edges(&vertices) {
            let Some(edge) = clip_edge(edge, band.cut_y) else {
                continue;
            };
            if !started {
                surface.move_to(edge.start);
                started = true;
            }
            surface.line_to(edge.end);
        }

        if started {
            surface.fill();
            surface.stroke();
        }
        log::trace!("hexagon fill: cut at y = {} (filled: {started})", band.cut_y);
    }
}

/// Part of `edge` at or below the cut line (y >= `cut_y`), or `None` when
/// nothing of it remains.
fn clip_edge(edge: Segment, cut_y: f32) -> Option<Segment> {
    if edge.start.y <= cut_y && edge.end.y <= cut_y {
        return None;
    }
    if edge.start.y >= cut_y && edge.end.y >= cut_y {
        return Some(edge);
    }

    // Straddles the line: drop the endpoint above it.
    let oriented = hexagon::orient_top_to_bottom(edge);
    let (y_max, y_min) = (oriented.start.y, oriented.end.y);
    let span = y_max - y_min;
    if !(span > 0.0) {
        return None;
    }
    let cut_factor = (cut_y - y_min) / span;
    let cut_from_end = edge.start.y >= edge.end.y;
    Some(hexagon::shorten_from_end(cut_factor, edge, cut_from_end))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use hexa_engine::paint::Paint;
    use hexa_engine::scene::{DrawList, PathEl};

    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn paint(widget: &HexagonFill, rect: Rect) -> DrawList {
        let mut list = DrawList::new();
        widget.paint(&mut list, rect);
        list
    }

    fn seg(x0: f32, y0: f32, x1: f32, y1: f32) -> Segment {
        Segment::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    // ── FillBand ──────────────────────────────────────────────────────────

    #[test]
    fn band_spans_flat_edges_plus_one_unit() {
        let band = FillBand::new(100.0, 100.0, Vec2::zero(), 100.0);
        let apothem = 50.0 * 30f32.to_radians().cos();
        assert!((band.start_y - (50.0 - apothem - 1.0)).abs() < 1e-4);
        assert!((band.max_y - (50.0 + apothem + 1.0)).abs() < 1e-4);
        assert_eq!(band.cut_y, band.start_y);
    }

    #[test]
    fn half_progress_cuts_midway() {
        let band = FillBand::new(100.0, 100.0, Vec2::new(0.0, 30.0), 50.0);
        let mid = (band.start_y + band.max_y) * 0.5;
        assert!((band.cut_y - mid).abs() < 1e-4);
    }

    #[test]
    fn zero_progress_cuts_at_bottom() {
        let band = FillBand::new(80.0, 120.0, Vec2::zero(), 0.0);
        assert!((band.cut_y - band.max_y).abs() < 1e-4);
    }

    #[test]
    fn progress_is_capped_at_one_hundred() {
        let a = FillBand::new(100.0, 100.0, Vec2::zero(), 100.0);
        let b = FillBand::new(100.0, 100.0, Vec2::zero(), 400.0);
        assert_eq!(a, b);
    }

    // ── clip_edge ─────────────────────────────────────────────────────────

    #[test]
    fn edge_above_cut_is_excluded() {
        assert_eq!(clip_edge(seg(0.0, 0.0, 10.0, 5.0), 5.0), None);
    }

    #[test]
    fn edge_below_cut_is_kept_whole() {
        let e = seg(0.0, 6.0, 10.0, 9.0);
        assert_eq!(clip_edge(e, 6.0), Some(e));
    }

    #[test]
    fn straddling_edge_keeps_lower_part() {
        // Going down: the start is above the cut and moves onto it.
        let down = clip_edge(seg(0.0, 0.0, 0.0, 10.0), 4.0).unwrap();
        assert!((down.start.y - 4.0).abs() < 1e-5);
        assert_eq!(down.end, Vec2::new(0.0, 10.0));

        // Going up: the end is above the cut and moves onto it.
        let up = clip_edge(seg(10.0, 10.0, 0.0, 0.0), 4.0).unwrap();
        assert_eq!(up.start, Vec2::new(10.0, 10.0));
        assert!(up.end.distance(Vec2::new(4.0, 4.0)) < 1e-4);
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_fill_issues_no_commands() {
        assert!(paint(&HexagonFill::new(), RECT).is_empty());
        assert!(paint(&HexagonFill::new().progress(-30.0), RECT).is_empty());
    }

    #[test]
    fn full_fill_is_the_vertex_loop() {
        let list = paint(&HexagonFill::new().progress(100.0), RECT);
        let fill = list.fills().next().unwrap();
        let vertices = hexagon::vertices(100.0, 100.0, Vec2::zero(), FILL_ROTATION_DEG.to_radians());

        let expected: Vec<Vec2> = vertices.iter().copied().chain([vertices[0]]).collect();
        let points: Vec<Vec2> = fill.path.points().collect();
        assert_eq!(points, expected);
        assert!(matches!(fill.path.elements()[0], PathEl::MoveTo(_)));
    }

    #[test]
    fn fill_then_outline() {
        let widget = HexagonFill::new().progress(60.0);
        let list = paint(&widget, RECT);
        assert_eq!(list.items().len(), 2);

        let fill = list.fills().next().unwrap();
        let stroke = list.strokes().next().unwrap();
        assert_eq!(fill.color, widget.state().progress_color);
        assert_eq!(stroke.paint, Paint::Solid(widget.state().track_color));
        assert_eq!(stroke.width, 1.0);
        assert_eq!(fill.path, stroke.path);
    }

    #[test]
    fn partial_fill_stays_below_cut_line() {
        for &progress in &[10.0, 35.0, 50.0, 65.0, 90.0] {
            let list = paint(&HexagonFill::new().progress(progress), RECT);
            let band = FillBand::new(100.0, 100.0, Vec2::zero(), progress);
            let fill = list.fills().next().unwrap();
            assert!(fill.path.points().all(|p| p.y >= band.cut_y - 1e-3), "progress {progress}");
            // The polygon is closed by its first and last points on the cut line.
            let first = fill.path.points().next().unwrap();
            let last = fill.path.points().last().unwrap();
            assert!((first.y - band.cut_y).abs() < 1e-3, "progress {progress}");
            assert!((last.y - band.cut_y).abs() < 1e-3, "progress {progress}");
        }
    }

    #[test]
    fn more_progress_covers_more_height() {
        let top = |progress: f32| {
            let list = paint(&HexagonFill::new().progress(progress), RECT);
            let fill = list.fills().next().unwrap();
            fill.path.points().map(|p| p.y).fold(f32::INFINITY, f32::min)
        };
        assert!(top(80.0) < top(40.0));
        assert!(top(40.0) < top(20.0));
    }

    #[test]
    fn degenerate_rect_draws_nothing() {
        assert!(paint(&HexagonFill::new().progress(100.0), Rect::new(0.0, 0.0, 0.0, 0.0)).is_empty());
    }

    // ── redraw requests ───────────────────────────────────────────────────

    #[test]
    fn setters_and_style_request_redraws() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut widget = HexagonFill::new().on_redraw(move || h.set(h.get() + 1));

        widget.set_progress(20.0);
        widget.set_track_color(Color::red());
        widget.set_progress_color(Color::red());
        assert_eq!(hits.get(), 3);

        assert!(widget.apply_external_style(
            ExternalStyle::new().track_color(Color::transparent()).progress_color(Color::transparent()),
        ));
        assert_eq!(hits.get(), 4);

        assert!(!widget.apply_external_style(ExternalStyle::new().line_width(9.0)));
        assert_eq!(hits.get(), 4);
        assert_eq!(widget.state().track_color, Color::transparent());
    }

    #[test]
    fn default_hit_test_is_the_content_rect() {
        let widget = HexagonFill::new();
        let size = Vec2::new(100.0, 100.0);
        assert!(widget.hit_test(Vec2::new(1.0, 1.0), size));
        assert!(!widget.hit_test(Vec2::new(100.0, 50.0), size));
    }
}
