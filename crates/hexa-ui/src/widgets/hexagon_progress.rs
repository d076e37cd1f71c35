use hexa_engine::coords::{Rect, Segment, Vec2};
use hexa_engine::geometry::hexagon;
use hexa_engine::paint::{Color, StrokeGradient};
use hexa_engine::scene::DrawingSurface;

use crate::hit::contains_hexagon;
use crate::redraw::RedrawRequest;
use crate::style::{ExternalStyle, ProgressState};
use crate::widget::Widget;

/// Share of each edge that is drawn once its slot is complete. The rest is
/// left as a gap split between both ends.
const DRAWN_FRACTION: f32 = 0.8;

/// Progress covered by one edge.
const PERCENT_PER_SLOT: f32 = 100.0 / hexagon::SIDES as f32;

/// Stops in the repeating progress/track stroke gradient.
const GRADIENT_STOPS: usize = 5;

/// Hexagon outline whose six edges light up one after another as progress
/// goes from 0 to 100.
///
/// Edge `i` covers `[i·100/6, (i+1)·100/6)`. Completed edges are drawn at
/// 80 % of their length, centred; the edge containing the current progress
/// grows from its midpoint. Strokes use a banded progress/track gradient.
///
/// # Example
/// ```rust,ignore
/// let mut ring = HexagonProgress::new()
///     .line_width(3.0)
///     .on_redraw(move || window.request_redraw());
/// ring.set_progress(40.0);
/// ```
#[derive(Debug)]
pub struct HexagonProgress {
    state: ProgressState,
    gradient: StrokeGradient,
    redraw: RedrawRequest,
}

impl HexagonProgress {
    pub fn new() -> Self {
        let state = ProgressState::default();
        Self { gradient: build_gradient(&state), state, redraw: RedrawRequest::default() }
    }

    pub fn progress(mut self, v: f32) -> Self { self.state.progress = v; self }
    pub fn line_width(mut self, v: f32) -> Self { self.state.line_width = v; self }

    pub fn track_color(mut self, v: Color) -> Self {
        self.state.track_color = v;
        self.gradient = build_gradient(&self.state);
        self
    }

    pub fn progress_color(mut self, v: Color) -> Self {
        self.state.progress_color = v;
        self.gradient = build_gradient(&self.state);
        self
    }

    pub fn on_redraw(mut self, f: impl FnMut() + 'static) -> Self {
        self.redraw.set(f);
        self
    }

    #[inline]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    #[inline]
    pub fn gradient(&self) -> &StrokeGradient {
        &self.gradient
    }

    // ── mutation ──────────────────────────────────────────────────────────

    pub fn set_progress(&mut self, v: f32) {
        self.state.progress = v;
        self.redraw.request();
    }

    /// Stored as given; painting clamps a negative width to zero.
    pub fn set_line_width(&mut self, v: f32) {
        self.state.line_width = v;
        self.redraw.request();
    }

    pub fn set_track_color(&mut self, v: Color) {
        self.state.track_color = v;
        self.gradient = build_gradient(&self.state);
        self.redraw.request();
    }

    pub fn set_progress_color(&mut self, v: Color) {
        self.state.progress_color = v;
        self.gradient = build_gradient(&self.state);
        self.redraw.request();
    }

    /// Applies theme values in one step. Requests a single redraw when the
    /// style carried at least one value; returns whether it did.
    pub fn apply_external_style(&mut self, style: ExternalStyle) -> bool {
        if !self.state.merge(&style) {
            return false;
        }
        self.gradient = build_gradient(&self.state);
        log::debug!("hexagon progress: external style applied {style:?}");
        self.redraw.request();
        true
    }

    // ── painting ──────────────────────────────────────────────────────────

    /// Strokes one edge as an open six-point path with small notches at
    /// both ends. Returns `false` for a zero-length segment.
    fn stroke_segment(&self, surface: &mut dyn DrawingSurface, segment: Segment) -> bool {
        let dir = segment.direction();
        let Some(unit) = dir.try_normalized() else {
            return false;
        };
        // (dir.y, -dir.x), normalized
        let normal = unit.perp();
        let width = self.state.line_width.max(0.0);
        let shift = width.min(dir.length() * 0.5);

        surface.set_stroke_color(self.state.progress_color);
        surface.set_stroke_gradient(&self.gradient);
        surface.set_line_width(width);

        surface.begin_path();
        surface.move_to(segment.start + dir * 0.5);
        surface.line_to(segment.start);
        surface.line_to(segment.start + normal * shift + unit * shift);
        surface.line_to(segment.end + normal * shift - unit * shift);
        surface.line_to(segment.end);
        surface.line_to(segment.end - dir * 0.5);
        surface.stroke();
        true
    }
}

impl Default for HexagonProgress { fn default() -> Self { Self::new() } }

impl Widget for HexagonProgress {
    fn paint(&self, surface: &mut dyn DrawingSurface, rect: Rect) {
        let vertices = hexagon::vertices(rect.width(), rect.height(), rect.origin, 0.0);
        let progress = self.state.clamped_progress();

        let mut drawn = 0;
        for (slot, edge) in hexagon::edges(&vertices).enumerate() {
            let Some(visible) = visible_fraction(slot, progress) else {
                continue;
            };
            let segment = hexagon::shorten_centered(1.0 - visible, edge);
            if self.stroke_segment(surface, segment) {
                drawn += 1;
            }
        }
        log::trace!("hexagon progress {progress}: {drawn} of {} edges stroked", hexagon::SIDES);
    }

    fn hit_test(&self, local: Vec2, size: Vec2) -> bool {
        contains_hexagon(local, size)
    }
}

/// Share of edge `slot` to draw at `progress`, or `None` to skip the edge.
///
/// Boundaries are strict: at exactly `k·100/6` slot `k-1` is complete and
/// slot `k` is skipped.
fn visible_fraction(slot: usize, progress: f32) -> Option<f32> {
    let lower = PERCENT_PER_SLOT * slot as f32;
    let upper = PERCENT_PER_SLOT * (slot + 1) as f32;

    if upper > progress {
        if lower < progress {
            let fill = (progress - lower) / PERCENT_PER_SLOT;
            Some(DRAWN_FRACTION * fill)
        } else {
            None
        }
    } else {
        Some(DRAWN_FRACTION)
    }
}

fn build_gradient(state: &ProgressState) -> StrokeGradient {
    StrokeGradient::banded(state.progress_color, state.track_color, GRADIENT_STOPS)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use hexa_engine::paint::Paint;
    use hexa_engine::scene::{DrawList, PathEl};

    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 120.0, 120.0);

    fn paint(widget: &HexagonProgress, rect: Rect) -> DrawList {
        let mut list = DrawList::new();
        widget.paint(&mut list, rect);
        list
    }

    fn stroke_count(progress: f32) -> usize {
        paint(&HexagonProgress::new().progress(progress), RECT).strokes().count()
    }

    fn counted() -> (HexagonProgress, Rc<Cell<u32>>) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        (HexagonProgress::new().on_redraw(move || h.set(h.get() + 1)), hits)
    }

    // ── visible_fraction ──────────────────────────────────────────────────

    #[test]
    fn completed_slots_draw_eighty_percent() {
        assert_eq!(visible_fraction(0, 100.0), Some(0.8));
        assert_eq!(visible_fraction(5, 100.0), Some(0.8));
        assert_eq!(visible_fraction(2, 60.0), Some(0.8));
    }

    #[test]
    fn current_slot_scales_with_progress() {
        let half_slot = PERCENT_PER_SLOT * 1.5;
        let v = visible_fraction(1, half_slot).unwrap();
        assert!((v - 0.4).abs() < 1e-5);
    }

    #[test]
    fn future_slots_are_skipped() {
        assert_eq!(visible_fraction(3, 40.0), None);
        assert_eq!(visible_fraction(0, 0.0), None);
    }

    #[test]
    fn exact_boundary_completes_previous_and_skips_next() {
        assert_eq!(visible_fraction(2, 50.0), Some(0.8));
        assert_eq!(visible_fraction(3, 50.0), None);
    }

    #[test]
    fn negative_progress_draws_no_slot() {
        for slot in 0..hexagon::SIDES {
            assert_eq!(visible_fraction(slot, -0.001), None);
            assert_eq!(visible_fraction(slot, -500.0), None);
        }
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn zero_progress_strokes_nothing() {
        assert_eq!(stroke_count(0.0), 0);
        assert_eq!(stroke_count(-20.0), 0);
        assert_eq!(stroke_count(f32::NAN), 0);
    }

    #[test]
    fn full_progress_strokes_all_six_edges() {
        assert_eq!(stroke_count(100.0), 6);
        assert_eq!(stroke_count(180.0), 6);
    }

    #[test]
    fn half_progress_strokes_three_full_edges() {
        let list = paint(&HexagonProgress::new().progress(50.0), RECT);
        let full = paint(&HexagonProgress::new().progress(100.0), RECT);
        assert_eq!(list.strokes().count(), 3);
        for (a, b) in list.strokes().zip(full.strokes()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn partial_slot_is_shorter_than_full_ones() {
        let list = paint(&HexagonProgress::new().progress(25.0), RECT);
        let strokes: Vec<_> = list.strokes().collect();
        assert_eq!(strokes.len(), 2);
        assert!(strokes[1].path.length() < strokes[0].path.length());
    }

    #[test]
    fn stroke_path_shape() {
        let widget = HexagonProgress::new().progress(100.0).line_width(3.0);
        let list = paint(&widget, RECT);
        let stroke = list.strokes().next().unwrap();

        assert_eq!(stroke.width, 3.0);
        assert_eq!(stroke.paint, Paint::Gradient(widget.gradient().clone()));

        let els = stroke.path.elements();
        assert_eq!(els.len(), 6);
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert!(els[1..].iter().all(|el| matches!(el, PathEl::LineTo(_))));

        // Path starts and ends at the midpoint of the trimmed edge.
        let vertices = hexagon::vertices(120.0, 120.0, Vec2::zero(), 0.0);
        let mid = hexagon::edge(&vertices, 0).midpoint();
        assert!(els[0].point().distance(mid) < 1e-3);
        assert!(els[5].point().distance(mid) < 1e-3);

        // Trimmed endpoints are 80 % of the edge apart.
        let edge_len = hexagon::edge(&vertices, 0).length();
        assert!((els[1].point().distance(els[4].point()) - 0.8 * edge_len).abs() < 1e-3);
    }

    #[test]
    fn notch_is_capped_at_half_the_segment() {
        let widget = HexagonProgress::new().progress(0.5).line_width(50.0);
        let list = paint(&widget, RECT);
        let stroke = list.strokes().next().unwrap();
        let els = stroke.path.elements();
        // With the shift capped, both notch points coincide.
        assert!(els[2].point().distance(els[3].point()) < 1e-3);
    }

    #[test]
    fn negative_width_is_kept_but_painted_as_zero() {
        let mut widget = HexagonProgress::new().progress(100.0);
        widget.set_line_width(-2.0);
        assert_eq!(widget.state().line_width, -2.0);

        let list = paint(&widget, RECT);
        assert_eq!(list.strokes().count(), 6);
        assert!(list.strokes().all(|s| s.width == 0.0));
    }

    #[test]
    fn content_origin_offsets_every_point() {
        let at_zero = paint(&HexagonProgress::new().progress(100.0), RECT);
        let moved = paint(&HexagonProgress::new().progress(100.0), Rect::new(10.0, 20.0, 120.0, 120.0));
        for (a, b) in at_zero.strokes().zip(moved.strokes()) {
            for (p, q) in a.path.points().zip(b.path.points()) {
                assert!((q - p).distance(Vec2::new(10.0, 20.0)) < 1e-3);
            }
        }
    }

    #[test]
    fn degenerate_rect_draws_nothing() {
        let list = paint(&HexagonProgress::new().progress(100.0), Rect::new(5.0, 5.0, 0.0, 0.0));
        assert!(list.is_empty());
    }

    #[test]
    fn repeated_paints_are_identical() {
        let widget = HexagonProgress::new().progress(71.0);
        assert_eq!(paint(&widget, RECT).items(), paint(&widget, RECT).items());
    }

    // ── gradient ──────────────────────────────────────────────────────────

    #[test]
    fn gradient_follows_colors() {
        let blue = Color::from_straight(0.0, 0.0, 1.0, 0.5);
        let mut widget = HexagonProgress::new();
        widget.set_track_color(blue);
        let g = widget.gradient();
        assert_eq!(g.stops.len(), 5);
        assert_eq!(g.stops[0].color, widget.state().progress_color);
        assert_eq!(g.stops[1].color, blue);
        assert_eq!(g.stops[3].color, blue);
        assert_eq!(g.stops[4].color, widget.state().progress_color);
    }

    // ── redraw requests ───────────────────────────────────────────────────

    #[test]
    fn each_setter_requests_one_redraw() {
        let (mut widget, hits) = counted();
        widget.set_progress(10.0);
        assert_eq!(hits.get(), 1);
        widget.set_line_width(4.0);
        assert_eq!(hits.get(), 2);
        widget.set_track_color(Color::red());
        assert_eq!(hits.get(), 3);
        widget.set_progress_color(Color::transparent());
        assert_eq!(hits.get(), 4);
    }

    #[test]
    fn external_style_batches_one_redraw() {
        let (mut widget, hits) = counted();
        let blue = Color::from_straight(0.0, 0.0, 1.0, 1.0);
        let applied = widget.apply_external_style(
            ExternalStyle::new().track_color(blue).progress_color(Color::red()).line_width(6.0),
        );
        assert!(applied);
        assert_eq!(hits.get(), 1);
        assert_eq!(widget.state().line_width, 6.0);
        assert_eq!(widget.gradient().stops[1].color, blue);
        assert_eq!(widget.gradient().stops[0].color, Color::red());
    }

    #[test]
    fn empty_external_style_requests_nothing() {
        let (mut widget, hits) = counted();
        assert!(!widget.apply_external_style(ExternalStyle::new()));
        assert_eq!(hits.get(), 0);
    }

    // ── hit test ──────────────────────────────────────────────────────────

    #[test]
    fn hit_test_is_hexagonal() {
        let widget = HexagonProgress::new();
        let size = Vec2::new(100.0, 100.0);
        assert!(widget.hit_test(Vec2::new(50.0, 50.0), size));
        assert!(!widget.hit_test(Vec2::new(1.0, 1.0), size));
    }
}
