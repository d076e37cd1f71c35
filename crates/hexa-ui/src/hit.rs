//! Hit testing for flat-top/flat-bottom hexagons.

use hexa_engine::coords::Vec2;

/// Approximate point-in-hexagon test in local coordinates.
///
/// The box is split into a central band (`0.25w < x < 0.75w`), which always
/// hits, and two side quadrants. A side point hits when its 1-norm distance
/// from the quadrant anchor `(0.25w or 0.75w, h/2)` is at most `0.25w`.
/// This is exact for the side triangles of a regular hexagon whose width is
/// close to its height. Points exactly on `x = 0.25w` or `x = 0.75w` and
/// points outside the box never hit.
pub fn contains_hexagon(point: Vec2, size: Vec2) -> bool {
    let (w, h) = (size.x, size.y);
    if !(point.x >= 0.0 && point.y >= 0.0 && point.x < w && point.y < h) {
        return false;
    }

    let left = w * 0.25;
    let right = w * 0.75;
    if point.x > left && point.x < right {
        return true;
    }

    let anchor_x = if point.x < left {
        left
    } else if point.x > right {
        right
    } else {
        return false;
    };
    let norm_1 = (point.x - anchor_x).abs() + (point.y - h * 0.5).abs();
    norm_1 <= w * 0.25
}
