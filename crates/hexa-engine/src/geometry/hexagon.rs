//! Regular hexagon construction and segment trimming.
//!
//! Every function here is pure: identical inputs give bit-identical outputs.

use core::f32::consts::TAU;

use crate::coords::{Segment, Vec2};

/// Number of hexagon vertices (and edges).
pub const SIDES: usize = 6;

/// Rotation applied before any caller offset so that vertex 0 sits at the
/// upper-left corner and the hexagon has a flat top and bottom.
const BASE_ROTATION_DEG: f32 = -120.0;

/// Circumradius of the hexagon inscribed in a `width` x `height` box.
#[inline]
pub fn radius(width: f32, height: f32) -> f32 {
    width.min(height) * 0.5
}

/// The six vertices of the hexagon inscribed in the box `(center, width,
/// height)`, where `center` is the box origin offset.
///
/// Vertices are spaced 60° apart on a circle of [`radius`] around
/// `(width / 2, height / 2) + center`, starting at -120° + `angle_offset`.
pub fn vertices(width: f32, height: f32, center: Vec2, angle_offset: f32) -> [Vec2; SIDES] {
    let r = radius(width, height);
    let hex_center = Vec2::new(width * 0.5, height * 0.5) + center;
    let base = BASE_ROTATION_DEG.to_radians();

    core::array::from_fn(|i| {
        let angle = TAU / SIDES as f32 * i as f32 + angle_offset + base;
        hex_center + Vec2::new(angle.cos() * r, angle.sin() * r)
    })
}

/// Edge `i` runs from vertex `i` to vertex `i + 1` (wrapping).
#[inline]
pub fn edge(vertices: &[Vec2; SIDES], i: usize) -> Segment {
    Segment::new(vertices[i % SIDES], vertices[(i + 1) % SIDES])
}

/// All six edges in vertex order.
pub fn edges(vertices: &[Vec2; SIDES]) -> impl Iterator<Item = Segment> + '_ {
    (0..SIDES).map(move |i| edge(vertices, i))
}

/// Shrinks `segment` symmetrically about its midpoint so that `1 - fraction`
/// of its length remains.
///
/// A zero-length segment is returned unchanged.
pub fn shorten_centered(fraction: f32, segment: Segment) -> Segment {
    let Some(unit) = segment.direction().try_normalized() else {
        return segment;
    };
    let half_trim = unit * (segment.length() * fraction * 0.5);
    Segment::new(segment.start + half_trim, segment.end - half_trim)
}

/// Removes `fraction` of the segment's length from the end (`cut_from_end`)
/// or from the start, keeping the other endpoint fixed.
///
/// A zero-length segment is returned unchanged.
pub fn shorten_from_end(fraction: f32, segment: Segment, cut_from_end: bool) -> Segment {
    let Some(unit) = segment.direction().try_normalized() else {
        return segment;
    };
    let trim = unit * (segment.length() * fraction);
    if cut_from_end {
        Segment::new(segment.start, segment.end - trim)
    } else {
        Segment::new(segment.start + trim, segment.end)
    }
}

/// Reorders the endpoints so that `start.y >= end.y`.
#[inline]
pub fn orient_top_to_bottom(segment: Segment) -> Segment {
    if segment.start.y < segment.end.y {
        segment.reversed()
    } else {
        segment
    }
}
