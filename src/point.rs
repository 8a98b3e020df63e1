//! Point representations accepted by the topology, hull and clipping code.
//!
//! Three kinds of points flow through the same algorithms:
//!
//! - [`Vec2`]: plain screen-space points.
//! - [`Vec4`]: homogeneous points that went through a perspective transform.
//! - [`AaPoint`]: homogeneous points carrying anti-aliasing masks for their two edges.
//!
//! [`ScreenPoint`] is all the read-only algorithms need: a 2D screen position obtained by
//! perspective division. [`ClipPoint`] adds the one operation clipping needs on top of that,
//! creating a new vertex where a segment crosses a clip line.

use crate::clipper::intersect::{
    intersect_homogeneous_segment_with_line, intersect_segment_with_line,
};
use crate::math::{Vec2, Vec4};
use crate::rect::RectF;

/// A point with a position on screen.
pub trait ScreenPoint: Copy {
    /// The point's screen position, `(x/w, y/w)` for homogeneous points.
    fn screen(&self) -> Vec2;
}

/// A point that the polygon clipper can split edges at.
pub trait ClipPoint: ScreenPoint {
    /// Intersects the segment `self -> end` with the infinite line through `line_start` and
    /// `line_end`, both in screen space.
    ///
    /// `end_inside` tells whether `end` lies inside the clip edge, which decides which side of
    /// the new vertex is the freshly introduced clip edge. Returns `None` for parallel lines or
    /// when the crossing falls outside the segment by more than `fuzz`.
    fn intersect_line(
        &self,
        end: &Self,
        line_start: Vec2,
        line_end: Vec2,
        end_inside: bool,
        fuzz: f64,
    ) -> Option<Self>;
}

impl ScreenPoint for Vec2 {
    fn screen(&self) -> Vec2 {
        *self
    }
}

impl ClipPoint for Vec2 {
    fn intersect_line(
        &self,
        end: &Self,
        line_start: Vec2,
        line_end: Vec2,
        _end_inside: bool,
        fuzz: f64,
    ) -> Option<Self> {
        intersect_segment_with_line(*self, *end, line_start, line_end, fuzz)
    }
}

impl ScreenPoint for Vec4 {
    fn screen(&self) -> Vec2 {
        self.perspective_divide()
    }
}

impl ClipPoint for Vec4 {
    fn intersect_line(
        &self,
        end: &Self,
        line_start: Vec2,
        line_end: Vec2,
        _end_inside: bool,
        fuzz: f64,
    ) -> Option<Self> {
        intersect_homogeneous_segment_with_line(*self, *end, line_start, line_end, fuzz)
    }
}

/// Anti-aliasing treatment for one side of a vertex.
///
/// Each component is -1, 0 or 1. Zero means the edge is not anti-aliased; a non-zero value
/// means it is, with the sign selecting an inward or outward shift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AaMask {
    pub interior: i8,
    pub exterior: i8,
}

impl AaMask {
    pub const NONE: Self = Self::new(0, 0);
    pub const FULL: Self = Self::new(1, 1);

    pub const fn new(interior: i8, exterior: i8) -> Self {
        Self { interior, exterior }
    }

    pub fn is_anti_aliased(&self) -> bool {
        self.interior != 0 || self.exterior != 0
    }
}

/// Per-edge AA state, as the 2-bit flags used to describe a rectangle's edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeAa {
    /// `00`: no anti-aliasing, no shift.
    #[default]
    None,
    /// `01`: shift inwards.
    Inward,
    /// `10`: shift outwards.
    Outward,
    /// `11`: anti-aliased; interior points shift in and exterior points shift out.
    Both,
}

impl EdgeAa {
    /// Decodes the 2-bit representation. Returns `None` for unsupported states.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(Self::None),
            1 => Some(Self::Inward),
            2 => Some(Self::Outward),
            3 => Some(Self::Both),
            _ => None,
        }
    }

    pub fn mask(self) -> AaMask {
        match self {
            Self::None => AaMask::new(0, 0),
            Self::Inward => AaMask::new(1, -1),
            Self::Outward => AaMask::new(-1, 1),
            Self::Both => AaMask::new(1, 1),
        }
    }
}

/// A homogeneous point carrying AA masks for the edges on either side of it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AaPoint {
    pub position: Vec4,
    /// Treatment of the edge from the previous vertex to this one.
    pub to_prev: AaMask,
    /// Treatment of the edge from this vertex to the next one.
    pub to_next: AaMask,
}

impl AaPoint {
    pub const fn new(position: Vec4, to_prev: AaMask, to_next: AaMask) -> Self {
        Self {
            position,
            to_prev,
            to_next,
        }
    }

    /// Builds the counter-clockwise quad of `rect` with the given AA state per edge.
    ///
    /// The corners are bottom-right, top-right, top-left, bottom-left, so each vertex's
    /// `to_prev`/`to_next` masks pick up the edge between it and its neighbour.
    pub fn quad_from_rect(
        rect: &RectF,
        left: EdgeAa,
        top: EdgeAa,
        right: EdgeAa,
        bottom: EdgeAa,
    ) -> [AaPoint; 4] {
        let [br, tr, tl, bl] = rect.to_points_ccw_homogeneous();

        [
            AaPoint::new(br, bottom.mask(), right.mask()),
            AaPoint::new(tr, right.mask(), top.mask()),
            AaPoint::new(tl, top.mask(), left.mask()),
            AaPoint::new(bl, left.mask(), bottom.mask()),
        ]
    }

    /// Masks for a vertex created where the segment `start -> end` crosses a clip edge.
    ///
    /// The part of the old edge that survives keeps the old edge's mask. The side facing the
    /// new clip edge is always anti-aliased.
    ///
    /// ```text
    ///         clip edge
    ///           /
    ///   Z -----Y-------- X      X inside, Z outside: Y = crossing of X -> Z
    ///   |     /                    Y.to_prev = X.to_next, Y.to_next = FULL
    ///   |    /
    ///   |   /
    ///   W  /                    Z outside, V inside: W = crossing of Z -> V
    ///   | /                        W.to_prev = FULL, W.to_next = V.to_prev
    ///   V
    /// ```
    pub fn clip_point_masks(start: &AaPoint, end: &AaPoint, end_inside: bool) -> (AaMask, AaMask) {
        if end_inside {
            (AaMask::FULL, end.to_prev)
        } else {
            (start.to_next, AaMask::FULL)
        }
    }
}

impl ScreenPoint for AaPoint {
    fn screen(&self) -> Vec2 {
        self.position.perspective_divide()
    }
}

impl ClipPoint for AaPoint {
    fn intersect_line(
        &self,
        end: &Self,
        line_start: Vec2,
        line_end: Vec2,
        end_inside: bool,
        fuzz: f64,
    ) -> Option<Self> {
        let position = self.position.intersect_line(
            &end.position,
            line_start,
            line_end,
            end_inside,
            fuzz,
        )?;
        let (to_prev, to_next) = Self::clip_point_masks(self, end, end_inside);
        Some(Self::new(position, to_prev, to_next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_aa_bits_decode_to_masks() {
        assert_eq!(EdgeAa::from_bits(0).map(EdgeAa::mask), Some(AaMask::new(0, 0)));
        assert_eq!(EdgeAa::from_bits(1).map(EdgeAa::mask), Some(AaMask::new(1, -1)));
        assert_eq!(EdgeAa::from_bits(2).map(EdgeAa::mask), Some(AaMask::new(-1, 1)));
        assert_eq!(EdgeAa::from_bits(3).map(EdgeAa::mask), Some(AaMask::new(1, 1)));
        assert_eq!(EdgeAa::from_bits(4), None);
    }

    #[test]
    fn quad_from_rect_assigns_edge_masks() {
        let rect = RectF::new(0.0, 0.0, 10.0, 5.0);
        let quad = AaPoint::quad_from_rect(
            &rect,
            EdgeAa::Both,
            EdgeAa::None,
            EdgeAa::Inward,
            EdgeAa::Outward,
        );

        // bottom-right: bottom edge behind, right edge ahead
        assert_eq!(quad[0].position, Vec4::new(10.0, 5.0, 0.0, 1.0));
        assert_eq!(quad[0].to_prev, EdgeAa::Outward.mask());
        assert_eq!(quad[0].to_next, EdgeAa::Inward.mask());
        // top-left: top edge behind, left edge ahead
        assert_eq!(quad[2].position, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(quad[2].to_prev, AaMask::NONE);
        assert_eq!(quad[2].to_next, AaMask::FULL);
        // masks agree across each shared edge
        for i in 0..4 {
            assert_eq!(quad[i].to_next, quad[(i + 1) % 4].to_prev);
        }
    }

    #[test]
    fn clip_point_masks_mark_new_edge() {
        let a = AaPoint::new(Vec4::point(0.0, 0.0, 0.0), AaMask::NONE, AaMask::new(1, -1));
        let b = AaPoint::new(Vec4::point(1.0, 0.0, 0.0), AaMask::new(-1, 1), AaMask::NONE);

        assert_eq!(
            AaPoint::clip_point_masks(&a, &b, true),
            (AaMask::FULL, AaMask::new(-1, 1))
        );
        assert_eq!(
            AaPoint::clip_point_masks(&a, &b, false),
            (AaMask::new(1, -1), AaMask::FULL)
        );
    }

    #[test]
    fn screen_position_divides_by_w() {
        let p = AaPoint::new(Vec4::new(4.0, 8.0, 1.0, 2.0), AaMask::NONE, AaMask::NONE);
        assert_eq!(p.screen(), Vec2::new(2.0, 4.0));
        assert_eq!(Vec2::new(3.0, 1.0).screen(), Vec2::new(3.0, 1.0));
    }
}
