//! 2D geometry for a UI renderer and hit-tester.
//!
//! This crate provides rectangle algebra, polygon topology predicates, a gift-wrapping
//! convex hull and Sutherland-Hodgman clipping. Hull and clipping work on plain 2D points,
//! on homogeneous points that carry perspective, and on points carrying anti-aliasing masks.
//!
//! Everything is synchronous and allocation-free for typical inputs. Results are written
//! to caller-supplied buffers, and each call returns the count used.
//!
//! # Quick Start
//!
//! ```
//! use clipgeom::prelude::*;
//!
//! let quad = [
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(0.0, 1.0),
//!     Vec2::new(1.0, 1.0),
//!     Vec2::new(1.0, 0.0),
//! ];
//! let mut out = [Vec2::ZERO; 8];
//! let count = clip_to_rectangle(&quad, &RectF::new(0.5, 0.5, 1.0, 1.0), &mut out)?;
//! assert_eq!(count, 4);
//! # Ok::<(), clipgeom::ClipError>(())
//! ```

pub mod clipper;
pub mod error;
pub mod hull;
pub mod math;
pub mod point;
pub mod polygon;
pub mod rect;

// Re-export commonly needed items at crate root for convenience
pub use clipper::{clip_to_polygon, clip_to_rectangle, Clipper};
pub use error::{ClipError, Result};
pub use hull::{compute_convex_hull, compute_convex_hull_in_place};
pub use point::{AaMask, AaPoint, ClipPoint, EdgeAa, ScreenPoint};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use clipgeom::prelude::*;
/// ```
pub mod prelude {
    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec4::Vec4;

    // Points
    pub use crate::point::{AaMask, AaPoint, ClipPoint, EdgeAa, ScreenPoint};

    // Rects
    pub use crate::rect::{Rect, RectF, RectFRb, RectRb, Thickness};

    // Topology
    pub use crate::polygon::{
        do_polygons_intersect, ensure_ccw_winding_order, is_entirely_contained,
        is_point_inside_polygon, is_polygon_concave, which_side, Side,
    };

    // Hull & clipping
    pub use crate::clipper::{clip_to_polygon, clip_to_rectangle, Clipper};
    pub use crate::hull::{compute_convex_hull, compute_convex_hull_in_place};
}
