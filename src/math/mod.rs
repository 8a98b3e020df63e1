//! Scalar and vector math underlying every other module.

pub mod constants;
pub mod scalar;
pub mod vec2;
pub mod vec4;

pub use scalar::{clamp_value, is_close, is_less_than};
pub use vec2::Vec2;
pub use vec4::Vec4;
