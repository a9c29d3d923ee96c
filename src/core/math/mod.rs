//! Math primitives
//!
//! Screen-space convention: +X is right, +Y is DOWN. "Up" is `Vec2::UP` = (0, -1).

mod vec2;
mod rect;

pub use vec2::{angles_differ, sign, snap_zero, Vec2, ANGLE_EPSILON};
pub use rect::Rect;
