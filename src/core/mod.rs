//! Core helpers shared by every system
//!
//! - utils/ - logging macros (console on wasm32, stderr natively)
//! - math/  - Vec2 / Rect primitives in screen space (+Y is down)

#[macro_use]
pub mod utils;
pub mod math;
