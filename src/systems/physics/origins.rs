use crate::core::math::{Rect, Vec2};
use crate::domain::config::clamp_ray_count;

/// Corner points the ray fans start from
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RayOrigins {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl RayOrigins {
    pub fn from_bounds(bounds: &Rect) -> Self {
        Self {
            top_left: Vec2::new(bounds.left, bounds.top),
            top_right: Vec2::new(bounds.right, bounds.top),
            bottom_left: Vec2::new(bounds.left, bounds.bottom),
            bottom_right: Vec2::new(bounds.right, bounds.bottom),
        }
    }
}

/// Distance between neighbouring rays of each fan
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RaySpacing {
    /// Vertical gap between the rays cast left/right
    pub horizontal: f32,
    /// Horizontal gap between the rays cast up/down
    pub vertical: f32,
}

impl RaySpacing {
    /// Ray counts are clamped to at least 2 first, so this never divides by zero
    pub fn compute(bounds: &Rect, horizontal_ray_count: u32, vertical_ray_count: u32) -> Self {
        let h = clamp_ray_count(horizontal_ray_count);
        let v = clamp_ray_count(vertical_ray_count);
        Self {
            horizontal: bounds.height() / (h - 1) as f32,
            vertical: bounds.width() / (v - 1) as f32,
        }
    }
}
