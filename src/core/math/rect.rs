use serde::{Deserialize, Serialize};

use super::Vec2;

/// Axis-aligned rectangle (screen space: top < bottom)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_center_size(center: Vec2, width: f32, height: f32) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        Self {
            left: center.x - hw,
            top: center.y - hh,
            right: center.x + hw,
            bottom: center.y + hh,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// Shrink by `d` on every side
    pub fn inset(&self, d: f32) -> Self {
        Self {
            left: self.left + d,
            top: self.top + d,
            right: self.right - d,
            bottom: self.bottom - d,
        }
    }

    pub fn translate(&self, v: Vec2) -> Self {
        Self {
            left: self.left + v.x,
            top: self.top + v.y,
            right: self.right + v.x,
            bottom: self.bottom + v.y,
        }
    }

    /// Corners in clockwise order on screen (TL, TR, BR, BL)
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left, self.top),
            Vec2::new(self.right, self.top),
            Vec2::new(self.right, self.bottom),
            Vec2::new(self.left, self.bottom),
        ]
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_size_round_trip() {
        let r = Rect::from_center_size(Vec2::new(10.0, 20.0), 32.0, 16.0);
        assert_eq!(r, Rect::new(-6.0, 12.0, 26.0, 28.0));
        assert_eq!(r.width(), 32.0);
        assert_eq!(r.height(), 16.0);
        assert_eq!(r.center(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn inset_shrinks_all_sides() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset(1.0);
        assert_eq!(r, Rect::new(1.0, 1.0, 9.0, 9.0));
    }
}
