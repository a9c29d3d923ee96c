use serde::{Deserialize, Serialize};

/// Slope angles closer than this are treated as the same slope (radians)
pub const ANGLE_EPSILON: f32 = 1e-4;

/// Resolved components below this magnitude snap to zero
const ZERO_SNAP: f32 = 1e-6;

/// 2D Vector for physics calculations
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    /// Screen-space up (Y grows downward)
    pub const UP: Vec2 = Vec2 { x: 0.0, y: -1.0 };
    pub const DOWN: Vec2 = Vec2 { x: 0.0, y: 1.0 };
    pub const LEFT: Vec2 = Vec2 { x: -1.0, y: 0.0 };
    pub const RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross)
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0001 {
            Self { x: self.x / len, y: self.y / len }
        } else {
            Self::zero()
        }
    }

    /// Unsigned angle between two vectors in radians, in [0, PI].
    ///
    /// The cosine is clamped so nearly parallel unit vectors never produce NaN.
    /// Returns 0 when either vector has zero length.
    pub fn angle_to(&self, other: Vec2) -> f32 {
        let denom = self.length() * other.length();
        if denom <= f32::EPSILON {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Sign of a scalar as -1 / 0 / +1.
///
/// `f32::signum` maps 0.0 to 1.0, which would pick a ray direction for a body
/// that is not moving on that axis.
#[inline]
pub fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Zero out floating point dust left by trig round trips
#[inline]
pub fn snap_zero(v: f32) -> f32 {
    if v.abs() < ZERO_SNAP {
        0.0
    } else {
        v
    }
}

/// Whether two slope angles describe different surfaces
#[inline]
pub fn angles_differ(a: f32, b: f32) -> bool {
    (a - b).abs() > ANGLE_EPSILON
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }

    #[test]
    fn angle_to_up_for_floor_wall_and_slope() {
        assert!(Vec2::UP.angle_to(Vec2::UP).abs() < 1e-6);
        assert!((Vec2::LEFT.angle_to(Vec2::UP) - FRAC_PI_2).abs() < 1e-6);
        assert!((Vec2::DOWN.angle_to(Vec2::UP) - PI).abs() < 1e-6);

        // Normal of a 30° slope rising to the right
        let n = Vec2::new(-FRAC_PI_6.sin(), -FRAC_PI_6.cos());
        assert!((n.angle_to(Vec2::UP) - FRAC_PI_6).abs() < 1e-5);
    }

    #[test]
    fn angle_to_never_nan() {
        let almost_up = Vec2::new(1e-9, -1.0000001);
        assert!(!almost_up.angle_to(Vec2::UP).is_nan());
        assert_eq!(Vec2::ZERO.angle_to(Vec2::UP), 0.0);
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        let n = Vec2::new(3.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn snap_and_angle_tolerance() {
        assert_eq!(snap_zero(1e-8), 0.0);
        assert_eq!(snap_zero(0.5), 0.5);
        assert!(!angles_differ(0.5, 0.5 + 1e-6));
        assert!(angles_differ(0.5, 0.6));
    }
}
