use crate::core::math::{sign, snap_zero, Vec2, ANGLE_EPSILON};

use super::contact::ContactListener;
use super::raycast::WorldQuery;
use super::resolver::{Controller, MovePass};

impl Controller {
    /// Turn horizontal motion into motion along a slope.
    ///
    /// Returns `None` (and changes nothing) when the body is already rising
    /// faster than the slope would lift it, e.g. right after a jump.
    pub(super) fn climb_slope(&mut self, v: Vec2, slope_angle: f32) -> Option<Vec2> {
        let move_distance = v.x.abs();
        let climb_velocity_y = -slope_angle.sin() * move_distance;

        if v.y < climb_velocity_y {
            return None;
        }

        self.state.bottom = true;
        self.state.climbing_slope = true;
        self.state.slope_angle = slope_angle;

        Some(Vec2::new(
            snap_zero(slope_angle.cos() * move_distance * sign(v.x)),
            snap_zero(climb_velocity_y),
        ))
    }

    /// Keep a falling body glued to a slope that drops away in its direction of
    /// travel instead of letting it skip down in steps.
    ///
    /// The probe has a fixed length: it looks for the presence of a slope, it
    /// does not clamp motion.
    ///
    /// It casts from the trailing (uphill) bottom corner, not the leading one.
    /// On a downhill slope the trailing corner is the one resting on the
    /// surface; the leading corner hangs up to `width * tan(angle)` above it
    /// and would miss the `tan(angle) * |v.x|` gap check.
    pub(super) fn descend_slope<W, L>(&mut self, pass: &mut MovePass<'_, W, L>, mut v: Vec2) -> Vec2
    where
        W: WorldQuery + ?Sized,
        L: ContactListener + ?Sized,
    {
        let dir_x = sign(v.x);
        if dir_x == 0.0 {
            return v;
        }

        let origin = if dir_x < 0.0 {
            pass.origins.bottom_right
        } else {
            pass.origins.bottom_left
        };

        let Some(hit) = pass.query.nearest(
            origin,
            Vec2::DOWN,
            self.config.descend_probe_distance,
            &self.exclude,
        ) else {
            return v;
        };

        let slope_angle = hit.normal.angle_to(Vec2::UP);
        if slope_angle <= ANGLE_EPSILON || slope_angle > self.config.max_descend_angle {
            return v;
        }
        // Surface must face the direction of travel
        if sign(hit.normal.x) != dir_x {
            return v;
        }

        let move_distance = v.x.abs();
        if hit.distance - self.config.skin_width > slope_angle.tan() * move_distance {
            // Too far above the slope; normal falling takes over
            return v;
        }

        v.x = snap_zero(slope_angle.cos() * move_distance * dir_x);
        v.y += slope_angle.sin() * move_distance;

        self.state.slope_angle = slope_angle;
        self.state.descending_slope = true;
        self.state.bottom = true;
        v
    }
}
