//! Axis resolver - clamps a body's per-frame displacement against the world
//!
//! Per move:
//! 1. Rebuild skin bounds, ray origins and spacing (bounds may have changed)
//! 2. Reset the collision state
//! 3. Falling: probe for a descending slope first
//! 4. Horizontal fan (may turn into a slope climb)
//! 5. Vertical fan (tracks the post-horizontal position)
//! 6. Emit collision-end for contacts that did not survive
//!
//! Velocity flows by value through every pass; each pass returns the new one.

use crate::core::math::{angles_differ, sign, snap_zero, Rect, Vec2, ANGLE_EPSILON};
use crate::domain::config::PhysicsConfig;

use super::bounds::skin_bounds;
use super::collision_state::CollisionState;
use super::contact::{Contact, ContactEventer, ContactListener, Resolution};
use super::origins::{RayOrigins, RaySpacing};
use super::raycast::{RaycastQuery, WorldQuery};
use super::types::ColliderId;

/// Ray-fan kinematic controller for one body
#[derive(Clone, Debug)]
pub struct Controller {
    pub(super) config: PhysicsConfig,
    pub(super) collider: ColliderId,
    pub(super) exclude: Vec<ColliderId>,
    pub(super) state: CollisionState,
    spacing: RaySpacing,
    last_bounds: Option<Rect>,
}

/// Everything one `move_by` call needs besides the controller itself
pub(super) struct MovePass<'a, W: WorldQuery + ?Sized, L: ContactListener + ?Sized> {
    pub(super) query: RaycastQuery<'a, W>,
    pub(super) events: ContactEventer<'a, L>,
    pub(super) origins: RayOrigins,
    pub(super) spacing: RaySpacing,
    /// Full (non-inset) collider rect, used to classify contact sides
    pub(super) body_rect: Rect,
    /// Velocity as handed to `move_by`, before any slope adjustment
    pub(super) velocity_old: Vec2,
}

impl Controller {
    pub fn new(collider: ColliderId, config: PhysicsConfig) -> Self {
        Self {
            config: config.clamped(),
            collider,
            exclude: Vec::new(),
            state: CollisionState::new(),
            spacing: RaySpacing::default(),
            last_bounds: None,
        }
    }

    pub fn collider(&self) -> ColliderId {
        self.collider
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn collisions(&self) -> &CollisionState {
        &self.state
    }

    /// Ray spacing used by the most recent move (or reconfigure)
    pub fn spacing(&self) -> RaySpacing {
        self.spacing
    }

    /// Replace the configuration. Ray counts are re-clamped and the spacing is
    /// recomputed right away for the last known bounds.
    pub fn reconfigure(&mut self, config: PhysicsConfig) {
        self.config = config.clamped();
        if let Some(bounds) = self.last_bounds {
            self.spacing = RaySpacing::compute(
                &bounds,
                self.config.horizontal_ray_count,
                self.config.vertical_ray_count,
            );
        }
    }

    /// Ignore a collider in every ray query (e.g. a carried item)
    pub fn exclude(&mut self, collider: ColliderId) {
        if !self.exclude.contains(&collider) {
            self.exclude.push(collider);
        }
    }

    pub fn include(&mut self, collider: ColliderId) {
        self.exclude.retain(|c| *c != collider);
    }

    /// Forget contact history without emitting end events (body teleported)
    pub fn clear_contacts(&mut self) {
        self.state.clear_contacts();
    }

    /// Resolve `velocity` for a body whose collider currently covers
    /// `collider_rect`. Returns the clamped velocity; the caller integrates it.
    pub fn move_by<W, L>(
        &mut self,
        velocity: Vec2,
        collider_rect: Rect,
        world: &W,
        listener: &mut L,
    ) -> Vec2
    where
        W: WorldQuery + ?Sized,
        L: ContactListener + ?Sized,
    {
        let bounds = skin_bounds(&collider_rect, self.config.skin_width);
        self.spacing = RaySpacing::compute(
            &bounds,
            self.config.horizontal_ray_count,
            self.config.vertical_ray_count,
        );
        self.last_bounds = Some(bounds);

        let mut pass = MovePass {
            query: RaycastQuery::new(world, self.collider),
            events: ContactEventer::new(self.collider, listener),
            origins: RayOrigins::from_bounds(&bounds),
            spacing: self.spacing,
            body_rect: collider_rect,
            velocity_old: velocity,
        };

        self.state.reset();

        let mut v = velocity;
        if v.y > 0.0 {
            v = self.descend_slope(&mut pass, v);
        }
        if v.x != 0.0 {
            v = self.horizontal_collisions(&mut pass, v);
        }
        if v.y != 0.0 {
            v = self.vertical_collisions(&mut pass, v);
        }

        pass.events.finish(&self.state);
        v
    }

    pub(super) fn horizontal_collisions<W, L>(&mut self, pass: &mut MovePass<'_, W, L>, mut v: Vec2) -> Vec2
    where
        W: WorldQuery + ?Sized,
        L: ContactListener + ?Sized,
    {
        let skin = self.config.skin_width;
        let dir_x = sign(v.x);
        let direction = Vec2::new(dir_x, 0.0);
        let mut ray_length = v.x.abs() + skin;

        for i in 0..self.config.horizontal_ray_count {
            let corner = if dir_x < 0.0 {
                pass.origins.bottom_left
            } else {
                pass.origins.bottom_right
            };
            let origin = Vec2::new(corner.x, corner.y - i as f32 * pass.spacing.horizontal);

            let Some(hit) = pass.query.nearest(origin, direction, ray_length, &self.exclude) else {
                continue;
            };

            let slope_angle = hit.normal.angle_to(Vec2::UP);
            let contact = Contact::from_hit(&hit, &pass.body_rect, skin, direction);
            if pass.events.pre_resolve(&contact) == Resolution::Canceled {
                continue;
            }

            let mut committed = false;

            // Slope climbing is decided by the corner ray alone
            if i == 0 && slope_angle <= self.config.max_climb_angle {
                if self.state.descending_slope {
                    // A climbable slope ahead wins over the descend adjustment
                    self.state.descending_slope = false;
                    v = pass.velocity_old;
                }

                let mut distance_to_slope_start = 0.0;
                if angles_differ(slope_angle, self.state.slope_angle_old) {
                    distance_to_slope_start = gap(hit.distance, skin);
                    v.x -= distance_to_slope_start * dir_x;
                }
                if let Some(climbed) = self.climb_slope(v, slope_angle) {
                    v = climbed;
                    committed = true;
                }
                v.x += distance_to_slope_start * dir_x;
            }

            if !self.state.climbing_slope || slope_angle > self.config.max_climb_angle {
                v.x = snap_zero(gap(hit.distance, skin) * dir_x);
                ray_length = hit.distance;

                if self.state.climbing_slope {
                    // Blocked mid-climb: stay on the slope surface
                    v.y = snap_zero(-self.state.slope_angle.tan() * v.x.abs());
                }

                if dir_x < 0.0 {
                    self.state.left = true;
                } else {
                    self.state.right = true;
                }
                committed = true;
            }

            if committed {
                pass.events.commit(&mut self.state, &contact);
            }
        }

        v
    }

    pub(super) fn vertical_collisions<W, L>(&mut self, pass: &mut MovePass<'_, W, L>, mut v: Vec2) -> Vec2
    where
        W: WorldQuery + ?Sized,
        L: ContactListener + ?Sized,
    {
        let skin = self.config.skin_width;
        let dir_y = sign(v.y);
        let direction = Vec2::new(0.0, dir_y);
        let mut ray_length = v.y.abs() + skin;

        for i in 0..self.config.vertical_ray_count {
            let corner = if dir_y < 0.0 {
                pass.origins.top_left
            } else {
                pass.origins.bottom_left
            };
            // Shifted by this frame's horizontal motion
            let origin = Vec2::new(corner.x + i as f32 * pass.spacing.vertical + v.x, corner.y);

            let Some(hit) = pass.query.nearest(origin, direction, ray_length, &self.exclude) else {
                continue;
            };

            let contact = Contact::from_hit(&hit, &pass.body_rect, skin, direction);
            if pass.events.pre_resolve(&contact) == Resolution::Canceled {
                continue;
            }

            v.y = snap_zero(gap(hit.distance, skin) * dir_y);
            ray_length = hit.distance;

            if self.state.climbing_slope && self.state.slope_angle > ANGLE_EPSILON {
                // Ceiling while climbing: horizontal speed follows the slope
                v.x = snap_zero((-v.y / self.state.slope_angle.tan()) * sign(v.x));
            }

            if dir_y < 0.0 {
                self.state.top = true;
            } else {
                self.state.bottom = true;
            }
            pass.events.commit(&mut self.state, &contact);
        }

        if self.state.climbing_slope {
            v = self.recheck_slope_ahead(pass, v);
        }

        v
    }

    /// After the vertical pass, look ahead from the raised position for a
    /// change in slope angle so multi-segment slopes climb without a stall.
    fn recheck_slope_ahead<W, L>(&mut self, pass: &mut MovePass<'_, W, L>, mut v: Vec2) -> Vec2
    where
        W: WorldQuery + ?Sized,
        L: ContactListener + ?Sized,
    {
        let skin = self.config.skin_width;
        let dir_x = sign(v.x);
        if dir_x == 0.0 {
            return v;
        }

        let direction = Vec2::new(dir_x, 0.0);
        let ray_length = v.x.abs() + skin;
        let corner = if dir_x < 0.0 {
            pass.origins.bottom_left
        } else {
            pass.origins.bottom_right
        };
        let origin = Vec2::new(corner.x, corner.y + v.y);

        let Some(hit) = pass.query.nearest(origin, direction, ray_length, &self.exclude) else {
            return v;
        };

        let slope_angle = hit.normal.angle_to(Vec2::UP);
        if !angles_differ(slope_angle, self.state.slope_angle) {
            return v;
        }

        let contact = Contact::from_hit(&hit, &pass.body_rect, skin, direction);
        if pass.events.pre_resolve(&contact) == Resolution::Canceled {
            return v;
        }

        v.x = snap_zero(gap(hit.distance, skin) * dir_x);
        self.state.slope_angle = slope_angle;
        pass.events.commit(&mut self.state, &contact);
        v
    }
}

/// Room left between the skin and a surface. Never negative, so a hit that
/// rounding put just inside the skin stops the body instead of pushing it back.
fn gap(hit_distance: f32, skin: f32) -> f32 {
    (hit_distance - skin).max(0.0)
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
