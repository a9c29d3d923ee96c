use crate::core::math::Vec2;
use crate::systems::physics::{ContactListener, WorldQuery};

use super::body::{Body, CollisionType};

/// Advances bodies by one step
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionIntegrator;

impl MotionIntegrator {
    /// Integrate one body over `elapsed_ms`.
    ///
    /// Acceleration is per second while velocity is per frame, so only the
    /// acceleration term is scaled by the elapsed time. The controller (if
    /// any) clamps the velocity in place before it is applied to the position.
    ///
    /// Returns true when the position changed.
    pub fn integrate<W, L>(body: &mut Body, elapsed_ms: f64, world: &W, listener: &mut L) -> bool
    where
        W: WorldQuery + ?Sized,
        L: ContactListener + ?Sized,
    {
        if body.sleeping {
            return false;
        }

        let seconds = (elapsed_ms / 1000.0) as f32;

        let mut total_acc = body.acceleration;
        if body.collision_type == CollisionType::Active {
            if let Some(gravity) = body.gravity {
                total_acc += gravity;
            }
        }
        body.velocity += total_acc * seconds;

        let rect = body.rect();
        if let Some(controller) = body.controller.as_mut() {
            body.velocity = controller.move_by(body.velocity, rect, world, listener);
        }

        body.prev_pos = body.pos;
        body.pos += body.velocity;

        body.velocity != Vec2::ZERO
    }
}
