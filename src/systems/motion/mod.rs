//! Motion - kinematic bodies and their per-step integration
//!
//! A body is an axis-aligned rectangle that optionally carries a ray-fan
//! [`Controller`](crate::systems::physics::Controller). The integrator adds
//! acceleration (and gravity for active bodies) to the velocity, lets the
//! controller clamp it against the world, then moves the body.

mod body;
mod integrator;

pub use body::{Body, CollisionType};
pub use integrator::MotionIntegrator;

#[cfg(test)]
#[path = "tests/motion_tests.rs"]
mod tests;
