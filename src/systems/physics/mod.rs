//! Ray-fan collision resolution for kinematic bodies
//!
//! Leaves first:
//! - bounds          - collider rect inset by the skin width
//! - origins         - ray fan corners and spacing
//! - raycast         - world query service + per-body filtering/sorting
//! - collision_state - touch flags, slope tracking, contact generations
//! - contact         - contacts, resolve hooks, start/end events
//! - resolver/slopes - the horizontal/vertical passes and slope handling

mod types;
mod bounds;
mod origins;
mod raycast;
mod collision_state;
mod contact;
mod resolver;
mod slopes;
pub mod perf;

pub use types::{ColliderId, RayHit};
pub use bounds::skin_bounds;
pub use origins::{RayOrigins, RaySpacing};
pub use raycast::{RaycastQuery, WorldQuery};
pub use collision_state::CollisionState;
pub use contact::{
    CollisionEvent, Contact, ContactEventer, ContactListener, EventLog, NoopListener, Resolution,
    Side,
};
pub use resolver::Controller;
pub use perf::{reset_physics_perf_counters, take_physics_perf_counters};
