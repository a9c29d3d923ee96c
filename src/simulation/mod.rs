//! Scene - actors moving through static geometry
//!
//! Owns the collision world and the actors living in it, and advances them
//! once per host frame:
//! 1. Sync every actor's collider into the world (the step's snapshot)
//! 2. Resolve + integrate each actor against that snapshot (rayon when the
//!    `parallel` feature is on); each actor buffers its own events
//! 3. Drain the per-actor buffers in actor order into the scene queue
//!
//! Setup goes through `commands` (geometry), `actors` (bodies) and
//! `settings`; `facade` wraps everything for JS.

use std::collections::BTreeSet;

use crate::core::math::Vec2;
use crate::domain::config::{JumpTuning, PhysicsConfig};
use crate::spatial::world::CollisionWorld;
use crate::systems::motion::Body;
use crate::systems::physics::{ColliderId, CollisionEvent, CollisionState};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/listener.rs"]
mod listener;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "actors/actors.rs"]
mod actors;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{CollisionFlags, Scene};
pub use listener::SceneListener;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// A body plus the world collider that represents it
pub(crate) struct Actor {
    /// Collider id, doubles as the actor id on the JS side
    pub(crate) collider: ColliderId,
    pub(crate) body: Body,
    /// Events produced while this actor was resolved, drained after the step
    pub(crate) events: Vec<CollisionEvent>,
}

/// The simulation scene
pub struct SceneCore {
    world: CollisionWorld,
    actors: Vec<Actor>,
    one_way: BTreeSet<ColliderId>,

    // Settings
    config: PhysicsConfig,
    jump: JumpTuning,
    gravity: Vec2,

    // State
    events: Vec<CollisionEvent>,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    pub fn new() -> Self {
        init::create_scene_core()
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn world(&self) -> &CollisionWorld { &self.world }

    pub fn config(&self) -> &PhysicsConfig { &self.config }

    pub fn jump_tuning(&self) -> &JumpTuning { &self.jump }

    pub fn gravity(&self) -> Vec2 { self.gravity }

    /// Apply a JSON config bundle to the scene and every existing actor
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === GEOMETRY API ===

    /// Add a static box centered at (x, y)
    pub fn add_box(&mut self, x: f32, y: f32, w: f32, h: f32) -> ColliderId {
        commands::add_box(self, x, y, w, h)
    }

    /// Add a right-triangle slope filling the box centered at (x, y)
    pub fn add_slope(&mut self, x: f32, y: f32, w: f32, h: f32, rising_right: bool) -> Result<ColliderId, String> {
        commands::add_slope(self, x, y, w, h, rising_right)
    }

    pub fn add_polygon(&mut self, points: &[Vec2]) -> Result<ColliderId, String> {
        commands::add_polygon(self, points)
    }

    /// Mark a collider as a one-way platform (solid only from above)
    pub fn set_one_way(&mut self, collider: ColliderId, one_way: bool) -> bool {
        commands::set_one_way(self, collider, one_way)
    }

    pub fn is_one_way(&self, collider: ColliderId) -> bool {
        self.one_way.contains(&collider)
    }

    /// Remove static geometry. Actors are removed with `remove_actor`.
    pub fn remove_collider(&mut self, collider: ColliderId) -> bool {
        commands::remove_collider(self, collider)
    }

    /// Drop all geometry, actors and pending events
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === ACTOR API ===

    /// Spawn an actor centered at (x, y). Returns its id.
    pub fn spawn_actor(&mut self, x: f32, y: f32, w: f32, h: f32) -> ColliderId {
        actors::spawn_actor(self, x, y, w, h)
    }

    pub fn remove_actor(&mut self, id: ColliderId) -> bool {
        actors::remove_actor(self, id)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn actor(&self, id: ColliderId) -> Option<&Body> {
        actors::actor(self, id)
    }

    pub fn actor_mut(&mut self, id: ColliderId) -> Option<&mut Body> {
        actors::actor_mut(self, id)
    }

    pub fn set_actor_velocity(&mut self, id: ColliderId, x: f32, y: f32) -> Result<(), String> {
        actors::set_actor_velocity(self, id, x, y)
    }

    pub fn set_actor_acceleration(&mut self, id: ColliderId, x: f32, y: f32) -> Result<(), String> {
        actors::set_actor_acceleration(self, id, x, y)
    }

    /// Jump if grounded. Returns whether the jump happened.
    pub fn jump(&mut self, id: ColliderId) -> Result<bool, String> {
        actors::jump(self, id)
    }

    pub fn collisions(&self, id: ColliderId) -> Option<&CollisionState> {
        self.actor(id).and_then(|b| b.collisions())
    }

    // === STEP ===

    /// Advance every actor by one frame
    pub fn step(&mut self, elapsed_ms: f64) {
        step::step(self, elapsed_ms);
    }

    /// Take the events queued by previous steps, oldest first
    pub fn drain_events(&mut self) -> Vec<CollisionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

impl Default for SceneCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
