use wasm_bindgen::prelude::*;

use crate::systems::physics::{ColliderId, CollisionState};

use super::perf_stats::PerfStats;
use super::SceneCore;

/// Collision flags of one actor after the last step
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default)]
pub struct CollisionFlags {
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
    climbing_slope: bool,
    descending_slope: bool,
    slope_angle: f32,
}

impl From<&CollisionState> for CollisionFlags {
    fn from(s: &CollisionState) -> Self {
        Self {
            top: s.top,
            bottom: s.bottom,
            left: s.left,
            right: s.right,
            climbing_slope: s.climbing_slope,
            descending_slope: s.descending_slope,
            slope_angle: s.slope_angle,
        }
    }
}

#[wasm_bindgen]
impl CollisionFlags {
    #[wasm_bindgen(getter)]
    pub fn top(&self) -> bool { self.top }
    #[wasm_bindgen(getter)]
    pub fn bottom(&self) -> bool { self.bottom }
    #[wasm_bindgen(getter)]
    pub fn left(&self) -> bool { self.left }
    #[wasm_bindgen(getter)]
    pub fn right(&self) -> bool { self.right }
    #[wasm_bindgen(getter)]
    pub fn climbing_slope(&self) -> bool { self.climbing_slope }
    #[wasm_bindgen(getter)]
    pub fn descending_slope(&self) -> bool { self.descending_slope }
    /// Radians
    #[wasm_bindgen(getter)]
    pub fn slope_angle(&self) -> f32 { self.slope_angle }
}

fn unknown_actor(id: u32) -> JsValue {
    JsValue::from_str(&format!("unknown actor {}", id))
}

#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
}

#[wasm_bindgen]
impl Scene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: SceneCore::new() }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn actor_count(&self) -> usize { self.core.actor_count() }

    /// Apply a JSON config bundle (ray counts, skin, angles, jump tuning)
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === GEOMETRY API ===

    /// Add a static box centered at (x, y). Returns the collider id.
    pub fn add_box(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.add_box(x, y, w, h).0
    }

    /// Add a slope filling the box centered at (x, y)
    pub fn add_slope(&mut self, x: f32, y: f32, w: f32, h: f32, rising_right: bool) -> Result<u32, JsValue> {
        self.core
            .add_slope(x, y, w, h, rising_right)
            .map(|id| id.0)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Solid only when landed on from above
    pub fn set_one_way(&mut self, collider: u32, one_way: bool) -> bool {
        self.core.set_one_way(ColliderId(collider), one_way)
    }

    pub fn remove_collider(&mut self, collider: u32) -> bool {
        self.core.remove_collider(ColliderId(collider))
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === ACTOR API ===

    /// Spawn an actor centered at (x, y). Returns the actor id.
    pub fn spawn_actor(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.spawn_actor(x, y, w, h).0
    }

    pub fn remove_actor(&mut self, id: u32) -> bool {
        self.core.remove_actor(ColliderId(id))
    }

    pub fn set_actor_velocity(&mut self, id: u32, x: f32, y: f32) -> Result<(), JsValue> {
        self.core
            .set_actor_velocity(ColliderId(id), x, y)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn set_actor_acceleration(&mut self, id: u32, x: f32, y: f32) -> Result<(), JsValue> {
        self.core
            .set_actor_acceleration(ColliderId(id), x, y)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Jump if the actor stands on something. Returns whether it jumped.
    pub fn jump(&mut self, id: u32) -> Result<bool, JsValue> {
        self.core.jump(ColliderId(id)).map_err(|e| JsValue::from_str(&e))
    }

    pub fn actor_x(&self, id: u32) -> Result<f32, JsValue> {
        self.core.actor(ColliderId(id)).map(|b| b.pos.x).ok_or_else(|| unknown_actor(id))
    }

    pub fn actor_y(&self, id: u32) -> Result<f32, JsValue> {
        self.core.actor(ColliderId(id)).map(|b| b.pos.y).ok_or_else(|| unknown_actor(id))
    }

    pub fn actor_vel_x(&self, id: u32) -> Result<f32, JsValue> {
        self.core.actor(ColliderId(id)).map(|b| b.velocity.x).ok_or_else(|| unknown_actor(id))
    }

    pub fn actor_vel_y(&self, id: u32) -> Result<f32, JsValue> {
        self.core.actor(ColliderId(id)).map(|b| b.velocity.y).ok_or_else(|| unknown_actor(id))
    }

    pub fn collisions(&self, id: u32) -> Result<CollisionFlags, JsValue> {
        self.core
            .collisions(ColliderId(id))
            .map(CollisionFlags::from)
            .ok_or_else(|| unknown_actor(id))
    }

    // === STEP ===

    /// Advance the scene by one frame of `elapsed_ms`
    pub fn step(&mut self, elapsed_ms: f64) {
        self.core.step(elapsed_ms);
    }

    /// Queued collision events as a JSON array, oldest first
    pub fn drain_events_json(&mut self) -> String {
        let events = self.core.drain_events();
        match serde_json::to_string(&events) {
            Ok(json) => json,
            Err(e) => {
                console_error!("drain_events_json: {}", e);
                "[]".to_string()
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
