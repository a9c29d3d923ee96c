//! Kinematic Engine - Ray-fan platformer controller in WASM
//!
//! Bodies are axis-aligned rectangles that move by a per-frame displacement.
//! Every step the displacement is resolved against world geometry by casting
//! fans of rays along the body's edges, walking up and down slopes within
//! configured angle limits.
//!
//! Architecture:
//! - core/        - Math and logging helpers
//! - domain/      - Configuration (serde/JSON)
//! - spatial/     - World geometry and ray queries
//! - systems/     - Collision resolution and motion integration
//! - simulation/  - Scene orchestration + wasm facade

// Logging macros must be declared before any module that uses them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Compatibility re-exports
pub use crate::core::math::{Rect, Vec2};
pub use crate::domain::config::{JumpTuning, PhysicsConfig};
pub use crate::spatial::world::{ColliderShape, CollisionWorld};
pub use crate::systems::motion::{Body, CollisionType, MotionIntegrator};
pub use crate::systems::physics::{
    CollisionEvent, CollisionState, ColliderId, Contact, ContactListener, Controller, EventLog,
    NoopListener, RayHit, Resolution, Side, WorldQuery,
};

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🦀 Kinematic WASM Engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::simulation::{CollisionFlags, PerfStats, Scene, SceneCore};
