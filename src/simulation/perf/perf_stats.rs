use wasm_bindgen::prelude::*;

/// Snapshot of the last step
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) sync_ms: f64,
    pub(super) resolve_ms: f64,
    pub(super) drain_ms: f64,
    pub(super) actor_count: u32,
    pub(super) collider_count: u32,
    pub(super) actors_moved: u32,
    pub(super) rays_cast: u32,
    pub(super) ray_hits: u32,
    pub(super) events_emitted: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn sync_ms(&self) -> f64 { self.sync_ms }
    #[wasm_bindgen(getter)]
    pub fn resolve_ms(&self) -> f64 { self.resolve_ms }
    #[wasm_bindgen(getter)]
    pub fn drain_ms(&self) -> f64 { self.drain_ms }
    #[wasm_bindgen(getter)]
    pub fn actor_count(&self) -> u32 { self.actor_count }
    #[wasm_bindgen(getter)]
    pub fn collider_count(&self) -> u32 { self.collider_count }
    #[wasm_bindgen(getter)]
    pub fn actors_moved(&self) -> u32 { self.actors_moved }
    #[wasm_bindgen(getter)]
    pub fn rays_cast(&self) -> u32 { self.rays_cast }
    #[wasm_bindgen(getter)]
    pub fn ray_hits(&self) -> u32 { self.ray_hits }
    #[wasm_bindgen(getter)]
    pub fn events_emitted(&self) -> u32 { self.events_emitted }
}
