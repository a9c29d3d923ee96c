#[cfg(feature = "parallel")]
use rayon::prelude::*;

use std::collections::BTreeSet;

use crate::spatial::world::CollisionWorld;
use crate::systems::motion::MotionIntegrator;
use crate::systems::physics::{reset_physics_perf_counters, take_physics_perf_counters, ColliderId};

use super::listener::SceneListener;
use super::{Actor, PerfTimer, SceneCore};

/// What one actor reports back from the resolve pass
#[derive(Clone, Copy, Default)]
struct ActorOutcome {
    moved: bool,
    rays_cast: u64,
    ray_hits: u64,
}

pub(super) fn step(scene: &mut SceneCore, elapsed_ms: f64) {
    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
        scene.perf_stats.actor_count = scene.actors.len() as u32;
        scene.perf_stats.collider_count = scene.world.len() as u32;
    }
    let step_start = PerfTimer::start_if(perf_on);

    // === SYNC: actor colliders become part of this step's snapshot ===
    let t0 = PerfTimer::start_if(perf_on);
    for actor in scene.actors.iter() {
        scene.world.set_rect(actor.collider, actor.body.rect());
    }
    if let Some(t0) = t0 {
        scene.perf_stats.sync_ms = t0.elapsed_ms();
    }

    // === RESOLVE: every actor against the same read-only world ===
    let t0 = PerfTimer::start_if(perf_on);
    let world = &scene.world;
    let one_way = &scene.one_way;

    #[cfg(feature = "parallel")]
    let outcomes: Vec<ActorOutcome> = scene
        .actors
        .par_iter_mut()
        .map(|actor| step_actor(actor, world, one_way, elapsed_ms, perf_on))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<ActorOutcome> = scene
        .actors
        .iter_mut()
        .map(|actor| step_actor(actor, world, one_way, elapsed_ms, perf_on))
        .collect();

    if let Some(t0) = t0 {
        scene.perf_stats.resolve_ms = t0.elapsed_ms();
    }

    // === DRAIN: per-actor buffers in actor order ===
    let t0 = PerfTimer::start_if(perf_on);
    let before = scene.events.len();
    for actor in scene.actors.iter_mut() {
        scene.events.append(&mut actor.events);
    }
    if let Some(t0) = t0 {
        scene.perf_stats.drain_ms = t0.elapsed_ms();
    }

    if perf_on {
        let stats = &mut scene.perf_stats;
        for o in outcomes.iter() {
            stats.actors_moved += o.moved as u32;
            stats.rays_cast = stats.rays_cast.saturating_add(o.rays_cast as u32);
            stats.ray_hits = stats.ray_hits.saturating_add(o.ray_hits as u32);
        }
        stats.events_emitted = (scene.events.len() - before) as u32;
    }
    if let Some(t) = step_start {
        scene.perf_stats.step_ms = t.elapsed_ms();
    }

    scene.frame += 1;
}

/// Integrate one actor. Counters are thread-local, so they are reset and
/// taken on whichever worker runs this actor.
fn step_actor(
    actor: &mut Actor,
    world: &CollisionWorld,
    one_way: &BTreeSet<ColliderId>,
    elapsed_ms: f64,
    perf_on: bool,
) -> ActorOutcome {
    if perf_on {
        reset_physics_perf_counters();
    }

    let mut listener = SceneListener::new(one_way, &mut actor.events);
    let moved = MotionIntegrator::integrate(&mut actor.body, elapsed_ms, world, &mut listener);

    let mut outcome = ActorOutcome { moved, ..ActorOutcome::default() };
    if perf_on {
        let (rays, hits) = take_physics_perf_counters();
        outcome.rays_cast = rays;
        outcome.ray_hits = hits;
    }
    outcome
}
