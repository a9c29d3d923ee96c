use std::collections::BTreeSet;

use crate::domain::config::{JumpTuning, PhysicsConfig};
use crate::spatial::world::CollisionWorld;

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn create_scene_core() -> SceneCore {
    let jump = JumpTuning::default();
    SceneCore {
        world: CollisionWorld::new(),
        actors: Vec::new(),
        one_way: BTreeSet::new(),
        config: PhysicsConfig::default(),
        gravity: jump.gravity(),
        jump,
        events: Vec::with_capacity(64),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
