use crate::core::math::{Rect, Vec2};
use crate::systems::physics::ColliderId;

use super::SceneCore;

fn is_actor(scene: &SceneCore, collider: ColliderId) -> bool {
    scene.actors.iter().any(|a| a.collider == collider)
}

pub(super) fn add_box(scene: &mut SceneCore, x: f32, y: f32, w: f32, h: f32) -> ColliderId {
    let rect = Rect::from_center_size(Vec2::new(x, y), w.abs(), h.abs());
    scene.world.add_box(rect)
}

pub(super) fn add_slope(
    scene: &mut SceneCore,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    rising_right: bool,
) -> Result<ColliderId, String> {
    let base = Rect::from_center_size(Vec2::new(x, y), w.abs(), h.abs());
    scene.world.add_ramp(base, rising_right)
}

pub(super) fn add_polygon(scene: &mut SceneCore, points: &[Vec2]) -> Result<ColliderId, String> {
    scene.world.add_polygon(points)
}

pub(super) fn set_one_way(scene: &mut SceneCore, collider: ColliderId, one_way: bool) -> bool {
    if scene.world.get(collider).is_none() || is_actor(scene, collider) {
        return false;
    }
    if one_way {
        scene.one_way.insert(collider);
    } else {
        scene.one_way.remove(&collider);
    }
    true
}

pub(super) fn remove_collider(scene: &mut SceneCore, collider: ColliderId) -> bool {
    if is_actor(scene, collider) {
        return false;
    }
    scene.one_way.remove(&collider);
    scene.world.remove(collider)
}

pub(super) fn clear(scene: &mut SceneCore) {
    scene.world.clear();
    scene.actors.clear();
    scene.one_way.clear();
    scene.events.clear();
    scene.frame = 0;
}
