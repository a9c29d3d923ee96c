use crate::core::math::{Rect, Vec2};
use crate::systems::motion::{Body, CollisionType};
use crate::systems::physics::{ColliderId, Controller};

use super::{Actor, SceneCore};

pub(super) fn spawn_actor(scene: &mut SceneCore, x: f32, y: f32, w: f32, h: f32) -> ColliderId {
    let pos = Vec2::new(x, y);
    let collider = scene
        .world
        .add_box(Rect::from_center_size(pos, w.abs(), h.abs()));

    let body = Body::new(pos, w, h, CollisionType::Active)
        .with_gravity(scene.gravity)
        .with_controller(Controller::new(collider, scene.config));

    scene.actors.push(Actor {
        collider,
        body,
        events: Vec::new(),
    });
    collider
}

pub(super) fn remove_actor(scene: &mut SceneCore, id: ColliderId) -> bool {
    let Some(idx) = scene.actors.iter().position(|a| a.collider == id) else {
        return false;
    };
    // Keep actor order stable: events drain in this order
    scene.actors.remove(idx);
    scene.world.remove(id);
    true
}

pub(super) fn actor(scene: &SceneCore, id: ColliderId) -> Option<&Body> {
    scene.actors.iter().find(|a| a.collider == id).map(|a| &a.body)
}

pub(super) fn actor_mut(scene: &mut SceneCore, id: ColliderId) -> Option<&mut Body> {
    scene
        .actors
        .iter_mut()
        .find(|a| a.collider == id)
        .map(|a| &mut a.body)
}

fn require_actor(scene: &mut SceneCore, id: ColliderId) -> Result<&mut Body, String> {
    actor_mut(scene, id).ok_or_else(|| format!("unknown actor {}", id.0))
}

pub(super) fn set_actor_velocity(scene: &mut SceneCore, id: ColliderId, x: f32, y: f32) -> Result<(), String> {
    require_actor(scene, id)?.velocity = Vec2::new(x, y);
    Ok(())
}

pub(super) fn set_actor_acceleration(scene: &mut SceneCore, id: ColliderId, x: f32, y: f32) -> Result<(), String> {
    require_actor(scene, id)?.acceleration = Vec2::new(x, y);
    Ok(())
}

pub(super) fn jump(scene: &mut SceneCore, id: ColliderId) -> Result<bool, String> {
    let tuning = scene.jump;
    Ok(require_actor(scene, id)?.try_jump(&tuning))
}
