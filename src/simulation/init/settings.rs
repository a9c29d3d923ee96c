use crate::core::math::Vec2;
use crate::domain::config::ConfigBundle;

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn load_config_json(scene: &mut SceneCore, json: &str) -> Result<(), String> {
    let (config, jump) = ConfigBundle::parse(json)?.into_parts()?;

    scene.config = config;
    for actor in scene.actors.iter_mut() {
        if let Some(controller) = actor.body.controller.as_mut() {
            controller.reconfigure(config);
        }
    }

    // Jump tuning owns gravity; an explicit set_gravity later still wins
    if let Some(jump) = jump {
        scene.jump = jump;
        let g = jump.gravity();
        set_gravity(scene, g.x, g.y);
    }

    console_log!(
        "⚙️ Config loaded: skin {} rays {}x{} climb {:.1}° descend {:.1}°",
        config.skin_width,
        config.horizontal_ray_count,
        config.vertical_ray_count,
        config.max_climb_angle.to_degrees(),
        config.max_descend_angle.to_degrees()
    );
    Ok(())
}

/// Scene gravity, pushed to every actor
pub(super) fn set_gravity(scene: &mut SceneCore, x: f32, y: f32) {
    let g = Vec2::new(x, y);
    if !g.is_finite() {
        console_warn!("set_gravity ignored non-finite ({}, {})", x, y);
        return;
    }
    scene.gravity = g;
    for actor in scene.actors.iter_mut() {
        actor.body.gravity = Some(g);
    }
}

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    if !enabled {
        scene.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}
