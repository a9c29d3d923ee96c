use super::*;
use std::f32::consts::FRAC_PI_4;

fn ground() -> (CollisionWorld, ColliderId) {
    let mut world = CollisionWorld::new();
    let id = world.add_box(Rect::new(0.0, 100.0, 200.0, 116.0));
    (world, id)
}

#[test]
fn ray_down_hits_box_top() {
    let (world, id) = ground();
    let hits = world.ray_cast(Vec2::new(50.0, 90.0), Vec2::DOWN, 20.0);
    assert_eq!(hits.len(), 1);
    let h = hits[0];
    assert_eq!(h.collider, id);
    assert!((h.distance - 10.0).abs() < 1e-5);
    assert_eq!(h.point, Vec2::new(50.0, 100.0));
    assert_eq!(h.normal, Vec2::UP);
}

#[test]
fn ray_stops_at_max_distance() {
    let (world, _) = ground();
    assert!(world.ray_cast(Vec2::new(50.0, 90.0), Vec2::DOWN, 9.5).is_empty());
}

#[test]
fn ray_starting_inside_reports_nothing() {
    let (world, _) = ground();
    assert!(world.ray_cast(Vec2::new(50.0, 108.0), Vec2::DOWN, 20.0).is_empty());
}

#[test]
fn ray_grazing_top_surface_misses() {
    let (world, _) = ground();
    // Runs along y = 99, one unit above the surface
    assert!(world.ray_cast(Vec2::new(-10.0, 99.0), Vec2::RIGHT, 300.0).is_empty());
}

#[test]
fn hits_are_sorted_nearest_first() {
    let mut world = CollisionWorld::new();
    let far = world.add_box(Rect::new(60.0, 0.0, 70.0, 50.0));
    let near = world.add_box(Rect::new(20.0, 0.0, 30.0, 50.0));

    let hits = world.ray_cast(Vec2::new(0.0, 25.0), Vec2::RIGHT, 100.0);
    let ids: Vec<ColliderId> = hits.iter().map(|h| h.collider).collect();
    assert_eq!(ids, vec![near, far]);
    assert_eq!(hits[0].normal, Vec2::LEFT);
}

#[test]
fn ramp_normal_gives_slope_angle() {
    let mut world = CollisionWorld::new();
    let ramp = world
        .add_ramp(Rect::new(100.0, 50.0, 150.0, 100.0), true)
        .expect("valid ramp");

    let hits = world.ray_cast(Vec2::new(90.0, 95.0), Vec2::RIGHT, 50.0);
    assert_eq!(hits.len(), 1);
    let h = hits[0];
    assert_eq!(h.collider, ramp);
    assert!((h.distance - 15.0).abs() < 1e-4);
    assert!((h.normal.angle_to(Vec2::UP) - FRAC_PI_4).abs() < 1e-5);
    assert!(h.normal.x < 0.0);
}

#[test]
fn polygon_validation() {
    let mut world = CollisionWorld::new();
    assert!(world.add_polygon(&[Vec2::ZERO, Vec2::new(1.0, 0.0)]).is_err());
    assert!(world
        .add_polygon(&[Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)])
        .is_err());
    let concave = [
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(5.0, 2.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ];
    assert_eq!(world.add_polygon(&concave).unwrap_err(), "polygon is not convex");
    assert!(world.is_empty());
}

#[test]
fn set_rect_moves_boxes_only() {
    let (mut world, id) = ground();
    assert!(world.set_rect(id, Rect::new(0.0, 200.0, 200.0, 216.0)));
    assert!(world.ray_cast(Vec2::new(50.0, 90.0), Vec2::DOWN, 20.0).is_empty());
    assert_eq!(world.bounds_of(id), Some(Rect::new(0.0, 200.0, 200.0, 216.0)));

    let ramp = world
        .add_ramp(Rect::new(0.0, 0.0, 10.0, 10.0), false)
        .expect("valid ramp");
    assert!(!world.set_rect(ramp, Rect::new(0.0, 0.0, 1.0, 1.0)));
    assert!(!world.set_rect(ColliderId(999), Rect::default()));

    assert!(world.remove(id));
    assert!(!world.remove(id));
    assert_eq!(world.len(), 1);
}
