use super::*;
use crate::spatial::world::CollisionWorld;
use crate::systems::physics::{CollisionEvent, EventLog, NoopListener, Side};

const BODY: ColliderId = ColliderId(100);
const TAN_30: f32 = 0.577_350_26;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn controller() -> Controller {
    Controller::new(BODY, PhysicsConfig::default())
}

/// 30x30 body standing with its skin 3 units above a wide floor
fn floor_scene() -> (CollisionWorld, ColliderId, Rect) {
    let mut world = CollisionWorld::new();
    let floor = world.add_box(Rect::new(-100.0, 32.0, 200.0, 50.0));
    (world, floor, Rect::new(0.0, 0.0, 30.0, 30.0))
}

/// 30-degree ramp rising to the right from (40, 100)
fn ramp_scene() -> (CollisionWorld, ColliderId) {
    let mut world = CollisionWorld::new();
    let ramp = world
        .add_ramp(Rect::new(40.0, 100.0 - 100.0 * TAN_30, 140.0, 100.0), true)
        .expect("valid ramp");
    (world, ramp)
}

/// Vetoes every contact
#[derive(Default)]
struct CancelAll {
    asked: usize,
    events: usize,
}

impl ContactListener for CancelAll {
    fn pre_resolve(&mut self, _body: ColliderId, _contact: &Contact) -> Resolution {
        self.asked += 1;
        Resolution::Canceled
    }

    fn on_collision(&mut self, _event: CollisionEvent) {
        self.events += 1;
    }
}

// === Flat surfaces ===

#[test]
fn falling_body_stops_skin_width_above_floor() {
    let (world, floor, rect) = floor_scene();
    let mut c = controller();
    let mut log = EventLog::new();

    let v = c.move_by(Vec2::new(0.0, 5.0), rect, &world, &mut log);

    assert_eq!(v, Vec2::new(0.0, 2.0));
    assert!(c.collisions().bottom);
    assert!(!c.collisions().top && !c.collisions().left && !c.collisions().right);
    assert!(c.collisions().is_touching(floor));
    // Four rays hit the same collider: one start, four resolved contacts
    assert_eq!(log.starts(), 1);
    assert_eq!(log.resolved.len(), 4);
    assert_eq!(log.resolved[0].side, Side::Bottom);
}

#[test]
fn hit_inside_the_skin_never_pushes_back() {
    let mut world = CollisionWorld::new();
    world.add_box(Rect::new(-100.0, 32.0, 200.0, 50.0));
    world.add_box(Rect::new(40.0, -100.0, 60.0, 30.0));
    let mut c = controller();

    // Surfaces half a skin width away on both axes
    let rect = Rect::new(10.5, 2.5, 40.5, 32.5);
    let v = c.move_by(Vec2::new(4.0, 5.0), rect, &world, &mut NoopListener);

    assert_eq!(v, Vec2::ZERO);
    assert!(c.collisions().bottom && c.collisions().right);
}

#[test]
fn unobstructed_motion_is_unchanged() {
    let world = CollisionWorld::new();
    let mut c = controller();
    let v = c.move_by(Vec2::new(3.0, 4.0), Rect::new(0.0, 0.0, 30.0, 30.0), &world, &mut NoopListener);

    assert_eq!(v, Vec2::new(3.0, 4.0));
    let s = c.collisions();
    assert!(!s.top && !s.bottom && !s.left && !s.right);
    assert!(!s.climbing_slope && !s.descending_slope);
}

#[test]
fn zero_velocity_casts_nothing_and_keeps_state_clear() {
    let (world, _, rect) = floor_scene();
    let mut c = controller();
    let v = c.move_by(Vec2::ZERO, rect, &world, &mut NoopListener);
    assert_eq!(v, Vec2::ZERO);
    assert!(!c.collisions().bottom);
}

#[test]
fn wall_clamps_to_distance_minus_skin() {
    let mut world = CollisionWorld::new();
    world.add_box(Rect::new(40.0, -100.0, 60.0, 100.0));
    let mut c = controller();

    let v = c.move_by(Vec2::new(20.0, 0.0), Rect::new(0.0, 0.0, 30.0, 30.0), &world, &mut NoopListener);

    assert!(approx(v.x, 10.0));
    assert_eq!(v.y, 0.0);
    assert!(c.collisions().right);
    assert!(!c.collisions().left);
}

#[test]
fn excluded_collider_is_ignored() {
    let mut world = CollisionWorld::new();
    let wall = world.add_box(Rect::new(40.0, -100.0, 60.0, 100.0));
    let mut c = controller();
    c.exclude(wall);

    let v = c.move_by(Vec2::new(20.0, 0.0), Rect::new(0.0, 0.0, 30.0, 30.0), &world, &mut NoopListener);
    assert_eq!(v, Vec2::new(20.0, 0.0));

    c.include(wall);
    let v = c.move_by(Vec2::new(20.0, 0.0), Rect::new(0.0, 0.0, 30.0, 30.0), &world, &mut NoopListener);
    assert!(approx(v.x, 10.0));
}

// === Slopes ===

#[test]
fn climbs_walkable_slope() {
    let (world, ramp) = ramp_scene();
    let mut c = controller();
    let mut log = EventLog::new();
    // Bottom-right skin corner sits exactly one skin width from the ramp face
    let right = 40.0 + 1.0 / TAN_30;
    let rect = Rect::new(right - 30.0, 70.0, right, 100.0);

    let v = c.move_by(Vec2::new(10.0, 0.0), rect, &world, &mut log);

    let angle = 30f32.to_radians();
    assert!(approx(v.x, angle.cos() * 10.0), "v.x = {}", v.x);
    assert!(approx(v.y, -angle.sin() * 10.0), "v.y = {}", v.y);

    let s = c.collisions();
    assert!(s.climbing_slope);
    assert!(s.bottom);
    assert!(!s.right);
    assert!(approx(s.slope_angle, angle));
    assert!(s.is_touching(ramp));
    assert_eq!(log.starts(), 1);
}

#[test]
fn climb_keeps_upward_velocity_when_already_rising_faster() {
    let (world, _) = ramp_scene();
    let mut c = controller();
    let right = 40.0 + 1.0 / TAN_30;
    let rect = Rect::new(right - 30.0, 70.0, right, 100.0);

    // Jumping: rising 8 per frame beats the 5 the slope would give
    let v = c.move_by(Vec2::new(10.0, -8.0), rect, &world, &mut NoopListener);

    assert!(!c.collisions().climbing_slope);
    assert!(approx(v.y, -8.0));
    // Not climbing, so the ramp is treated as a wall
    assert!(c.collisions().right);
}

#[test]
fn climb_entry_walks_the_gap_before_the_slope_flat() {
    let (world, _) = ramp_scene();
    let mut c = controller();
    // Skin corner 4 units short of the ramp face: 3 units of flat walking first
    let right = 40.0 + 1.0 / TAN_30 - 3.0;
    let rect = Rect::new(right - 30.0, 70.0, right, 100.0);

    let v = c.move_by(Vec2::new(10.0, 0.0), rect, &world, &mut NoopListener);

    let angle = 30f32.to_radians();
    assert!(approx(v.x, 3.0 + angle.cos() * 7.0), "v.x = {}", v.x);
    assert!(approx(v.y, -angle.sin() * 7.0), "v.y = {}", v.y);
    assert!(c.collisions().climbing_slope);
    assert!(!c.collisions().right);
}

#[test]
fn wall_while_climbing_keeps_body_on_slope() {
    let (mut world, _) = ramp_scene();
    let wall = world.add_box(Rect::new(47.0, -100.0, 60.0, 85.0));
    let mut c = controller();
    let mut log = EventLog::new();
    let right = 40.0 + 1.0 / TAN_30;
    let rect = Rect::new(right - 30.0, 70.0, right, 100.0);

    let v = c.move_by(Vec2::new(10.0, 0.0), rect, &world, &mut log);

    // Upper rays stop at the wall; the climb is shortened to match
    let expected_x = 47.0 - (right - 1.0) - 1.0;
    assert!(approx(v.x, expected_x), "v.x = {}", v.x);
    assert!(approx(v.y, -TAN_30 * expected_x), "v.y = {}", v.y);

    let s = c.collisions();
    assert!(s.climbing_slope && s.bottom && s.right);
    assert!(s.is_touching(wall));
    assert_eq!(log.starts(), 2);
}

#[test]
fn ceiling_while_climbing_shortens_horizontal_motion() {
    let (mut world, _) = ramp_scene();
    let ceiling = world.add_box(Rect::new(-100.0, 0.0, 200.0, 68.0));
    let mut c = controller();
    let right = 40.0 + 1.0 / TAN_30;
    let rect = Rect::new(right - 30.0, 70.0, right, 100.0);

    let v = c.move_by(Vec2::new(10.0, 0.0), rect, &world, &mut NoopListener);

    // Head room of 2 above the skin allows a rise of 2, i.e. 2 / tan(30) across
    assert!(approx(v.y, -2.0), "v.y = {}", v.y);
    assert!(approx(v.x, 2.0 / TAN_30), "v.x = {}", v.x);

    let s = c.collisions();
    assert!(s.top && s.climbing_slope);
    assert!(s.is_touching(ceiling));
}

#[test]
fn steeper_segment_ahead_stops_climb_at_the_knee() {
    let t20 = 20f32.to_radians().tan();
    let t40 = 40f32.to_radians().tan();
    let knee_y = 100.0 - 60.0 * t20;

    let mut world = CollisionWorld::new();
    world
        .add_ramp(Rect::new(40.0, knee_y, 100.0, 100.0), true)
        .expect("valid ramp");
    let steep = world
        .add_polygon(&[
            Vec2::new(100.0, 100.0),
            Vec2::new(200.0, 100.0),
            Vec2::new(200.0, knee_y - 100.0 * t40),
            Vec2::new(100.0, knee_y),
        ])
        .expect("valid ramp");

    let mut c = controller();
    // Bottom-right skin corner at x = 95, one skin width left of the 20-degree face
    let corner_y = 100.0 - 56.0 * t20;
    let rect = Rect::new(66.0, corner_y + 1.0 - 30.0, 96.0, corner_y + 1.0);

    let v = c.move_by(Vec2::new(10.0, 0.0), rect, &world, &mut NoopListener);

    let rise = -20f32.to_radians().sin() * 10.0;
    let lifted_y = corner_y + rise;
    let face_x = 100.0 + (knee_y - lifted_y) / t40;
    assert!(approx(v.y, rise), "v.y = {}", v.y);
    assert!(approx(v.x, face_x - 95.0 - 1.0), "v.x = {}", v.x);

    let s = c.collisions();
    assert!(s.climbing_slope);
    assert!(approx(s.slope_angle, 40f32.to_radians()));
    assert!(s.is_touching(steep));
}

#[test]
fn slope_steeper_than_limit_acts_as_wall() {
    let (world, _) = ramp_scene();
    let config = PhysicsConfig {
        max_climb_angle: 20f32.to_radians(),
        ..PhysicsConfig::default()
    };
    let mut c = Controller::new(BODY, config);

    let v = c.move_by(Vec2::new(15.0, 0.0), Rect::new(0.0, 70.0, 30.0, 100.0), &world, &mut NoopListener);

    // Face is crossed at y = 99, 1/tan(30) units past the ramp foot
    let distance = 40.0 + 1.0 / TAN_30 - 29.0;
    assert!(approx(v.x, distance - 1.0), "v.x = {}", v.x);
    assert_eq!(v.y, 0.0);
    assert!(c.collisions().right);
    assert!(!c.collisions().climbing_slope);
}

#[test]
fn only_the_corner_ray_starts_a_climb() {
    let mut world = CollisionWorld::new();
    // Floating wedge with a 30-degree face, out of reach of the lowest ray
    world
        .add_polygon(&[
            Vec2::new(40.0, 91.0),
            Vec2::new(60.0, 91.0),
            Vec2::new(60.0, 91.0 - 20.0 * TAN_30),
        ])
        .expect("valid wedge");
    let mut c = controller();

    let v = c.move_by(Vec2::new(15.0, 0.0), Rect::new(0.0, 70.0, 30.0, 100.0), &world, &mut NoopListener);

    assert!(!c.collisions().climbing_slope);
    assert!(c.collisions().right);
    assert_eq!(v.y, 0.0);
    assert!(v.x < 15.0);
}

#[test]
fn descending_body_stays_on_slope() {
    let mut world = CollisionWorld::new();
    // Surface y = x * tan(30), falling away to the right
    let ramp = world
        .add_ramp(Rect::new(0.0, 0.0, 200.0, 200.0 * TAN_30), false)
        .expect("valid ramp");
    let mut c = controller();
    let mut log = EventLog::new();
    let rect = Rect::new(50.0, -2.0, 80.0, 50.0 * TAN_30);

    let v = c.move_by(Vec2::new(4.0, 1.0), rect, &world, &mut log);

    let angle = 30f32.to_radians();
    let s = c.collisions();
    assert!(s.descending_slope);
    assert!(s.bottom);
    assert!(approx(s.slope_angle, angle));
    assert!(approx(v.x, angle.cos() * 4.0), "v.x = {}", v.x);

    // The bottom-left skin corner ends one skin width above the surface
    let corner_x = rect.left + 1.0 + v.x;
    let corner_y = rect.bottom - 1.0 + v.y;
    assert!(approx(corner_x * TAN_30 - corner_y, 1.0), "gap = {}", corner_x * TAN_30 - corner_y);
    assert!(s.is_touching(ramp));
}

#[test]
fn descend_probe_ignores_slope_facing_away() {
    let mut world = CollisionWorld::new();
    world
        .add_ramp(Rect::new(0.0, 0.0, 200.0, 200.0 * TAN_30), false)
        .expect("valid ramp");
    let mut c = controller();
    let rect = Rect::new(50.0, -2.0, 80.0, 50.0 * TAN_30);

    // Moving left walks up this slope, not down it
    c.move_by(Vec2::new(-4.0, 1.0), rect, &world, &mut NoopListener);
    assert!(!c.collisions().descending_slope);
}

// === Hooks and events ===

#[test]
fn canceled_contacts_leave_no_trace() {
    let (world, _, rect) = floor_scene();
    let mut c = controller();
    let mut listener = CancelAll::default();

    let v = c.move_by(Vec2::new(0.0, 5.0), rect, &world, &mut listener);

    assert_eq!(v, Vec2::new(0.0, 5.0));
    assert!(!c.collisions().bottom);
    assert_eq!(c.collisions().contacts().count(), 0);
    assert_eq!(listener.asked, 4);
    assert_eq!(listener.events, 0);
}

#[test]
fn wall_contact_starts_once_and_ends_when_released() {
    let mut world = CollisionWorld::new();
    let wall = world.add_box(Rect::new(40.0, -100.0, 60.0, 100.0));
    let mut c = controller();
    let mut log = EventLog::new();
    let rect = Rect::new(0.0, 0.0, 30.0, 30.0);

    c.move_by(Vec2::new(20.0, 0.0), rect, &world, &mut log);
    assert_eq!((log.starts(), log.ends()), (1, 0));

    c.move_by(Vec2::new(20.0, 0.0), rect, &world, &mut log);
    assert_eq!((log.starts(), log.ends()), (1, 0));

    c.move_by(Vec2::new(-5.0, 0.0), rect, &world, &mut log);
    assert_eq!((log.starts(), log.ends()), (1, 1));

    match &log.events[0] {
        CollisionEvent::Start { body, other, side, .. } => {
            assert_eq!((*body, *other, *side), (BODY, wall, Side::Right));
        }
        other => panic!("expected start, got {:?}", other),
    }
    assert_eq!(log.events[1], CollisionEvent::End { body: BODY, other: wall });
}

// === Configuration ===

#[test]
fn reconfigure_clamps_counts_and_recomputes_spacing() {
    let config = PhysicsConfig {
        horizontal_ray_count: 0,
        vertical_ray_count: 1,
        ..PhysicsConfig::default()
    };
    let mut c = Controller::new(BODY, config);
    assert_eq!(c.config().horizontal_ray_count, 2);
    assert_eq!(c.config().vertical_ray_count, 2);

    // No bounds seen yet
    c.reconfigure(PhysicsConfig::default());
    assert_eq!(c.spacing(), RaySpacing::default());

    let world = CollisionWorld::new();
    c.move_by(Vec2::ZERO, Rect::new(0.0, 0.0, 30.0, 30.0), &world, &mut NoopListener);
    assert_eq!(c.spacing().horizontal, 28.0 / 3.0);

    c.reconfigure(PhysicsConfig {
        horizontal_ray_count: 8,
        vertical_ray_count: 15,
        ..PhysicsConfig::default()
    });
    assert_eq!(c.spacing().horizontal, 4.0);
    assert_eq!(c.spacing().vertical, 2.0);
}
