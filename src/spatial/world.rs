//! CollisionWorld - static convex geometry with ray queries
//!
//! Stores axis-aligned boxes and convex polygons (ramps are triangles). Rays
//! are clipped against each shape's edge half-planes (Cyrus-Beck), which gives
//! the entry distance and the outward normal of the entered edge in one pass.
//!
//! The world is read-only during a step, so bodies resolved in parallel can
//! query it concurrently.

use crate::core::math::{Rect, Vec2};
use crate::systems::physics::{ColliderId, RayHit, WorldQuery};

/// Parallel edges closer than this are treated as parallel
const PARALLEL_EPSILON: f32 = 1e-9;
/// Smallest polygon area accepted
const MIN_AREA: f32 = 1e-4;

/// Shape of a world collider
#[derive(Clone, Debug, PartialEq)]
pub enum ColliderShape {
    Box(Rect),
    Polygon(Vec<Vec2>),
}

#[derive(Clone, Debug)]
struct WorldCollider {
    id: ColliderId,
    shape: ColliderShape,
    vertices: Vec<Vec2>,
    /// Outward normal of edge `i` (vertices[i] -> vertices[i + 1])
    normals: Vec<Vec2>,
    aabb: Rect,
}

impl WorldCollider {
    fn new(id: ColliderId, shape: ColliderShape) -> Self {
        let vertices = match &shape {
            ColliderShape::Box(r) => r.corners().to_vec(),
            ColliderShape::Polygon(points) => points.clone(),
        };
        let normals = outward_normals(&vertices);
        let aabb = aabb_of(&vertices);
        Self { id, shape, vertices, normals, aabb }
    }

    /// Entry distance and edge normal, `None` on a miss or when the ray starts inside
    fn ray_entry(&self, origin: Vec2, dir: Vec2, max_distance: f32) -> Option<(f32, Vec2)> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut enter_normal = None;

        for (v, n) in self.vertices.iter().zip(self.normals.iter()) {
            let denom = n.dot(dir);
            // >= 0 when the origin lies on the inner side of this edge
            let num = n.dot(*v - origin);

            if denom.abs() < PARALLEL_EPSILON {
                if num < 0.0 {
                    return None;
                }
                continue;
            }

            let t = num / denom;
            if denom < 0.0 {
                if t > t_enter {
                    t_enter = t;
                    enter_normal = Some(*n);
                }
            } else if t < t_exit {
                t_exit = t;
            }

            if t_enter > t_exit {
                return None;
            }
        }

        let normal = enter_normal?;
        if t_enter < 0.0 || t_enter > max_distance {
            return None;
        }
        Some((t_enter, normal))
    }
}

/// The collision world containing all geometry
#[derive(Clone, Debug, Default)]
pub struct CollisionWorld {
    colliders: Vec<WorldCollider>,
    next_id: u32,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self { colliders: Vec::new(), next_id: 1 }
    }

    fn alloc_id(&mut self) -> ColliderId {
        // Id 0 is never handed out
        if self.next_id == 0 {
            self.next_id = 1;
        }
        let id = ColliderId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Add an axis-aligned box
    pub fn add_box(&mut self, rect: Rect) -> ColliderId {
        let id = self.alloc_id();
        self.colliders.push(WorldCollider::new(id, ColliderShape::Box(rect)));
        id
    }

    /// Add a convex polygon (either winding).
    ///
    /// Rejects fewer than 3 points, non-finite points, near-zero area and
    /// concave outlines.
    pub fn add_polygon(&mut self, points: &[Vec2]) -> Result<ColliderId, String> {
        validate_convex(points)?;
        let id = self.alloc_id();
        self.colliders
            .push(WorldCollider::new(id, ColliderShape::Polygon(points.to_vec())));
        Ok(id)
    }

    /// Add a right-triangle ramp filling `base`. `rising_right` puts the high
    /// end on the right edge.
    pub fn add_ramp(&mut self, base: Rect, rising_right: bool) -> Result<ColliderId, String> {
        let apex = if rising_right {
            Vec2::new(base.right, base.top)
        } else {
            Vec2::new(base.left, base.top)
        };
        self.add_polygon(&[
            Vec2::new(base.left, base.bottom),
            Vec2::new(base.right, base.bottom),
            apex,
        ])
    }

    /// Move a box collider. Returns false for unknown ids and polygons.
    pub fn set_rect(&mut self, id: ColliderId, rect: Rect) -> bool {
        let Some(c) = self.colliders.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        if !matches!(c.shape, ColliderShape::Box(_)) {
            return false;
        }
        *c = WorldCollider::new(id, ColliderShape::Box(rect));
        true
    }

    pub fn remove(&mut self, id: ColliderId) -> bool {
        let before = self.colliders.len();
        self.colliders.retain(|c| c.id != id);
        self.colliders.len() != before
    }

    pub fn get(&self, id: ColliderId) -> Option<&ColliderShape> {
        self.colliders.iter().find(|c| c.id == id).map(|c| &c.shape)
    }

    pub fn bounds_of(&self, id: ColliderId) -> Option<Rect> {
        self.colliders.iter().find(|c| c.id == id).map(|c| c.aabb)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn clear(&mut self) {
        self.colliders.clear();
        self.next_id = 1;
    }
}

impl WorldQuery for CollisionWorld {
    fn ray_cast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Vec<RayHit> {
        let end = origin + direction * max_distance;
        let ray_box = Rect::new(
            origin.x.min(end.x),
            origin.y.min(end.y),
            origin.x.max(end.x),
            origin.y.max(end.y),
        );

        let mut hits: Vec<RayHit> = self
            .colliders
            .iter()
            .filter(|c| overlaps(&c.aabb, &ray_box))
            .filter_map(|c| {
                c.ray_entry(origin, direction, max_distance).map(|(t, normal)| RayHit {
                    distance: t,
                    point: origin + direction * t,
                    normal,
                    collider: c.id,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left <= b.right && a.right >= b.left && a.top <= b.bottom && a.bottom >= b.top
}

fn aabb_of(points: &[Vec2]) -> Rect {
    let mut r = Rect::new(f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);
    for p in points {
        r.left = r.left.min(p.x);
        r.top = r.top.min(p.y);
        r.right = r.right.max(p.x);
        r.bottom = r.bottom.max(p.y);
    }
    r
}

fn centroid(points: &[Vec2]) -> Vec2 {
    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + *p);
    sum * (1.0 / points.len() as f32)
}

/// Edge normals pointing away from the centroid, independent of winding
fn outward_normals(points: &[Vec2]) -> Vec<Vec2> {
    let c = centroid(points);
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            let e = b - a;
            let normal = Vec2::new(e.y, -e.x).normalize();
            if normal.dot(c - a) > 0.0 {
                -normal
            } else {
                normal
            }
        })
        .collect()
}

fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    let twice: f32 = (0..n).map(|i| points[i].cross(points[(i + 1) % n])).sum();
    twice * 0.5
}

fn validate_convex(points: &[Vec2]) -> Result<(), String> {
    if points.len() < 3 {
        return Err(format!("polygon needs at least 3 points, got {}", points.len()));
    }
    if points.iter().any(|p| !p.is_finite()) {
        return Err("polygon has non-finite points".to_string());
    }
    if signed_area(points).abs() < MIN_AREA {
        return Err("polygon has no area".to_string());
    }

    let n = points.len();
    let mut winding = 0.0f32;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let turn = (b - a).cross(c - b);
        if turn.abs() <= f32::EPSILON {
            continue;
        }
        if winding == 0.0 {
            winding = turn.signum();
        } else if turn.signum() != winding {
            return Err("polygon is not convex".to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/world_tests.rs"]
mod tests;
