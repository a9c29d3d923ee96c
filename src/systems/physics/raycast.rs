use crate::core::math::Vec2;

use super::perf::count_ray;
use super::types::{ColliderId, RayHit};

/// World ray-intersection service.
///
/// Implementations return every hit within `max_distance`, nearest first, and
/// an empty vector when nothing is hit. `direction` is unit length. Queries
/// are read-only so independent bodies may share one world across threads.
pub trait WorldQuery {
    fn ray_cast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Vec<RayHit>;
}

impl<T: WorldQuery + ?Sized> WorldQuery for &T {
    fn ray_cast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Vec<RayHit> {
        (**self).ray_cast(origin, direction, max_distance)
    }
}

/// Ray queries on behalf of one body.
///
/// Filters out the body's own collider plus a caller supplied exclusion list
/// and guarantees ascending distance order.
pub struct RaycastQuery<'a, W: WorldQuery + ?Sized> {
    world: &'a W,
    body: ColliderId,
}

impl<'a, W: WorldQuery + ?Sized> RaycastQuery<'a, W> {
    pub fn new(world: &'a W, body: ColliderId) -> Self {
        Self { world, body }
    }

    pub fn body(&self) -> ColliderId {
        self.body
    }

    /// All hits along the ray, nearest first. Empty (not an error) on a miss.
    pub fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        exclude: &[ColliderId],
    ) -> Vec<RayHit> {
        if !(max_distance > 0.0) || direction.length_squared() == 0.0 || !origin.is_finite() {
            count_ray(false);
            return Vec::new();
        }

        let mut hits = self.world.ray_cast(origin, direction.normalize(), max_distance);
        hits.retain(|h| {
            h.collider != self.body
                && !exclude.contains(&h.collider)
                && h.distance <= max_distance
                && h.distance.is_finite()
        });
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        count_ray(!hits.is_empty());
        hits
    }

    /// Head of [`cast`](Self::cast)
    pub fn nearest(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        exclude: &[ColliderId],
    ) -> Option<RayHit> {
        self.cast(origin, direction, max_distance, exclude).into_iter().next()
    }
}
