//! Contacts, resolve hooks and collision events
//!
//! A ray hit becomes a [`Contact`] before the resolver commits anything. The
//! injected [`ContactListener`] may veto it in `pre_resolve`; committed contacts
//! are reported to `post_resolve` and feed the start/end event stream.

use serde::Serialize;

use crate::core::math::{Rect, Vec2};

use super::collision_state::CollisionState;
use super::types::{ColliderId, RayHit};

/// Side of the body that was struck
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Width of the top/bottom bands, as a fraction of the skin width. Must stay
/// below 1: horizontal fan rays start exactly one skin width inside the edges.
const SIDE_BAND: f32 = 0.5;

impl Side {
    /// Checks top, then bottom, then left/right, so corner points classify vertically.
    ///
    /// Points within `tolerance` inside the top or bottom edge still count as
    /// that edge, so a body resting on a surface up to float rounding is hit
    /// on its bottom.
    pub fn classify(point: Vec2, body: &Rect, tolerance: f32) -> Side {
        if point.y <= body.top + tolerance {
            Side::Top
        } else if point.y >= body.bottom - tolerance {
            Side::Bottom
        } else if point.x <= body.center().x {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// A ray hit seen from the body's point of view
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Contact {
    pub collider: ColliderId,
    pub side: Side,
    pub point: Vec2,
    pub normal: Vec2,
    /// Gap left between the skin and the surface (`hit.distance - skin_width`)
    pub separation: f32,
    /// Direction of the ray that found the contact
    pub direction: Vec2,
}

impl Contact {
    pub fn from_hit(hit: &RayHit, body: &Rect, skin_width: f32, direction: Vec2) -> Self {
        Self {
            collider: hit.collider,
            side: Side::classify(hit.point, body, skin_width.max(0.0) * SIDE_BAND),
            point: hit.point,
            normal: hit.normal,
            separation: hit.distance - skin_width,
            direction,
        }
    }
}

/// Outcome of the pre-resolve hook
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Canceled,
}

/// Collision-state transition for one body/collider pair
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum CollisionEvent {
    #[serde(rename = "collisionStart")]
    Start {
        body: ColliderId,
        other: ColliderId,
        side: Side,
        contact: Contact,
    },
    #[serde(rename = "collisionEnd")]
    End { body: ColliderId, other: ColliderId },
}

impl CollisionEvent {
    pub fn body(&self) -> ColliderId {
        match self {
            CollisionEvent::Start { body, .. } | CollisionEvent::End { body, .. } => *body,
        }
    }

    pub fn other(&self) -> ColliderId {
        match self {
            CollisionEvent::Start { other, .. } | CollisionEvent::End { other, .. } => *other,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, CollisionEvent::Start { .. })
    }
}

/// Game-side reactions to contacts (damage, one-way platforms, sounds...).
///
/// Every method runs synchronously inside resolution.
pub trait ContactListener {
    /// Called before a ray's velocity change is committed
    fn pre_resolve(&mut self, _body: ColliderId, _contact: &Contact) -> Resolution {
        Resolution::Applied
    }

    /// Called after a ray's velocity change was committed
    fn post_resolve(&mut self, _body: ColliderId, _contact: &Contact) {}

    fn on_collision(&mut self, _event: CollisionEvent) {}
}

/// Accepts everything, reports nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl ContactListener for NoopListener {}

/// Accepts everything and records the event stream
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<CollisionEvent>,
    pub resolved: Vec<Contact>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starts(&self) -> usize {
        self.events.iter().filter(|e| e.is_start()).count()
    }

    pub fn ends(&self) -> usize {
        self.events.iter().filter(|e| !e.is_start()).count()
    }

    pub fn drain(&mut self) -> Vec<CollisionEvent> {
        self.resolved.clear();
        std::mem::take(&mut self.events)
    }
}

impl ContactListener for EventLog {
    fn post_resolve(&mut self, _body: ColliderId, contact: &Contact) {
        self.resolved.push(*contact);
    }

    fn on_collision(&mut self, event: CollisionEvent) {
        self.events.push(event);
    }
}

/// Routes one body's contacts to its listener for the duration of a move
pub struct ContactEventer<'a, L: ContactListener + ?Sized> {
    body: ColliderId,
    listener: &'a mut L,
}

impl<'a, L: ContactListener + ?Sized> ContactEventer<'a, L> {
    pub fn new(body: ColliderId, listener: &'a mut L) -> Self {
        Self { body, listener }
    }

    pub fn pre_resolve(&mut self, contact: &Contact) -> Resolution {
        self.listener.pre_resolve(self.body, contact)
    }

    /// Register a committed contact: emits `Start` for a new episode, then
    /// runs the post-resolve hook.
    pub fn commit(&mut self, state: &mut CollisionState, contact: &Contact) {
        if state.add_contact(contact.collider) && state.is_new_episode(contact.collider) {
            self.listener.on_collision(CollisionEvent::Start {
                body: self.body,
                other: contact.collider,
                side: contact.side,
                contact: *contact,
            });
        }
        self.listener.post_resolve(self.body, contact);
    }

    /// Emit `End` for every contact that did not survive this move
    pub fn finish(&mut self, state: &CollisionState) {
        for other in state.ended_contacts() {
            self.listener.on_collision(CollisionEvent::End { body: self.body, other });
        }
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
