use std::collections::BTreeSet;

use crate::systems::physics::{
    ColliderId, CollisionEvent, Contact, ContactListener, Resolution, Side,
};

/// Per-actor listener used while the scene steps.
///
/// One-way platforms only block a body landing on them from above; every
/// other contact with them is canceled so the body passes through. Events are
/// buffered on the actor and drained by the scene after the step.
pub struct SceneListener<'a> {
    one_way: &'a BTreeSet<ColliderId>,
    events: &'a mut Vec<CollisionEvent>,
}

impl<'a> SceneListener<'a> {
    pub fn new(one_way: &'a BTreeSet<ColliderId>, events: &'a mut Vec<CollisionEvent>) -> Self {
        Self { one_way, events }
    }
}

impl ContactListener for SceneListener<'_> {
    fn pre_resolve(&mut self, _body: ColliderId, contact: &Contact) -> Resolution {
        if !self.one_way.contains(&contact.collider) {
            return Resolution::Applied;
        }
        if contact.side == Side::Bottom && contact.direction.y > 0.0 {
            Resolution::Applied
        } else {
            Resolution::Canceled
        }
    }

    fn on_collision(&mut self, event: CollisionEvent) {
        self.events.push(event);
    }
}
