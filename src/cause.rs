//! Event causation tracking.
//!
//! Host notifications carry a chain of actors responsible for the triggering
//! action, ordered from root cause to immediate cause (e.g. the player who
//! shot a projectile, then the projectile entity). The chain may be empty
//! when the source is environmental and no one is attributable.

use crate::ids::{EntityId, PlayerId};

/// A single link in a cause chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Player(PlayerId),
    Entity(EntityId),
}

/// What caused an event, as an ordered actor chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cause {
    actors: Vec<Actor>,
}

impl Cause {
    /// A cause with no attributable actor (environmental source).
    pub fn unknown() -> Self {
        Self::default()
    }

    /// A cause rooted directly at a player.
    pub fn from_player(player: PlayerId) -> Self {
        Self {
            actors: vec![Actor::Player(player)],
        }
    }

    /// A cause rooted directly at a non-player entity.
    pub fn from_entity(entity: EntityId) -> Self {
        Self {
            actors: vec![Actor::Entity(entity)],
        }
    }

    /// Append a more immediate actor to the chain.
    ///
    /// Used when an action passes through an intermediary, e.g.
    /// `Cause::from_player(shooter).then(Actor::Entity(arrow))`.
    pub fn then(mut self, actor: Actor) -> Self {
        self.actors.push(actor);
        self
    }

    /// Whether any actor is attributable at all.
    pub fn is_known(&self) -> bool {
        !self.actors.is_empty()
    }

    /// The root actor of the chain, if any.
    pub fn root(&self) -> Option<&Actor> {
        self.actors.first()
    }

    /// The first player in the chain, scanning from the root.
    ///
    /// This is the player held responsible for the action; `None` when the
    /// chain is empty or contains only non-player entities.
    pub fn first_player(&self) -> Option<PlayerId> {
        self.actors.iter().find_map(|actor| match actor {
            Actor::Player(player) => Some(*player),
            Actor::Entity(_) => None,
        })
    }
}
