//! # Entities Module
//!
//! The player and foes share a small common core: identity, grid position,
//! hit points and a display symbol. Nothing here knows about the renderer;
//! presentation keeps its own table keyed by [`EntityId`].

pub mod foe;
pub mod player;

pub use foe::*;
pub use player::*;

use crate::config;
use crate::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for game entities.
pub type EntityId = Uuid;

/// Creates a new unique entity ID.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}

/// Hit point bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub max_hit_points: i32,
    pub current_hit_points: i32,
}

impl Vitals {
    /// Full health at the given maximum.
    pub fn new(max_hit_points: i32) -> Self {
        Self {
            max_hit_points,
            current_hit_points: max_hit_points,
        }
    }

    /// Subtracts damage and reports whether the entity survived.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        self.current_hit_points -= amount;
        if self.current_hit_points <= 0 {
            DamageOutcome::Died
        } else {
            DamageOutcome::Survived
        }
    }

    /// Checks whether any hit points remain.
    pub fn is_alive(&self) -> bool {
        self.current_hit_points > 0
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::new(config::BASE_HIT_POINTS)
    }
}

/// Result of applying damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Survived,
    Died,
}

/// State shared by every entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCore {
    pub id: EntityId,
    pub position: Position,
    pub previous_position: Option<Position>,
    pub vitals: Vitals,
    pub symbol: char,
}

impl EntityCore {
    /// Creates a core with a fresh ID and full health.
    pub fn new(symbol: char, position: Position, max_hit_points: i32) -> Self {
        Self {
            id: new_entity_id(),
            position,
            previous_position: None,
            vitals: Vitals::new(max_hit_points),
            symbol,
        }
    }
}

/// Common interface for the player and foes.
pub trait Entity {
    /// Shared entity state.
    fn core(&self) -> &EntityCore;

    /// Shared entity state, mutably.
    fn core_mut(&mut self) -> &mut EntityCore;

    fn id(&self) -> EntityId {
        self.core().id
    }

    fn position(&self) -> Position {
        self.core().position
    }

    fn previous_position(&self) -> Option<Position> {
        self.core().previous_position
    }

    /// Moves the entity, remembering where it came from.
    fn set_position(&mut self, position: Position) {
        let core = self.core_mut();
        core.previous_position = Some(core.position);
        core.position = position;
    }

    fn symbol(&self) -> char {
        self.core().symbol
    }

    fn vitals(&self) -> &Vitals {
        &self.core().vitals
    }

    fn is_alive(&self) -> bool {
        self.core().vitals.is_alive()
    }

    /// Applies damage from an attack.
    fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        self.core_mut().vitals.take_damage(amount)
    }
}
