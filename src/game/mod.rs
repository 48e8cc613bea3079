//! # Game Module
//!
//! The play session and the events it reports.
//!
//! Every player action produces a list of [`GameEvent`]s. The session feeds
//! them through [`GameStatistics::update_from_event`] and its message log
//! before handing them to the caller.

pub mod state;

pub use state::*;

use crate::{EntityId, Position};
use serde::{Deserialize, Serialize};

/// Something that happened in the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An entity walked from one tile to another
    EntityMoved {
        entity_id: EntityId,
        from: Position,
        to: Position,
    },
    /// An entity walked into an obstacle
    EntityBlocked { entity_id: EntityId, at: Position },
    /// An entity lost hit points
    EntityDamaged {
        entity_id: EntityId,
        damage: i32,
        source: Option<EntityId>,
    },
    /// An entity ran out of hit points and left the level
    EntityDied {
        entity_id: EntityId,
        killer: Option<EntityId>,
    },
    /// The player went to another floor
    FloorChanged { from: i32, to: i32 },
    /// A line for the message log
    Message {
        text: String,
        importance: MessageImportance,
    },
}

/// How prominently a message should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageImportance {
    /// Movement warnings such as bumping into walls
    Warning,
    /// Story text
    Narrative,
}

/// Counters describing the current run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Tiles the player walked
    pub steps_taken: u64,
    /// Times the player walked into an obstacle
    pub bumps: u32,
    pub foes_defeated: u32,
    pub damage_dealt: u64,
    pub floors_ascended: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    ///
    /// Only events caused by `player` count.
    pub fn update_from_event(&mut self, event: &GameEvent, player: EntityId) {
        match event {
            GameEvent::EntityMoved { entity_id, .. } if *entity_id == player => {
                self.steps_taken += 1;
            }
            GameEvent::EntityBlocked { entity_id, .. } if *entity_id == player => {
                self.bumps += 1;
            }
            GameEvent::EntityDamaged {
                damage,
                source: Some(source),
                ..
            } if *source == player => {
                self.damage_dealt += (*damage).max(0) as u64;
            }
            GameEvent::EntityDied {
                killer: Some(killer),
                ..
            } if *killer == player => {
                self.foes_defeated += 1;
            }
            GameEvent::FloorChanged { from, to } if to > from => {
                self.floors_ascended += 1;
            }
            _ => {}
        }
    }
}
