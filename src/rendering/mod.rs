//! # Rendering Module
//!
//! The game core never draws anything itself. It tells a [`TileRenderer`]
//! what changed on the grid and the renderer keeps whatever presentation
//! state it needs, keyed by [`EntityId`].

pub mod display;

pub use display::*;

use crate::{EntityId, Level, Player, Position};

/// Receives grid changes from the game session.
pub trait TileRenderer {
    /// A new floor was generated; everything on it should be drawn.
    fn level_spawned(&mut self, level: &Level, player: &Player);

    /// An entity moved away from `pos`; the base tile shows again.
    fn entity_left_tile(&mut self, id: EntityId, pos: Position);

    /// An entity now stands on `pos` and hides the base tile.
    fn entity_entered_tile(&mut self, id: EntityId, symbol: char, pos: Position);

    /// An entity is gone for good.
    fn entity_removed(&mut self, id: EntityId);

    /// Drops everything drawn for the current floor.
    fn clear_level(&mut self);
}

/// A renderer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl TileRenderer for NullRenderer {
    fn level_spawned(&mut self, _level: &Level, _player: &Player) {}

    fn entity_left_tile(&mut self, _id: EntityId, _pos: Position) {}

    fn entity_entered_tile(&mut self, _id: EntityId, _symbol: char, _pos: Position) {}

    fn entity_removed(&mut self, _id: EntityId) {}

    fn clear_level(&mut self) {}
}
