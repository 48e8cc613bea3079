//! # Player
//!
//! The player character: the outcome of character creation plus hit points
//! and mana.

use super::{Entity, EntityCore};
use crate::config;
use crate::{AncestryType, Attributes, Position};
use log::debug;
use serde::{Deserialize, Serialize};

/// Glyph the player is drawn with.
pub const PLAYER_SYMBOL: char = '@';

/// The player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    core: EntityCore,
    /// Name of the player
    pub name: String,
    /// Ancestry chosen at character creation
    pub ancestry: AncestryType,
    /// Attribute points, each between 0 and 3
    pub attributes: Attributes,
    pub max_mana: i32,
    pub current_mana: i32,
}

impl Player {
    /// Creates a player at the origin.
    ///
    /// Maximum hit points grow by five for every point of constitution.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::{AncestryType, Attributes, Entity, Player};
    ///
    /// let attributes = Attributes::from_slice(&[1, 1, 2, 1, 0]).unwrap();
    /// let player = Player::new("Hero", AncestryType::Dwarf, attributes);
    /// assert_eq!(player.vitals().max_hit_points, 35);
    /// assert!(player.is_alive());
    /// ```
    pub fn new(name: impl Into<String>, ancestry: AncestryType, attributes: Attributes) -> Self {
        let max_hit_points = config::BASE_HIT_POINTS
            + config::HIT_POINTS_PER_CONSTITUTION * i32::from(attributes.constitution);
        Self {
            core: EntityCore::new(PLAYER_SYMBOL, Position::origin(), max_hit_points),
            name: name.into(),
            ancestry,
            attributes,
            max_mana: config::BASE_MANA,
            current_mana: config::BASE_MANA,
        }
    }

    /// Sets maximum hit points without healing.
    pub fn set_max_hit_points(&mut self, amount: i32) {
        debug!("Setting max hit points of {} to {}", self.name, amount);
        self.core.vitals.max_hit_points = amount;
    }

    /// Places the player without recording a previous position.
    ///
    /// Used when a level is (re)generated and the player appears at the
    /// spawn point rather than walking there.
    pub fn teleport(&mut self, position: Position) {
        self.core.position = position;
        self.core.previous_position = None;
    }
}

impl Entity for Player {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DamageOutcome;

    fn hero() -> Player {
        Player::new("Hero", AncestryType::Human, Attributes::from_slice(&[1, 1, 1, 1, 1]).unwrap())
    }

    #[test]
    fn test_player_defaults() {
        let player = hero();
        assert_eq!(player.name, "Hero");
        assert_eq!(player.symbol(), PLAYER_SYMBOL);
        assert_eq!(player.position(), Position::origin());
        assert_eq!(player.vitals().max_hit_points, 30);
        assert_eq!(player.max_mana, 5);
        assert_eq!(player.current_mana, 5);
    }

    #[test]
    fn test_set_position_remembers_previous() {
        let mut player = hero();
        player.set_position(Position::new(2, 3));
        player.set_position(Position::new(3, 3));
        assert_eq!(player.position(), Position::new(3, 3));
        assert_eq!(player.previous_position(), Some(Position::new(2, 3)));
    }

    #[test]
    fn test_teleport_forgets_previous() {
        let mut player = hero();
        player.set_position(Position::new(2, 3));
        player.teleport(Position::new(5, 5));
        assert_eq!(player.position(), Position::new(5, 5));
        assert_eq!(player.previous_position(), None);
    }

    #[test]
    fn test_set_max_hit_points_does_not_heal() {
        let mut player = hero();
        player.take_damage(10);
        player.set_max_hit_points(50);
        assert_eq!(player.vitals().max_hit_points, 50);
        assert_eq!(player.vitals().current_hit_points, 20);
    }

    #[test]
    fn test_player_can_die() {
        let mut player = hero();
        assert_eq!(player.take_damage(100), DamageOutcome::Died);
        assert!(!player.is_alive());
    }
}
