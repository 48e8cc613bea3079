//! # ASCII Display
//!
//! A text renderer for terminals and tests. It copies the base layer when a
//! floor spawns and afterwards only follows notifications, so what it shows
//! is exactly what the session told it.

use super::TileRenderer;
use crate::{Entity, EntityId, Level, Player, Position};
use log::{trace, warn};
use std::collections::{HashMap, HashSet};

/// Glyph drawn for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyph {
    symbol: char,
    position: Position,
}

/// Character-grid view of the current floor.
#[derive(Debug, Clone, Default)]
pub struct AsciiView {
    base: Vec<Vec<char>>,
    /// Base tiles covered by an entity
    hidden: HashSet<Position>,
    glyphs: HashMap<EntityId, Glyph>,
}

impl AsciiView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities currently drawn.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the base tile at `pos` is covered.
    pub fn is_hidden(&self, pos: Position) -> bool {
        self.hidden.contains(&pos)
    }

    /// Symbol shown at a position, if it is on the grid.
    pub fn symbol_at(&self, pos: Position) -> Option<char> {
        if let Some(glyph) = self.glyphs.values().find(|glyph| glyph.position == pos) {
            return Some(glyph.symbol);
        }
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.base
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }

    /// The whole grid, one string per row.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::{AncestryType, AsciiView, Attributes, Level, Player, TileRenderer};
    ///
    /// let level = Level::from_rows(0, &["###", "#.#", "###"]).unwrap();
    /// let mut player = Player::new("Hero", AncestryType::Human, Attributes::new());
    /// player.teleport(rrogue::Position::new(1, 1));
    ///
    /// let mut view = AsciiView::new();
    /// view.level_spawned(&level, &player);
    /// assert_eq!(view.render(), vec!["###", "#@#", "###"]);
    /// ```
    pub fn render(&self) -> Vec<String> {
        let mut grid = self.base.clone();
        for glyph in self.glyphs.values() {
            let (x, y) = (glyph.position.x, glyph.position.y);
            if x < 0 || y < 0 {
                continue;
            }
            if let Some(cell) = grid
                .get_mut(y as usize)
                .and_then(|row| row.get_mut(x as usize))
            {
                *cell = glyph.symbol;
            }
        }
        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }

    fn draw(&mut self, id: EntityId, symbol: char, position: Position) {
        self.hidden.insert(position);
        self.glyphs.insert(id, Glyph { symbol, position });
    }
}

impl TileRenderer for AsciiView {
    fn level_spawned(&mut self, level: &Level, player: &Player) {
        self.clear_level();
        self.base = level.rows().to_vec();
        for foe in level.monsters() {
            self.draw(foe.id(), foe.symbol(), foe.position());
        }
        self.draw(player.id(), player.symbol(), player.position());
        trace!("Spawned {} glyphs on floor {}", self.glyphs.len(), level.floor);
    }

    fn entity_left_tile(&mut self, id: EntityId, pos: Position) {
        self.hidden.remove(&pos);
        if let Some(glyph) = self.glyphs.get(&id) {
            if glyph.position == pos {
                self.glyphs.remove(&id);
            }
        }
    }

    fn entity_entered_tile(&mut self, id: EntityId, symbol: char, pos: Position) {
        self.draw(id, symbol, pos);
    }

    fn entity_removed(&mut self, id: EntityId) {
        match self.glyphs.remove(&id) {
            Some(glyph) => {
                self.hidden.remove(&glyph.position);
            }
            None => warn!("Removing an entity that was never drawn: {}", id),
        }
    }

    fn clear_level(&mut self) {
        self.base.clear();
        self.hidden.clear();
        self.glyphs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AncestryType, Attributes, Foe, FoeKind};

    fn setup() -> (Level, Player) {
        let mut level = Level::from_rows(1, &["#####", "#...#", "#...#", "#####"]).unwrap();
        level
            .place_monster(Foe::new(FoeKind::Troll, Position::new(3, 2), 20))
            .unwrap();
        let mut player = Player::new("Hero", AncestryType::Human, Attributes::new());
        player.teleport(Position::new(1, 1));
        (level, player)
    }

    #[test]
    fn test_spawn_draws_entities_over_base() {
        let (level, player) = setup();
        let mut view = AsciiView::new();
        view.level_spawned(&level, &player);
        assert_eq!(view.render(), vec!["#####", "#@..#", "#..T#", "#####"]);
        assert_eq!(view.glyph_count(), 2);
        assert!(view.is_hidden(Position::new(1, 1)));
    }

    #[test]
    fn test_move_reveals_old_tile() {
        let (level, player) = setup();
        let mut view = AsciiView::new();
        view.level_spawned(&level, &player);

        view.entity_left_tile(player.id(), Position::new(1, 1));
        view.entity_entered_tile(player.id(), '@', Position::new(2, 1));

        assert_eq!(view.symbol_at(Position::new(1, 1)), Some('.'));
        assert_eq!(view.symbol_at(Position::new(2, 1)), Some('@'));
        assert!(!view.is_hidden(Position::new(1, 1)));
    }

    #[test]
    fn test_removed_entity_disappears() {
        let (level, player) = setup();
        let troll = level.monster_at(Position::new(3, 2)).unwrap().id();
        let mut view = AsciiView::new();
        view.level_spawned(&level, &player);

        view.entity_removed(troll);
        assert_eq!(view.symbol_at(Position::new(3, 2)), Some('.'));
        assert_eq!(view.glyph_count(), 1);
    }

    #[test]
    fn test_clear_level_empties_view() {
        let (level, player) = setup();
        let mut view = AsciiView::new();
        view.level_spawned(&level, &player);
        view.clear_level();
        assert!(view.render().is_empty());
        assert_eq!(view.symbol_at(Position::new(0, 0)), None);
    }
}
