//! # Level
//!
//! A level is a base layer of tile symbols that never changes on its own,
//! with monsters and items kept as sparse overlays keyed by position. Only
//! occupied coordinates are stored, and a coordinate holds at most one
//! monster or one item.

use super::{Position, TileKind, UPSTAIRS_SYMBOL};
use crate::{Entity, Foe, RrogueError, RrogueResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An item lying on the floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Glyph drawn over the base tile
    pub symbol: char,
    /// Display name
    pub name: String,
}

impl Item {
    /// Creates a new item.
    pub fn new(symbol: char, name: impl Into<String>) -> Self {
        Self {
            symbol,
            name: name.into(),
        }
    }
}

/// One dungeon floor.
#[derive(Debug, Clone)]
pub struct Level {
    /// Current floor index; -1 is the outdoor approach
    pub floor: i32,
    width: usize,
    height: usize,
    base: Vec<Vec<char>>,
    monsters: HashMap<Position, Foe>,
    items: HashMap<Position, Item>,
}

impl Level {
    /// Creates a level of the given size filled with floor tiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::{Level, Position};
    ///
    /// let level = Level::new(0, 10, 10);
    /// assert_eq!(level.tile_at(Position::new(3, 3)), Some('.'));
    /// assert!(!level.is_monster_at(Position::new(3, 3)));
    /// ```
    pub fn new(floor: i32, width: usize, height: usize) -> Self {
        Self {
            floor,
            width,
            height,
            base: vec![vec![super::FLOOR_SYMBOL; width]; height],
            monsters: HashMap::new(),
            items: HashMap::new(),
        }
    }

    /// Builds a level from rows of tile symbols.
    pub fn from_rows(floor: i32, rows: &[&str]) -> RrogueResult<Self> {
        let mut level = Self::new(floor, 0, 0);
        level.install(floor, rows)?;
        Ok(level)
    }

    /// Replaces the base layer with `rows` and moves to `floor`.
    ///
    /// Monsters and items of the previous layout are always dropped before
    /// the new rows go in. Rows must be non-empty and equally wide; on
    /// error the level is left empty of occupants but otherwise unchanged.
    pub fn install(&mut self, floor: i32, rows: &[&str]) -> RrogueResult<()> {
        self.clear_occupants();

        let base: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
        let width = base.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(RrogueError::GenerationFailed(
                "Level layout has no tiles".to_string(),
            ));
        }
        if let Some(row) = base.iter().position(|row| row.len() != width) {
            return Err(RrogueError::GenerationFailed(format!(
                "Row {} is {} tiles wide, expected {}",
                row,
                base[row].len(),
                width
            )));
        }

        self.floor = floor;
        self.width = width;
        self.height = base.len();
        self.base = base;
        Ok(())
    }

    /// Width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows of the base layer, top to bottom.
    pub fn rows(&self) -> &[Vec<char>] {
        &self.base
    }

    /// Checks whether a position lies on the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Base-layer symbol at a position, if on the grid.
    pub fn tile_at(&self, pos: Position) -> Option<char> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.base[pos.y as usize][pos.x as usize])
    }

    /// Passability class of the base tile at a position.
    pub fn tile_kind_at(&self, pos: Position) -> Option<TileKind> {
        self.tile_at(pos).map(TileKind::classify)
    }

    /// Overwrites one base-layer symbol.
    pub fn set_tile(&mut self, pos: Position, symbol: char) -> RrogueResult<()> {
        if !self.in_bounds(pos) {
            return Err(RrogueError::InvalidAction(format!(
                "Tile {} is outside the level",
                pos
            )));
        }
        self.base[pos.y as usize][pos.x as usize] = symbol;
        Ok(())
    }

    /// All positions whose base tile has the given kind, row by row.
    pub fn positions_of(&self, kind: TileKind) -> Vec<Position> {
        let mut positions = Vec::new();
        for (y, row) in self.base.iter().enumerate() {
            for (x, &symbol) in row.iter().enumerate() {
                if TileKind::classify(symbol) == kind {
                    positions.push(Position::new(x as i32, y as i32));
                }
            }
        }
        positions
    }

    /// Is the queried position occupied by stairs going up?
    pub fn is_upstairs_at(&self, pos: Position) -> bool {
        self.tile_at(pos) == Some(UPSTAIRS_SYMBOL)
    }

    /// Does the base tile block movement?
    ///
    /// Monsters are a separate check. Positions off the grid are not
    /// untravellable; leaving the grid is decided by the movement code.
    pub fn is_untravellable_at(&self, pos: Position) -> bool {
        self.tile_kind_at(pos) == Some(TileKind::Obstacle)
    }

    /// Does the tile contain a monster?
    pub fn is_monster_at(&self, pos: Position) -> bool {
        self.monsters.contains_key(&pos)
    }

    /// Checks whether a monster or an item is at the position.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.monsters.contains_key(&pos) || self.items.contains_key(&pos)
    }

    /// Places a foe at its own position.
    pub fn place_monster(&mut self, foe: Foe) -> RrogueResult<()> {
        let pos = foe.position();
        if self.is_occupied(pos) {
            return Err(RrogueError::Occupied(pos));
        }
        self.monsters.insert(pos, foe);
        Ok(())
    }

    /// The monster at a position.
    pub fn monster_at(&self, pos: Position) -> Option<&Foe> {
        self.monsters.get(&pos)
    }

    /// The monster at a position, mutably.
    pub fn monster_at_mut(&mut self, pos: Position) -> Option<&mut Foe> {
        self.monsters.get_mut(&pos)
    }

    /// Removes and returns the monster at a position.
    pub fn remove_monster(&mut self, pos: Position) -> Option<Foe> {
        self.monsters.remove(&pos)
    }

    /// Iterates over all monsters in no particular order.
    pub fn monsters(&self) -> impl Iterator<Item = &Foe> {
        self.monsters.values()
    }

    /// Number of monsters on the level.
    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }

    /// Drops an item on a position.
    pub fn place_item(&mut self, pos: Position, item: Item) -> RrogueResult<()> {
        if self.is_occupied(pos) {
            return Err(RrogueError::Occupied(pos));
        }
        self.items.insert(pos, item);
        Ok(())
    }

    /// The item at a position.
    pub fn item_at(&self, pos: Position) -> Option<&Item> {
        self.items.get(&pos)
    }

    /// Removes and returns the item at a position.
    pub fn remove_item(&mut self, pos: Position) -> Option<Item> {
        self.items.remove(&pos)
    }

    /// Number of items on the level.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Empties the monster and item overlays.
    pub fn clear_occupants(&mut self) {
        self.monsters.clear();
        self.items.clear();
    }

    /// Topmost visible symbol at a position: monster, then item, then base.
    pub fn char_at(&self, pos: Position) -> Option<char> {
        if let Some(foe) = self.monsters.get(&pos) {
            return Some(foe.symbol());
        }
        if let Some(item) = self.items.get(&pos) {
            return Some(item.symbol);
        }
        self.tile_at(pos)
    }
}
