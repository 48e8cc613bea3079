//! # Tiles
//!
//! A tile is a single display character that also encodes how it can be
//! traversed. Classification is a pure function of the character.

use serde::{Deserialize, Serialize};

/// Walkable ground.
pub const FLOOR_SYMBOL: char = '.';

/// Stairway leading to the next floor.
pub const UPSTAIRS_SYMBOL: char = '^';

/// Symbols that block movement: stone wall, two kinds of tree, wooden door.
pub const OBSTACLE_SYMBOLS: [char; 4] = ['#', 'ȹ', '⚶', '='];

/// Passability class of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Empty ground; foes may be scattered here
    Floor,
    /// Walls and other untravellable scenery
    Obstacle,
    /// Stairway going up
    UpStairs,
    /// Passable decoration such as flowers, writing or paving
    Decoration,
}

impl TileKind {
    /// Classifies a tile character.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::TileKind;
    ///
    /// assert_eq!(TileKind::classify('#'), TileKind::Obstacle);
    /// assert_eq!(TileKind::classify('^'), TileKind::UpStairs);
    /// assert_eq!(TileKind::classify('.'), TileKind::Floor);
    /// assert_eq!(TileKind::classify('⚘'), TileKind::Decoration);
    /// ```
    pub fn classify(symbol: char) -> TileKind {
        if symbol == UPSTAIRS_SYMBOL {
            TileKind::UpStairs
        } else if OBSTACLE_SYMBOLS.contains(&symbol) {
            TileKind::Obstacle
        } else if symbol == FLOOR_SYMBOL {
            TileKind::Floor
        } else {
            TileKind::Decoration
        }
    }

    /// Whether an entity may stand on this kind of tile.
    pub fn is_passable(self) -> bool {
        !matches!(self, TileKind::Obstacle)
    }
}

/// Short description of a symbol for the "you see" line.
///
/// Covers terrain as well as the player and foe glyphs.
pub fn tile_description(symbol: char) -> Option<&'static str> {
    let description = match symbol {
        '@' => "That's me!",
        '.' => "Ground",
        '#' => "Stone wall",
        '=' => "Wooden door",
        '~' => "Writing",
        'ȹ' | '⚶' => "Tree",
        '^' => "Ascend",
        '⚘' => "Flower",
        ':' => "Rock paving",
        'W' => "Wurm",
        'i' => "Imp",
        'T' => "Troll",
        'C' => "Centipede",
        'h' => "Hobgoblin",
        _ => return None,
    };
    Some(description)
}
