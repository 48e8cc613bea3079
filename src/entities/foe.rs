//! # Foes
//!
//! The foe table and the factory that rolls new foes for level generation.

use super::{Entity, EntityCore};
use crate::config;
use crate::Position;
use log::{debug, error};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Symbols the default foe table draws from: Wurm, imp, Troll, Centipede,
/// hobgoblin.
pub const FOE_ALPHABET: [char; 5] = ['W', 'i', 'T', 'C', 'h'];

/// Known kinds of foe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoeKind {
    Wurm,
    Imp,
    Troll,
    Centipede,
    Hobgoblin,
}

impl FoeKind {
    /// Looks up the kind drawn with a symbol.
    pub fn from_symbol(symbol: char) -> Option<FoeKind> {
        match symbol {
            'W' => Some(FoeKind::Wurm),
            'i' => Some(FoeKind::Imp),
            'T' => Some(FoeKind::Troll),
            'C' => Some(FoeKind::Centipede),
            'h' => Some(FoeKind::Hobgoblin),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            FoeKind::Wurm => 'W',
            FoeKind::Imp => 'i',
            FoeKind::Troll => 'T',
            FoeKind::Centipede => 'C',
            FoeKind::Hobgoblin => 'h',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FoeKind::Wurm => "Wurm",
            FoeKind::Imp => "imp",
            FoeKind::Troll => "Troll",
            FoeKind::Centipede => "Centipede",
            FoeKind::Hobgoblin => "hobgoblin",
        }
    }

    /// Inclusive range a new foe's hit points are rolled from.
    pub fn hit_point_range(self) -> RangeInclusive<i32> {
        match self {
            FoeKind::Wurm => 15..=25,
            FoeKind::Imp => 6..=12,
            FoeKind::Troll => 15..=25,
            FoeKind::Centipede => 15..=20,
            FoeKind::Hobgoblin => 8..=12,
        }
    }
}

/// A hostile creature on a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Foe {
    core: EntityCore,
    /// `None` when the foe was rolled from a symbol the table does not know
    pub kind: Option<FoeKind>,
}

impl Foe {
    /// Creates a foe of a known kind.
    pub fn new(kind: FoeKind, position: Position, hit_points: i32) -> Self {
        Self {
            core: EntityCore::new(kind.symbol(), position, hit_points),
            kind: Some(kind),
        }
    }

    /// Creates a foe for a symbol with no entry in the foe table.
    pub fn unknown(symbol: char, position: Position) -> Self {
        Self {
            core: EntityCore::new(symbol, position, config::BASE_HIT_POINTS),
            kind: None,
        }
    }

    /// Display name of the foe.
    pub fn name(&self) -> &'static str {
        self.kind.map(FoeKind::name).unwrap_or("something")
    }
}

impl Entity for Foe {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

/// Source of freshly rolled foes.
///
/// New foes stand at the origin; the caller places them.
pub trait FoeFactory {
    fn generate_foe(&self, rng: &mut StdRng) -> Foe;
}

/// The standard foe table.
#[derive(Debug, Clone)]
pub struct FoeTable {
    alphabet: Vec<char>,
}

impl FoeTable {
    /// Creates the table over [`FOE_ALPHABET`].
    pub fn new() -> Self {
        Self {
            alphabet: FOE_ALPHABET.to_vec(),
        }
    }

    /// Creates a table drawing from a custom alphabet.
    ///
    /// Symbols without a [`FoeKind`] still produce a foe, with default hit
    /// points, and are reported as an error in the log.
    pub fn with_alphabet(alphabet: Vec<char>) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl Default for FoeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FoeFactory for FoeTable {
    fn generate_foe(&self, rng: &mut StdRng) -> Foe {
        if self.alphabet.is_empty() {
            error!("Foe table has an empty alphabet");
            return Foe::unknown('?', Position::origin());
        }

        let symbol = self.alphabet[rng.gen_range(0..self.alphabet.len())];
        match FoeKind::from_symbol(symbol) {
            Some(kind) => {
                let hit_points = rng.gen_range(kind.hit_point_range());
                debug!("Randomized a {} foe with {} hit points", kind.name(), hit_points);
                Foe::new(kind, Position::origin(), hit_points)
            }
            None => {
                error!("Randomized a missing foe: '{}'", symbol);
                Foe::unknown(symbol, Position::origin())
            }
        }
    }
}
