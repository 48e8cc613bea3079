//! # Rrogue
//!
//! The rules core of a small ASCII roguelike.
//!
//! ## Architecture Overview
//!
//! Rrogue keeps game rules apart from presentation. The rendering engine,
//! localization loading and UI layout are collaborators reached through
//! narrow traits, so everything here runs headless and deterministically
//! under a seeded random number generator.
//!
//! - **Character**: attributes, ancestries and their point requirements,
//!   the attribute randomizer and the character-creation form model
//! - **Entities**: the player and foes, hit points and damage
//! - **World**: tile classification and the level grid with sparse
//!   monster and item overlays
//! - **Generation**: hardcoded room templates and foe scatter
//! - **Game**: the play session tying movement, melee and floor changes
//!   together

pub mod character;
pub mod entities;
pub mod game;
pub mod generation;
pub mod input;
pub mod localization;
pub mod rendering;
pub mod world;

pub use character::*;
pub use entities::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use localization::*;
pub use rendering::*;
pub use world::*;

/// Core error type for the Rrogue engine.
#[derive(thiserror::Error, Debug)]
pub enum RrogueError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A fixed-length input had the wrong number of elements
    #[error("Invalid input length: expected {expected} values, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The Random sentinel was used where a concrete ancestry is required
    #[error("Random ancestry must be resolved to a concrete ancestry first")]
    UnresolvedAncestry,

    /// The character does not satisfy its ancestry requirement
    #[error("Character is incomplete: {0}")]
    IncompleteCharacter(String),

    /// A level coordinate already holds a monster or an item
    #[error("Tile {0:?} is already occupied")]
    Occupied(world::Position),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Action cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Rrogue codebase.
pub type RrogueResult<T> = Result<T, RrogueError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Level width in tiles
    pub const LEVEL_WIDTH: usize = 10;

    /// Level height in tiles
    pub const LEVEL_HEIGHT: usize = 10;

    /// Attribute points a new character distributes
    pub const ATTRIBUTE_POINT_BUDGET: u8 = 5;

    /// Highest value the creation form allows for a single attribute
    pub const MAX_ATTRIBUTE_VALUE: u8 = 3;

    /// Iteration ceiling of the attribute randomizer
    pub const RANDOMIZER_MAX_ITERATIONS: u32 = 300;

    /// First randomizer iteration that checks the ancestry requirement
    pub const RANDOMIZER_FIRST_CHECK: u32 = 50;

    /// Randomizer requirement checks happen every this many iterations
    pub const RANDOMIZER_CHECK_INTERVAL: u32 = 5;

    /// Chance that a floor tile receives a foe during generation
    pub const FOE_SPAWN_CHANCE: f64 = 0.05;

    /// Damage dealt by a player's bump attack
    pub const PLAYER_MELEE_DAMAGE: i32 = 5;

    /// Hit points of an entity before any adjustment
    pub const BASE_HIT_POINTS: i32 = 25;

    /// Extra player hit points per point of constitution
    pub const HIT_POINTS_PER_CONSTITUTION: i32 = 5;

    /// Player mana at character creation
    pub const BASE_MANA: i32 = 5;
}
