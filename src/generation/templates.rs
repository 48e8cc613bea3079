//! # Room Templates
//!
//! The hand-drawn layouts every floor is built from.

use super::{GenerationConfig, Generator};
use crate::config;
use crate::{Level, LocalizationId, Position, RrogueError, RrogueResult, TileKind};
use rand::rngs::StdRng;

/// Floor index of the outdoor approach.
pub const APPROACH_FLOOR: i32 = -1;

/// Floor index of the entry room.
pub const ENTRY_FLOOR: i32 = 0;

/// Stairway positions of the generic room, indexed by `floor % 4`.
pub const STAIR_POSITIONS: [(i32, i32); 4] = [(4, 0), (9, 4), (5, 9), (0, 5)];

/// A fixed room layout with its spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomTemplate {
    pub name: &'static str,
    pub rows: [&'static str; config::LEVEL_HEIGHT],
    spawn: (i32, i32),
}

impl RoomTemplate {
    /// Where the player appears.
    pub fn spawn(&self) -> Position {
        Position::new(self.spawn.0, self.spawn.1)
    }
}

/// Overgrown path leading up to the entrance.
pub const APPROACH: RoomTemplate = RoomTemplate {
    name: "approach",
    rows: [
        "ȹ⚶ȹ##^##ȹ⚶",
        "ȹ..#~:#.⚘ȹ",
        "⚶.⚘..:...⚶",
        "ȹ....:..⚘ȹ",
        "ȹ.⚘..:...ȹ",
        "⚶....:...⚶",
        "ȹ..⚘.:.⚘.ȹ",
        "ȹ....:...ȹ",
        "⚶.⚘..:..⚘⚶",
        "ȹȹ⚶ȹ.:ȹ⚶ȹȹ",
    ],
    spawn: (5, 8),
};

/// The hall behind the sealed door.
pub const ENTRY: RoomTemplate = RoomTemplate {
    name: "entry",
    rows: [
        "##########",
        "#........#",
        "#.##..##.#",
        "#.#....#.#",
        "#...~~...#",
        "#.#....#.#",
        "#.##..##.#",
        "#........#",
        "#........#",
        "####=#####",
    ],
    spawn: (4, 8),
};

/// The room every floor above the entry uses.
pub const GENERIC: RoomTemplate = RoomTemplate {
    name: "generic",
    rows: [
        "##########",
        "#........#",
        "#........#",
        "#..#..#..#",
        "#........#",
        "#........#",
        "#..#..#..#",
        "#........#",
        "#........#",
        "##########",
    ],
    spawn: (4, 4),
};

/// What a particular floor looks like: a template, where its stairway is
/// cut into the wall and what the player is told on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorPlan {
    pub floor: i32,
    pub template: RoomTemplate,
    /// Stairway added on top of the template
    pub stairs: Option<Position>,
    /// Message shown when the floor is entered
    pub narrative: Option<LocalizationId>,
}

impl FloorPlan {
    /// Chooses the plan for a floor index.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::{FloorPlan, Position};
    ///
    /// let plan = FloorPlan::for_floor(5).unwrap();
    /// assert_eq!(plan.stairs, Some(Position::new(9, 4)));
    /// assert!(FloorPlan::for_floor(0).unwrap().stairs.is_none());
    /// assert!(FloorPlan::for_floor(-2).is_err());
    /// ```
    pub fn for_floor(floor: i32) -> RrogueResult<Self> {
        match floor {
            APPROACH_FLOOR => Ok(Self {
                floor,
                template: APPROACH,
                stairs: None,
                narrative: None,
            }),
            ENTRY_FLOOR => Ok(Self {
                floor,
                template: ENTRY,
                stairs: None,
                narrative: Some(LocalizationId::EntryRoomNarrative),
            }),
            floor if floor > ENTRY_FLOOR => {
                let (x, y) = STAIR_POSITIONS[floor.rem_euclid(4) as usize];
                Ok(Self {
                    floor,
                    template: GENERIC,
                    stairs: Some(Position::new(x, y)),
                    narrative: None,
                })
            }
            _ => Err(RrogueError::GenerationFailed(format!(
                "No layout below floor {}, got {}",
                APPROACH_FLOOR, floor
            ))),
        }
    }

    pub fn spawn(&self) -> Position {
        self.template.spawn()
    }

    /// Writes the plan's base layer into `level`, dropping all occupants.
    pub fn install(&self, level: &mut Level) -> RrogueResult<()> {
        level.install(self.floor, &self.template.rows)?;
        if let Some(stairs) = self.stairs {
            level.set_tile(stairs, crate::UPSTAIRS_SYMBOL)?;
        }
        Ok(())
    }

    /// How many stairways the finished floor has.
    fn expected_stairs(&self) -> usize {
        match self.floor {
            ENTRY_FLOOR => 0,
            _ => 1,
        }
    }
}

impl Generator<Level> for FloorPlan {
    fn generate(&self, config: &GenerationConfig, _rng: &mut StdRng) -> RrogueResult<Level> {
        let mut level = Level::new(self.floor, 0, 0);
        self.install(&mut level)?;
        self.validate(&level, config)?;
        Ok(level)
    }

    fn validate(&self, level: &Level, _config: &GenerationConfig) -> RrogueResult<()> {
        if level.width() != config::LEVEL_WIDTH || level.height() != config::LEVEL_HEIGHT {
            return Err(RrogueError::GenerationFailed(format!(
                "{} layout is {}x{}, expected {}x{}",
                self.template.name,
                level.width(),
                level.height(),
                config::LEVEL_WIDTH,
                config::LEVEL_HEIGHT
            )));
        }

        let spawn_kind = level.tile_kind_at(self.spawn());
        if !spawn_kind.map_or(false, TileKind::is_passable) {
            return Err(RrogueError::GenerationFailed(format!(
                "{} spawn {} is not walkable",
                self.template.name,
                self.spawn()
            )));
        }

        let stairs = level.positions_of(TileKind::UpStairs).len();
        if stairs != self.expected_stairs() {
            return Err(RrogueError::GenerationFailed(format!(
                "Floor {} has {} stairways, expected {}",
                self.floor,
                stairs,
                self.expected_stairs()
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "FloorPlan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils;

    fn build(floor: i32) -> Level {
        let config = GenerationConfig::for_testing(1);
        let mut rng = utils::create_rng(&config);
        FloorPlan::for_floor(floor)
            .unwrap()
            .generate(&config, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_templates_are_ten_by_ten() {
        for template in [APPROACH, ENTRY, GENERIC] {
            for row in template.rows {
                assert_eq!(row.chars().count(), config::LEVEL_WIDTH, "{}", template.name);
            }
        }
    }

    #[test]
    fn test_approach_has_stairs_to_entry() {
        let level = build(APPROACH_FLOOR);
        assert!(level.is_upstairs_at(Position::new(5, 0)));
        assert_eq!(level.floor, -1);
    }

    #[test]
    fn test_entry_has_no_stairs() {
        let level = build(ENTRY_FLOOR);
        assert!(level.positions_of(TileKind::UpStairs).is_empty());
        assert!(level.is_untravellable_at(Position::new(4, 9)));
        let plan = FloorPlan::for_floor(0).unwrap();
        assert_eq!(plan.narrative, Some(LocalizationId::EntryRoomNarrative));
    }

    #[test]
    fn test_generic_stairs_rotate() {
        for floor in 1..=8 {
            let level = build(floor);
            let (x, y) = STAIR_POSITIONS[(floor % 4) as usize];
            assert_eq!(level.positions_of(TileKind::UpStairs), vec![Position::new(x, y)]);
        }
    }

    #[test]
    fn test_below_approach_fails() {
        assert!(matches!(
            FloorPlan::for_floor(-2),
            Err(RrogueError::GenerationFailed(_))
        ));
    }

    #[test]
    fn test_spawns_are_walkable() {
        for floor in -1..=4 {
            let plan = FloorPlan::for_floor(floor).unwrap();
            let level = build(floor);
            assert!(!level.is_untravellable_at(plan.spawn()));
            assert!(!level.is_upstairs_at(plan.spawn()));
        }
    }

    #[test]
    fn test_validate_catches_missing_stairs() {
        let config = GenerationConfig::for_testing(1);
        let plan = FloorPlan::for_floor(3).unwrap();
        let level = Level::from_rows(3, &GENERIC.rows).unwrap();
        assert!(plan.validate(&level, &config).is_err());
    }
}
