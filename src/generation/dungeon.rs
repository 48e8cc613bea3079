//! # Dungeon Generation
//!
//! Turns a floor index into a populated level: install the floor's room,
//! put the player on its spawn point and scatter foes around them.

use crate::{
    FloorPlan, FoeFactory, FoeScatter, GenerationConfig, Generator, Level, LocalizationId, Player,
    Position, RrogueResult,
};
use log::info;
use rand::rngs::StdRng;

/// What a generation pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub floor: i32,
    /// Where the player was placed
    pub spawn: Position,
    pub foes_placed: usize,
    /// Message to show on arrival, if the floor has one
    pub narrative: Option<LocalizationId>,
}

/// Generates floors in place.
///
/// The level is rebuilt on every call; foes and items of the previous floor
/// never survive a regeneration.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    config: GenerationConfig,
}

impl LevelGenerator {
    /// Creates a generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use rrogue::*;
    ///
    /// let generator = LevelGenerator::new(GenerationConfig::for_testing(1));
    /// let mut level = Level::new(0, 10, 10);
    /// let mut player = Player::new("Hero", AncestryType::Human, Attributes::new());
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let report = generator
    ///     .regenerate(&mut level, 2, &mut player, &FoeTable::new(), &mut rng)
    ///     .unwrap();
    /// assert_eq!(player.position(), report.spawn);
    /// assert!(level.is_upstairs_at(Position::new(5, 9)));
    /// ```
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Rebuilds `level` as `floor` and moves the player to its spawn point.
    pub fn regenerate(
        &self,
        level: &mut Level,
        floor: i32,
        player: &mut Player,
        factory: &dyn FoeFactory,
        rng: &mut StdRng,
    ) -> RrogueResult<GenerationReport> {
        let plan = FloorPlan::for_floor(floor)?;
        plan.install(level)?;
        plan.validate(level, &self.config)?;

        let spawn = plan.spawn();
        player.teleport(spawn);

        let foes_placed = FoeScatter::new(self.config.foe_spawn_chance)
            .scatter(level, spawn, factory, rng)?;

        info!(
            "Generated floor {} from the {} layout with {} foes",
            floor, plan.template.name, foes_placed
        );

        Ok(GenerationReport {
            floor,
            spawn,
            foes_placed,
            narrative: plan.narrative,
        })
    }
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AncestryType, Attributes, Entity, FoeTable, Item, RrogueError, TileKind, STAIR_POSITIONS,
    };
    use rand::SeedableRng;

    fn player() -> Player {
        Player::new("Hero", AncestryType::Human, Attributes::from_slice(&[1, 1, 1, 1, 1]).unwrap())
    }

    fn crowded() -> LevelGenerator {
        LevelGenerator::new(GenerationConfig {
            foe_spawn_chance: 0.5,
            ..GenerationConfig::new(9)
        })
    }

    #[test]
    fn test_player_moved_to_spawn() {
        let generator = LevelGenerator::new(GenerationConfig::for_testing(1));
        let mut level = Level::new(0, 10, 10);
        let mut hero = player();
        let mut rng = StdRng::seed_from_u64(1);
        for floor in -1..=3 {
            let report = generator
                .regenerate(&mut level, floor, &mut hero, &FoeTable::new(), &mut rng)
                .unwrap();
            assert_eq!(hero.position(), report.spawn);
            assert_eq!(level.floor, floor);
        }
    }

    #[test]
    fn test_entry_reports_narrative() {
        let generator = LevelGenerator::default();
        let mut level = Level::new(0, 10, 10);
        let mut rng = StdRng::seed_from_u64(2);
        let report = generator
            .regenerate(&mut level, 0, &mut player(), &FoeTable::new(), &mut rng)
            .unwrap();
        assert_eq!(report.narrative, Some(LocalizationId::EntryRoomNarrative));
    }

    #[test]
    fn test_foes_avoid_spawn_and_sit_on_ground() {
        let generator = crowded();
        let mut level = Level::new(0, 10, 10);
        let mut hero = player();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = generator
                .regenerate(&mut level, 1, &mut hero, &FoeTable::new(), &mut rng)
                .unwrap();
            assert!(report.foes_placed > 0);
            assert_eq!(level.monster_count(), report.foes_placed);
            assert!(!level.is_monster_at(report.spawn));
            for foe in level.monsters() {
                assert_eq!(TileKind::classify(level.tile_at(foe.position()).unwrap()), TileKind::Floor);
            }
        }
    }

    #[test]
    fn test_regenerate_drops_previous_occupants() {
        let generator = crowded();
        let mut level = Level::new(0, 10, 10);
        let mut hero = player();
        let mut rng = StdRng::seed_from_u64(5);
        generator
            .regenerate(&mut level, 1, &mut hero, &FoeTable::new(), &mut rng)
            .unwrap();
        let old_ids: Vec<_> = level.monsters().map(|foe| foe.id()).collect();
        level.place_item(Position::new(8, 8), Item::new('!', "potion")).ok();

        let quiet = LevelGenerator::new(GenerationConfig::for_testing(5));
        quiet
            .regenerate(&mut level, 2, &mut hero, &FoeTable::new(), &mut rng)
            .unwrap();
        assert!(!old_ids.is_empty());
        assert_eq!(level.monster_count(), 0);
        assert_eq!(level.item_count(), 0);
        let (x, y) = STAIR_POSITIONS[2];
        assert!(level.is_upstairs_at(Position::new(x, y)));
    }

    #[test]
    fn test_rejects_floor_below_approach() {
        let generator = LevelGenerator::default();
        let mut level = Level::new(0, 10, 10);
        let mut rng = StdRng::seed_from_u64(6);
        let result = generator.regenerate(&mut level, -3, &mut player(), &FoeTable::new(), &mut rng);
        assert!(matches!(result, Err(RrogueError::GenerationFailed(_))));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let generator = crowded();
        let mut first = Level::new(0, 10, 10);
        let mut second = Level::new(0, 10, 10);
        generator
            .regenerate(&mut first, 4, &mut player(), &FoeTable::new(), &mut StdRng::seed_from_u64(8))
            .unwrap();
        generator
            .regenerate(&mut second, 4, &mut player(), &FoeTable::new(), &mut StdRng::seed_from_u64(8))
            .unwrap();
        for y in 0..10 {
            for x in 0..10 {
                let pos = Position::new(x, y);
                assert_eq!(first.char_at(pos), second.char_at(pos));
            }
        }
    }
}
