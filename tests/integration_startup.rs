//! Integration test to ensure a character can be created and a game started.

use rand::{rngs::StdRng, SeedableRng};
use rrogue::{
    AncestryCatalog, AncestryType, Attribute, CharacterDraft, EnglishText, Entity, FoeTable,
    GameSession, GenerationConfig, Position, RrogueResult, TileKind,
};

#[test]
fn test_basic_startup() -> RrogueResult<()> {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut draft = CharacterDraft::new("TestPlayer");
    draft.set_ancestry(AncestryType::Gnome, &mut rng);
    for attribute in [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Dexterity,
        Attribute::Spirit,
        Attribute::Knowledge,
    ] {
        draft.increase(attribute)?;
    }
    let player = draft.finalize()?;
    assert_eq!(player.ancestry, AncestryType::Gnome);
    assert_eq!(player.attributes.as_array(), [1, 2, 0, 1, 1]);

    let mut session =
        GameSession::headless(player, GenerationConfig::new(12345), Box::new(FoeTable::new()))?;
    session.start()?;

    assert!(session.is_started());
    assert_eq!(session.floor(), -1);
    let spawn = session.player().position();
    assert_eq!(spawn, Position::new(5, 8));
    assert!(!session.level().is_monster_at(spawn));
    assert!(session
        .level()
        .tile_kind_at(spawn)
        .map_or(false, TileKind::is_passable));

    Ok(())
}

#[test]
fn test_randomized_character_can_play() -> RrogueResult<()> {
    let mut rng = StdRng::seed_from_u64(2024);
    let catalog = AncestryCatalog::new(&EnglishText);
    let mut draft = CharacterDraft::default();
    let mut outcome = draft.randomize_all(&mut rng)?;
    while !outcome.satisfied {
        outcome = draft.randomize_attributes(&mut rng)?;
    }

    let player = draft.finalize()?;
    assert!(!catalog.get(player.ancestry).name.is_empty());
    assert_eq!(player.attributes.total(), 5);
    assert_eq!(
        player.vitals().max_hit_points,
        25 + 5 * i32::from(player.attributes.constitution)
    );

    let mut session = GameSession::headless(
        player,
        GenerationConfig::for_testing(2024),
        Box::new(FoeTable::new()),
    )?;
    session.start()?;
    assert_eq!(session.level().monster_count(), 0);
    Ok(())
}

#[test]
fn test_same_seed_same_dungeon() -> RrogueResult<()> {
    let make = || -> RrogueResult<GameSession> {
        let draft = {
            let mut draft = CharacterDraft::new("Twin");
            for attribute in Attribute::ALL {
                draft.increase(attribute)?;
            }
            draft
        };
        let config = GenerationConfig {
            foe_spawn_chance: 0.3,
            starting_floor: 3,
            ..GenerationConfig::new(77)
        };
        let mut session = GameSession::headless(draft.finalize()?, config, Box::new(FoeTable::new()))?;
        session.start()?;
        Ok(session)
    };

    let first = make()?;
    let second = make()?;
    for y in 0..10 {
        for x in 0..10 {
            let pos = Position::new(x, y);
            assert_eq!(first.level().char_at(pos), second.level().char_at(pos));
        }
    }
    Ok(())
}
