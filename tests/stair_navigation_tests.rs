//! Integration tests for climbing from the approach through the generic floors.

use rrogue::{
    AncestryType, Attributes, Direction, Entity, FoeTable, GameEvent, GameSession,
    GenerationConfig, Player, Position, TileKind, STAIR_POSITIONS,
};

fn session_on(floor: i32) -> GameSession {
    let player = Player::new(
        "TestHero",
        AncestryType::Dwarf,
        Attributes::from_slice(&[1, 0, 2, 1, 1]).unwrap(),
    );
    let config = GenerationConfig {
        starting_floor: floor,
        ..GenerationConfig::for_testing(98765)
    };
    let mut session = GameSession::headless(player, config, Box::new(FoeTable::new()))
        .expect("Failed to create session");
    session.start().expect("Failed to start session");
    session
}

fn walk(session: &mut GameSession, direction: Direction, steps: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..steps {
        events.extend(session.move_player(direction).expect("Move failed"));
    }
    events
}

/// Walks from the generic spawn to the stairway of the current floor and
/// steps onto it.
fn climb_generic(session: &mut GameSession) -> Vec<GameEvent> {
    let stairs = session.level().positions_of(TileKind::UpStairs);
    assert_eq!(stairs.len(), 1, "Generic floor should have one stairway");
    let target = stairs[0];
    let start = session.player().position();
    assert_eq!(start, Position::new(4, 4));

    // Every route stays clear of the pillars at columns and rows 3 and 6.
    match (target.x, target.y) {
        (4, 0) => walk(session, Direction::Up, 4),
        (9, 4) => walk(session, Direction::Right, 5),
        (5, 9) => {
            walk(session, Direction::Right, 1);
            walk(session, Direction::Down, 5)
        }
        (0, 5) => {
            walk(session, Direction::Down, 1);
            walk(session, Direction::Left, 4)
        }
        other => panic!("Unexpected stairway at {:?}", other),
    }
}

#[test]
fn test_approach_leads_to_entry() {
    let mut session = session_on(-1);
    let events = walk(&mut session, Direction::Up, 8);

    assert_eq!(session.floor(), 0);
    assert_eq!(session.player().position(), Position::new(4, 8));
    assert!(events
        .iter()
        .any(|event| matches!(event, GameEvent::FloorChanged { from: -1, to: 0 })));
    assert!(session.level().positions_of(TileKind::UpStairs).is_empty());
}

#[test]
fn test_entry_room_door_is_shut() {
    let mut session = session_on(0);
    let events = walk(&mut session, Direction::Down, 1);
    assert_eq!(session.player().position(), Position::new(4, 8));
    assert!(events
        .iter()
        .any(|event| matches!(event, GameEvent::EntityBlocked { .. })));
}

#[test]
fn test_climb_four_generic_floors() {
    let mut session = session_on(1);
    for floor in 1..=4 {
        assert_eq!(session.floor(), floor);
        let (x, y) = STAIR_POSITIONS[(floor % 4) as usize];
        assert!(session.level().is_upstairs_at(Position::new(x, y)));

        let events = climb_generic(&mut session);
        assert!(events
            .iter()
            .any(|event| matches!(event, GameEvent::FloorChanged { to, .. } if *to == floor + 1)));
    }
    assert_eq!(session.floor(), 5);
    assert_eq!(session.statistics().floors_ascended, 4);
    assert!(session.player().previous_position().is_none());
}
