//! # Game Session
//!
//! One playthrough: the player, the current floor and everything needed to
//! build the next one. Player movement is resolved here in a fixed order:
//! leaving the grid, stairways, obstacles, monsters and finally open ground.

use crate::config;
use crate::{
    tile_description, DamageOutcome, Direction, EnglishText, Entity, FoeFactory, GameEvent,
    GameStatistics, GenerationConfig, Level, LevelGenerator, LocalizationId, MessageImportance,
    NullRenderer, Player, Position, RrogueError, RrogueResult, TextSource, TileRenderer,
};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Maximum number of messages kept in the log.
pub const MAX_MESSAGES: usize = 100;

/// A running game.
pub struct GameSession<R: TileRenderer = NullRenderer> {
    player: Player,
    level: Level,
    generator: LevelGenerator,
    factory: Box<dyn FoeFactory>,
    text: Box<dyn TextSource>,
    renderer: R,
    rng: StdRng,
    statistics: GameStatistics,
    messages: Vec<String>,
    started: bool,
}

impl GameSession<NullRenderer> {
    /// Creates a session that draws nothing.
    pub fn headless(
        player: Player,
        config: GenerationConfig,
        factory: Box<dyn FoeFactory>,
    ) -> RrogueResult<Self> {
        Self::new(player, config, factory, NullRenderer)
    }
}

impl<R: TileRenderer> GameSession<R> {
    /// Creates a session. Nothing is generated until [`GameSession::start`].
    ///
    /// All randomness of the session comes from one generator seeded with
    /// `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::*;
    ///
    /// let attributes = Attributes::from_slice(&[1, 1, 1, 1, 1]).unwrap();
    /// let player = Player::new("Hero", AncestryType::Human, attributes);
    /// let mut session = GameSession::headless(
    ///     player,
    ///     GenerationConfig::for_testing(7),
    ///     Box::new(FoeTable::new()),
    /// )
    /// .unwrap();
    /// session.start().unwrap();
    /// assert_eq!(session.floor(), -1);
    /// assert_eq!(session.player().position(), Position::new(5, 8));
    /// ```
    pub fn new(
        player: Player,
        config: GenerationConfig,
        factory: Box<dyn FoeFactory>,
        renderer: R,
    ) -> RrogueResult<Self> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            player,
            level: Level::new(config.starting_floor, config::LEVEL_WIDTH, config::LEVEL_HEIGHT),
            generator: LevelGenerator::new(config),
            factory,
            text: Box::new(EnglishText),
            renderer,
            rng,
            statistics: GameStatistics::new(),
            messages: Vec::new(),
            started: false,
        })
    }

    /// Replaces the source of message texts.
    pub fn with_text_source(mut self, text: Box<dyn TextSource>) -> Self {
        self.text = text;
        self
    }

    /// Generates the starting floor and places the player on it.
    pub fn start(&mut self) -> RrogueResult<Vec<GameEvent>> {
        if self.started {
            return Err(RrogueError::InvalidState(
                "The game has already started".to_string(),
            ));
        }
        let floor = self.generator.config().starting_floor;
        info!("Starting game for {} on floor {}", self.player.name, floor);
        let events = self.enter_floor(floor)?;
        self.started = true;
        Ok(self.record(events))
    }

    /// Tries to move the player one tile.
    ///
    /// The target is resolved in priority order: off the grid is refused,
    /// a stairway is stepped on and climbed, an obstacle is bumped, a
    /// monster is attacked, anything else is walked onto.
    pub fn move_player(&mut self, direction: Direction) -> RrogueResult<Vec<GameEvent>> {
        if !self.started {
            return Err(RrogueError::InvalidState(
                "The game has not started".to_string(),
            ));
        }

        let target = self.player.position().step(direction);
        let mut events = Vec::new();

        if !self.level.in_bounds(target) {
            events.push(self.message(LocalizationId::CantLeaveArea, MessageImportance::Warning));
        } else if self.level.is_upstairs_at(target) {
            events.push(self.step_player(target));
            events.extend(self.ascend()?);
        } else if self.level.is_untravellable_at(target) {
            events.push(GameEvent::EntityBlocked {
                entity_id: self.player.id(),
                at: target,
            });
            events.push(self.message(LocalizationId::Bump, MessageImportance::Warning));
        } else if self.level.is_monster_at(target) {
            events.extend(self.attack(target)?);
        } else {
            events.push(self.step_player(target));
        }

        Ok(self.record(events))
    }

    /// Description of what is shown at a position, for the "you see" line.
    pub fn look(&self, pos: Position) -> Option<&'static str> {
        if pos == self.player.position() {
            return tile_description(self.player.symbol());
        }
        self.level.char_at(pos).and_then(tile_description)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Current floor index.
    pub fn floor(&self) -> i32 {
        self.level.floor
    }

    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// The message log, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The last `count` messages, oldest first.
    pub fn recent_messages(&self, count: usize) -> &[String] {
        let start = self.messages.len().saturating_sub(count);
        &self.messages[start..]
    }

    fn message(&self, id: LocalizationId, importance: MessageImportance) -> GameEvent {
        GameEvent::Message {
            text: self.text.text(id),
            importance,
        }
    }

    /// Moves the player and tells the renderer.
    fn step_player(&mut self, target: Position) -> GameEvent {
        let id = self.player.id();
        let from = self.player.position();
        self.renderer.entity_left_tile(id, from);
        self.player.set_position(target);
        self.renderer
            .entity_entered_tile(id, self.player.symbol(), target);
        GameEvent::EntityMoved {
            entity_id: id,
            from,
            to: target,
        }
    }

    fn attack(&mut self, target: Position) -> RrogueResult<Vec<GameEvent>> {
        let player_id = self.player.id();
        let damage = config::PLAYER_MELEE_DAMAGE;
        let foe = self.level.monster_at_mut(target).ok_or_else(|| {
            RrogueError::InvalidAction(format!("No monster to attack at {}", target))
        })?;

        let outcome = foe.take_damage(damage);
        let foe_id = foe.id();
        debug!(
            "{} hits the {} for {} ({} left)",
            self.player.name,
            foe.name(),
            damage,
            foe.vitals().current_hit_points
        );

        let mut events = vec![GameEvent::EntityDamaged {
            entity_id: foe_id,
            damage,
            source: Some(player_id),
        }];

        if outcome == DamageOutcome::Died {
            if let Some(foe) = self.level.remove_monster(target) {
                debug!("The {} at {} is defeated", foe.name(), target);
            }
            self.renderer.entity_removed(foe_id);
            events.push(GameEvent::EntityDied {
                entity_id: foe_id,
                killer: Some(player_id),
            });
        }
        Ok(events)
    }

    /// Goes one floor up.
    fn ascend(&mut self) -> RrogueResult<Vec<GameEvent>> {
        let from = self.level.floor;
        let to = from.checked_add(1).ok_or_else(|| {
            RrogueError::InvalidState(format!("no floor above {}", from))
        })?;
        info!("{} ascends from floor {} to {}", self.player.name, from, to);
        let mut events = vec![GameEvent::FloorChanged { from, to }];
        events.extend(self.enter_floor(to)?);
        Ok(events)
    }

    /// Rebuilds the level as `floor` and redraws it.
    fn enter_floor(&mut self, floor: i32) -> RrogueResult<Vec<GameEvent>> {
        self.renderer.clear_level();
        let report = self.generator.regenerate(
            &mut self.level,
            floor,
            &mut self.player,
            self.factory.as_ref(),
            &mut self.rng,
        )?;
        self.renderer.level_spawned(&self.level, &self.player);

        let mut events = Vec::new();
        if let Some(narrative) = report.narrative {
            events.push(self.message(narrative, MessageImportance::Narrative));
        }
        Ok(events)
    }

    /// Applies events to statistics and the message log.
    fn record(&mut self, events: Vec<GameEvent>) -> Vec<GameEvent> {
        let player_id = self.player.id();
        for event in &events {
            self.statistics.update_from_event(event, player_id);
            if let GameEvent::Message { text, .. } = event {
                self.messages.push(text.clone());
            }
        }
        if self.messages.len() > MAX_MESSAGES {
            let excess = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..excess);
        }
        events
    }
}
