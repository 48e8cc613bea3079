//! # Rrogue Main Entry Point
//!
//! Creates a character from the command line, then plays in the terminal:
//! the floor is printed after every command and movement is typed as
//! `w`/`a`/`s`/`d` (or `h`/`j`/`k`/`l`) followed by Enter.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rrogue::{
    AncestryType, AsciiView, Attribute, CharacterDraft, Entity, FoeTable, GameEvent,
    GameSession, GenerationConfig, InputHandler, Player, PlayerInput, RrogueError, RrogueResult,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[cfg(feature = "dev-tools")]
use tracing::{error, info, Level};

#[cfg(not(feature = "dev-tools"))]
use log::{error, info};

/// Attempts at rolling attributes before giving up on an ancestry.
const MAX_RANDOMIZE_ATTEMPTS: usize = 20;

/// Command line arguments for Rrogue.
#[derive(Parser, Debug)]
#[command(name = "rrogue")]
#[command(about = "A small ASCII roguelike played in the terminal")]
#[command(version)]
struct Args {
    /// Random seed for character rolls and level generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Character name
    #[arg(short, long)]
    name: Option<String>,

    /// Ancestry: human, catfolk, dwarf, gnome, house-elf or random
    #[arg(short, long)]
    ancestry: Option<AncestryType>,

    /// Attribute points as str,dex,con,spi,kno; rolled when omitted
    #[arg(long, value_delimiter = ',')]
    attributes: Option<Vec<u8>>,

    /// Roll name, ancestry and attributes
    #[arg(long)]
    randomize: bool,

    /// Floor to start on (-1 is the approach, 0 the entry room)
    #[arg(long)]
    floor: Option<i32>,

    /// Generation config as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> RrogueResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Rrogue v{}", rrogue::VERSION);

    let config = load_config(&args)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let player = create_character(&args, &mut rng)?;

    println!(
        "{} the {:?} (Str {} Dex {} Con {} Spi {} Kno {}, {} HP)",
        player.name,
        player.ancestry,
        player.attributes.strength,
        player.attributes.dexterity,
        player.attributes.constitution,
        player.attributes.spirit,
        player.attributes.knowledge,
        player.vitals().max_hit_points
    );

    let session = GameSession::new(player, config, Box::new(FoeTable::new()), AsciiView::new())?;
    let result = run_game(session);
    if let Err(e) = &result {
        error!("Game ended with an error: {}", e);
    }
    result
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .init();
    }
}

/// Reads the config file if given and applies command line overrides.
fn load_config(args: &Args) -> RrogueResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_json_file(path)?,
        None => GenerationConfig::new(rand::random()),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(floor) = args.floor {
        config.starting_floor = floor;
    }
    config.validate()?;
    info!("Using seed {}", config.seed);
    Ok(config)
}

/// Runs character creation non-interactively from the arguments.
fn create_character(args: &Args, rng: &mut StdRng) -> RrogueResult<Player> {
    let mut draft = CharacterDraft::new(args.name.clone().unwrap_or_default());

    if args.randomize {
        draft.randomize_all(rng)?;
        if let Some(name) = &args.name {
            draft.name = name.clone();
        }
    } else if draft.name.trim().is_empty() {
        draft.name = "Adventurer".to_string();
    }

    if let Some(ancestry) = args.ancestry {
        let resolved = draft.set_ancestry(ancestry, rng);
        if ancestry.is_random() {
            println!("The dice chose {:?}.", resolved);
        }
    }

    match &args.attributes {
        Some(points) => {
            if points.len() != Attribute::ALL.len() {
                return Err(RrogueError::InvalidLength {
                    expected: Attribute::ALL.len(),
                    actual: points.len(),
                });
            }
            draft.reset_attributes();
            for (&attribute, &amount) in Attribute::ALL.iter().zip(points) {
                for _ in 0..amount {
                    draft.increase(attribute)?;
                }
            }
        }
        None => {
            let mut attempts = 0;
            while !draft.is_complete() && attempts < MAX_RANDOMIZE_ATTEMPTS {
                let outcome = draft.randomize_attributes(rng)?;
                info!(
                    "Attribute roll {} took {} iterations",
                    attempts + 1,
                    outcome.iterations
                );
                attempts += 1;
            }
        }
    }

    draft.finalize()
}

/// Reads commands from stdin until the player quits or input ends.
fn run_game(mut session: GameSession<AsciiView>) -> RrogueResult<()> {
    let input = InputHandler::new();
    let stdin = io::stdin();

    session.start()?;
    println!("{}", input.help_text());
    for line in session.messages() {
        println!("{}", line);
    }
    draw(&session)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match input.parse(&line) {
            Some(PlayerInput::Quit) => break,
            Some(PlayerInput::Help) => println!("{}", input.help_text()),
            Some(PlayerInput::Look(pos)) => {
                let description = session.look(pos).unwrap_or("Nothing");
                println!("You see: {}", description);
            }
            Some(PlayerInput::Move(direction)) => {
                let events = session.move_player(direction)?;
                report(&events);
                draw(&session)?;
            }
            None => println!("Unknown command. Type ? for help."),
        }
    }

    let stats = session.statistics();
    println!(
        "Steps {}, bumps {}, foes defeated {}, damage dealt {}, floors climbed {}",
        stats.steps_taken,
        stats.bumps,
        stats.foes_defeated,
        stats.damage_dealt,
        stats.floors_ascended
    );
    info!("Game loop ended");
    Ok(())
}

fn report(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Message { text, .. } => println!("{}", text),
            GameEvent::EntityDamaged { damage, .. } => println!("You hit for {}.", damage),
            GameEvent::EntityDied { .. } => println!("The foe falls."),
            GameEvent::FloorChanged { to, .. } => println!("You climb to floor {}.", to),
            _ => {}
        }
    }
}

fn draw(session: &GameSession<AsciiView>) -> RrogueResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "-- Floor {} --", session.floor())?;
    for row in session.renderer().render() {
        writeln!(stdout, "{}", row)?;
    }
    let player = session.player();
    write!(
        stdout,
        "HP {}/{}  MP {}/{}> ",
        player.vitals().current_hit_points,
        player.vitals().max_hit_points,
        player.current_mana,
        player.max_mana
    )?;
    stdout.flush()?;
    Ok(())
}
