//! Rock Glider entry point
//!
//! Runs the simulation headless with a simple autopilot and logs what
//! happens; a windowed host drives `Game` the same way, one `frame` per
//! display refresh.
//!
//! Usage: `rock-glider [--tuning FILE] [--settings FILE] [--ticks N] [--seed S]`

use std::path::PathBuf;

use rock_glider::audio::AudioManager;
use rock_glider::scene::LogPublisher;
use rock_glider::sim::{Session, SessionPhase, Viewport};
use rock_glider::{ConfigError, Game, Settings, Tuning};

struct Args {
    tuning: Option<PathBuf>,
    settings: Option<PathBuf>,
    ticks: u64,
    seed: u64,
}

impl Args {
    fn parse() -> Result<Self, ConfigError> {
        let mut args = Args {
            tuning: None,
            settings: None,
            ticks: 3_600,
            seed: 0x5EED,
        };

        let mut iter = std::env::args().skip(1);
        while let Some(flag) = iter.next() {
            let value = iter.next().ok_or_else(|| ConfigError::InvalidArgument {
                flag: flag.clone(),
                value: String::new(),
            })?;
            let invalid = || ConfigError::InvalidArgument {
                flag: flag.clone(),
                value: value.clone(),
            };
            match flag.as_str() {
                "--tuning" => args.tuning = Some(PathBuf::from(&value)),
                "--settings" => args.settings = Some(PathBuf::from(&value)),
                "--ticks" => args.ticks = value.parse().map_err(|_| invalid())?,
                "--seed" => args.seed = value.parse().map_err(|_| invalid())?,
                _ => return Err(invalid()),
            }
        }
        Ok(args)
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let args = Args::parse()?;

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let settings = args
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();

    log::info!("Rock Glider (native) starting, seed {}", args.seed);

    let session = Session::new(tuning, Viewport::default(), args.seed)?;
    let mut game = Game::new(
        session,
        Box::new(AudioManager::new(settings)),
        Box::new(LogPublisher::new()),
    );

    for _ in 0..args.ticks {
        if should_flap(game.session()) {
            game.activate();
        }
        game.frame();
        if game.session().phase == SessionPhase::Ended {
            break;
        }
    }

    let session = game.session();
    println!(
        "{} after {} ticks, score {}",
        match session.phase {
            SessionPhase::Running => "Still flying",
            SessionPhase::Ended => "Crashed",
        },
        session.time_ticks,
        session.score
    );
    Ok(())
}

/// Flap when falling below the centre of the next gap
fn should_flap(session: &Session) -> bool {
    let player = &session.player;
    let pipe_width = session.tuning().pipe_width;
    let left = player.bounds().left();

    let target = session
        .pool
        .iter()
        .find(|pair| pair.trailing_edge(pipe_width) >= left)
        .map(|pair| (pair.gap_start + pair.gap_end) / 2.0 + 20.0)
        .unwrap_or(session.layout().ground_line / 2.0);

    player.vel >= 0.0 && player.pos.y > target
}
