//! Star Attack headless host
//!
//! Runs one autopilot session through the full orchestrator: menus, fixed-step
//! gameplay and the game-over screen, printing the text HUD as it goes and a
//! JSON summary at the end.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use star_attack::audio::{AudioManager, LogAudio};
use star_attack::consts::SIM_DT;
use star_attack::platform::{Clock, FrameTimer, InputSnapshot, ManualClock, SystemClock};
use star_attack::renderer::HudRenderer;
use star_attack::sim::autopilot;
use star_attack::{Game, GameConfig, Screen};

/// Host options, read from the environment
#[derive(Debug, Clone)]
struct RunOptions {
    /// RNG seed for the session
    seed: u64,
    /// Stop after this much simulated time even if lives remain
    max_secs: u64,
    /// Pace the loop against the wall clock instead of running flat out
    realtime: bool,
    /// Effect volume, 0.0 - 1.0
    volume: f32,
    /// Drop every sound trigger
    muted: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self {
            seed,
            max_secs: 300,
            realtime: false,
            volume: AudioManager::DEFAULT_VOLUME,
            muted: false,
        }
    }
}

impl RunOptions {
    /// Load options from environment or use defaults
    fn load_or_default() -> Self {
        let mut options = Self::default();

        if let Ok(seed) = std::env::var("STAR_ATTACK_SEED") {
            match seed.parse() {
                Ok(parsed) => options.seed = parsed,
                Err(_) => log::warn!("Invalid STAR_ATTACK_SEED '{}', using random seed", seed),
            }
        }

        if let Ok(secs) = std::env::var("STAR_ATTACK_SECONDS") {
            match secs.parse::<u64>() {
                Ok(parsed) if parsed > 0 => options.max_secs = parsed,
                _ => log::warn!("STAR_ATTACK_SECONDS must be a positive integer, using default"),
            }
        }

        if let Ok(realtime) = std::env::var("STAR_ATTACK_REALTIME") {
            options.realtime = is_truthy(&realtime);
        }

        if let Ok(volume) = std::env::var("STAR_ATTACK_VOLUME") {
            match volume.parse::<f32>() {
                Ok(parsed) if (0.0..=1.0).contains(&parsed) => options.volume = parsed,
                _ => log::warn!("STAR_ATTACK_VOLUME must be between 0.0 and 1.0, using default"),
            }
        }

        if let Ok(muted) = std::env::var("STAR_ATTACK_MUTE") {
            options.muted = is_truthy(&muted);
        }

        options
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Star Attack v{} starting...", env!("CARGO_PKG_VERSION"));

    let options = RunOptions::load_or_default();
    log::info!(
        "Seed {}, limit {}s, realtime {}, volume {:.2}{}",
        options.seed,
        options.max_secs,
        options.realtime,
        options.volume,
        if options.muted { " (muted)" } else { "" }
    );

    let mut game = Game::new(GameConfig::default(), options.seed)?
        .with_audio(LogAudio)
        .with_renderer(HudRenderer::new(std::io::stdout()));
    game.audio_mut().set_volume(options.volume);
    game.audio_mut().set_muted(options.muted);

    let game = if options.realtime {
        run(game, SystemClock::new(), &options)?
    } else {
        run(game, ManualClock::default(), &options)?
    };

    println!("{}", serde_json::to_string_pretty(&game.summary())?);
    Ok(())
}

/// Drive the game until lives run out or the time limit is reached
fn run(mut game: Game, mut clock: impl Clock, options: &RunOptions) -> anyhow::Result<Game> {
    let limit = Duration::from_secs(options.max_secs);
    let frame = Duration::from_secs_f32(SIM_DT);
    let mut timer = FrameTimer::new();

    // Title and instructions screens each wait for a key
    game.step(SIM_DT, &InputSnapshot::key_press())?;
    game.step(SIM_DT, &InputSnapshot::key_press())?;

    timer.advance(clock.now());
    while game.screen() == Screen::Running && game.session().elapsed < limit {
        clock.wait(frame);
        for _ in 0..timer.advance(clock.now()) {
            let input = autopilot(game.session(), game.config());
            game.step(SIM_DT, &input)?;
            if game.screen() != Screen::Running {
                break;
            }
        }
    }

    if game.is_terminal() {
        log::info!("Session ended by game over");
    } else {
        log::info!("Session stopped at the {}s limit", options.max_secs);
    }
    Ok(game)
}
