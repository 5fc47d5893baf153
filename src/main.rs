//! Snake: Reawakening
//!
//! A single-screen Snake game that reveals a story one line per food eaten.

use macroquad::texture::Image;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod assets;
mod clock;
mod config;
mod dialogue;
mod error;
mod game;
mod input;
mod render;
mod state;

use assets::{select, DirectorySource, EmbeddedResources, Story};
use clock::SystemClock;
use config::{Settings, DEFAULT_LOG_FILTER};
use error::ResourceError;
use game::game_loop::run_game;
use game::{GameState, Grid};
use render::window::{decode_background, window_conf, WindowFrontend};
use state::AppContext;

/// Pick the story and decode the background before any window is shown
fn load_resources(settings: &Settings, rng: &mut StdRng) -> Result<(Story, Image), ResourceError> {
    let selection = match &settings.resource_dir {
        Some(dir) => {
            info!("Loading resources from {}", dir.display());
            select(&DirectorySource::new(dir), rng)?
        }
        None => select(&EmbeddedResources, rng)?,
    };

    let background = decode_background(&selection.background_path, &selection.background)?;
    Ok((selection.story, background))
}

async fn play(settings: Settings, story: Story, background: Image, mut rng: StdRng) {
    let frontend = WindowFrontend::new(Some(&background));
    let mut ctx = AppContext::with_settings(frontend, SystemClock::new(), &settings);
    let mut game = GameState::new(Grid::window(), &mut rng);

    info!("Game successfully initialised");
    let outcome = run_game(&mut ctx, &mut game, &story, &mut rng).await;

    info!(?outcome, "Exiting");
    std::process::exit(0);
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let settings = Settings::from_env();
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (story, background) = match load_resources(&settings, &mut rng) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    macroquad::Window::from_config(window_conf(), play(settings, story, background, rng));
}
