//! Game configuration constants and environment overrides

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

/// Window width in pixels
pub const WINDOW_WIDTH: i32 = 720;

/// Window height in pixels
pub const WINDOW_HEIGHT: i32 = 480;

/// Window title
pub const WINDOW_TITLE: &str = "Snake: Reawakening";

/// Grid size (snake segment size) in pixels
pub const CELL_SIZE: i32 = 10;

/// Default game speed in ticks per second
pub const DEFAULT_TICKS_PER_SECOND: u32 = 15;

/// Initial snake body, head first, in cells
pub const INITIAL_SNAKE: [(i32, i32); 3] = [(10, 5), (9, 5), (8, 5)];

// =============================================================================
// Dialogue
// =============================================================================

/// Delay between two revealed characters
pub const TYPEWRITER_CADENCE: Duration = Duration::from_nanos(1_000_000_000 / 30);

/// Column width the dialogue text is wrapped to
pub const DIALOGUE_WRAP_COLUMNS: usize = 39;

/// Dialogue box region (x, y, width, height) in pixels
pub const DIALOGUE_BOX: (f32, f32, f32, f32) = (20.0, 250.0, 680.0, 210.0);

/// Dialogue box border thickness
pub const DIALOGUE_BORDER: f32 = 2.0;

/// Inset of the text inside the dialogue box
pub const DIALOGUE_PADDING: f32 = 10.0;

/// Font size of dialogue text
pub const DIALOGUE_FONT_SIZE: u16 = 30;

// =============================================================================
// Text
// =============================================================================

/// Font size of the score label
pub const SCORE_FONT_SIZE: u16 = 20;

/// Font size of the game over banner
pub const GAME_OVER_FONT_SIZE: u16 = 30;

/// Score label prefix
pub const SCORE_LABEL: &str = "Pontuação: ";

/// Game over banner
pub const GAME_OVER_TEXT: &str = "você perdeu! :(";

/// How long the final screen stays up before the process exits
pub const GAME_OVER_HOLD: Duration = Duration::from_secs(3);

// =============================================================================
// Resources
// =============================================================================

/// Story file, relative to the resource root
pub const STORIES_FILE: &str = "adventures.json";

/// Background index file, relative to the resource root
pub const BACKGROUND_INDEX_FILE: &str = "index.json";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "snake_reawakening=debug";

/// Named speed presets
pub const DIFFICULTY_PRESETS: &[(&str, u32)] = &[
    ("easy", 10),
    ("medium", 25),
    ("hard", 40),
    ("harder", 60),
    ("impossible", 120),
];

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Game ticks per second
    pub ticks_per_second: u32,
    /// Fixed seed for the random source
    pub seed: Option<u64>,
    /// Load resources from this directory instead of the embedded set
    pub resource_dir: Option<PathBuf>,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build settings from `(name, value)` pairs; unknown names are skipped
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Self::default();

        for (key, value) in vars {
            let value = value.as_ref().trim();
            match key.as_ref() {
                "SNAKE_DIFFICULTY" => match parse_difficulty(value) {
                    Some(tps) => settings.ticks_per_second = tps,
                    None => warn!("Ignoring invalid SNAKE_DIFFICULTY={:?}", value),
                },
                "SNAKE_SEED" => match value.parse() {
                    Ok(seed) => settings.seed = Some(seed),
                    Err(_) => warn!("Ignoring invalid SNAKE_SEED={:?}", value),
                },
                "SNAKE_RESOURCE_DIR" if !value.is_empty() => {
                    settings.resource_dir = Some(PathBuf::from(value));
                }
                _ => {}
            }
        }

        settings
    }

    /// Time between two game ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            seed: None,
            resource_dir: None,
        }
    }
}

/// Parse a preset name or a positive tick rate
fn parse_difficulty(value: &str) -> Option<u32> {
    let lower = value.to_lowercase();
    DIFFICULTY_PRESETS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, tps)| *tps)
        .or_else(|| lower.parse().ok().filter(|tps| *tps > 0))
}
