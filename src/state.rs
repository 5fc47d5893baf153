//! Context shared by the game loop and the dialogue overlay

use std::time::Duration;

use crate::clock::Clock;
use crate::config::Settings;
use crate::render::Frontend;

/// Rendering surface, input and time source handed to both loops
pub struct AppContext<F, C> {
    /// Window (or test double) the game draws to and reads input from
    pub frontend: F,
    /// Monotonic time source
    pub clock: C,
    /// Time between two game ticks
    pub tick_interval: Duration,
}

impl<F: Frontend, C: Clock> AppContext<F, C> {
    /// Create a context with the default tick rate
    #[cfg(test)]
    pub fn new(frontend: F, clock: C) -> Self {
        Self::with_settings(frontend, clock, &Settings::default())
    }

    /// Create a context using the tick rate from `settings`
    pub fn with_settings(frontend: F, clock: C, settings: &Settings) -> Self {
        Self {
            frontend,
            clock,
            tick_interval: settings.tick_interval(),
        }
    }
}
