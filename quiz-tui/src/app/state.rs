//! Application state
//!
//! Immutable state structure following functional programming principles.
//! All state transitions happen through the reducer (see `reducer.rs`).

use libquiz::{SessionSettings, SessionState};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Root application state
///
/// Owns the quiz session plus whatever the terminal needs around it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// The quiz session
    pub session: SessionState,

    /// Question limit as typed on the start screen
    pub limit_input: String,

    /// Highlighted option on the question screen
    pub cursor: usize,

    /// Error overlay state
    pub error: Option<String>,

    /// The loop should dispatch a fetch on its next pass
    pub fetch_requested: bool,

    /// Id of the fetch whose outcome is awaited
    pub in_flight: Option<String>,

    /// UI configuration
    pub config: UiConfig,

    /// Shuffle source for session starts
    pub rng: StdRng,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled =
            std::env::var("NO_COLOR").is_err() && std::env::var("QUIZ_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled;

        let tick_rate_ms = std::env::var("QUIZ_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::build(SessionSettings::default(), StdRng::from_entropy())
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with custom session settings and an entropy-seeded shuffle
    pub fn with_settings(settings: SessionSettings) -> Self {
        Self::build(settings, StdRng::from_entropy())
    }

    /// Create state whose question order is reproducible
    pub fn with_seed(settings: SessionSettings, seed: u64) -> Self {
        Self::build(settings, StdRng::seed_from_u64(seed))
    }

    fn build(settings: SessionSettings, rng: StdRng) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            session: SessionState::with_settings(settings),
            limit_input: String::new(),
            cursor: 0,
            error: None,
            fetch_requested: true,
            in_flight: None,
            config: UiConfig::default(),
            rng,
        }
    }

    /// True while a fetch has been requested or dispatched
    pub fn is_fetching(&self) -> bool {
        self.fetch_requested || self.in_flight.is_some()
    }

    /// Start screen accepts Enter only when there is something to play and
    /// no reload is pending
    pub fn can_start(&self) -> bool {
        self.session.status == libquiz::Status::Ready
            && !self.session.questions.is_empty()
            && !self.is_fetching()
    }
}
