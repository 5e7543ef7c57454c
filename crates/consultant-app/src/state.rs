//! Application state (Model in TEA pattern)

use rand::Rng;
use tracing::info;

use crate::config::Settings;
use crate::router::{RouteEvent, Router, Screen};
use crate::screens::{ActiveView, ViewId};
use crate::session::SessionState;
use crate::theme::ThemeState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Messages rotated on the startup splash
const LOADING_MESSAGES: &[&str] = &[
    "Checking your session...",
    "Warming up market data...",
    "Polishing the crystal ball...",
    "Counting rupees...",
    "Consulting the charts...",
    "Reading the ticker tape...",
];

/// Splash spinner state shown until the session check completes
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Current loading message
    pub message: &'static str,
    /// Animation frame counter for spinner
    pub animation_frame: u64,
    message_index: usize,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingState {
    pub fn new() -> Self {
        // Start at a random index for variety
        let start_index = rand::thread_rng().gen_range(0..LOADING_MESSAGES.len());

        Self {
            message: LOADING_MESSAGES[start_index],
            animation_frame: 0,
            message_index: start_index,
        }
    }

    /// Advance the spinner, cycling the message every 15 frames
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.animation_frame % 15 == 0 {
            self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
            self.message = LOADING_MESSAGES[self.message_index];
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Application settings from config file and CLI
    pub settings: Settings,

    pub session: SessionState,

    pub theme: ThemeState,

    pub router: Router,

    /// State of the screen on display, rebuilt on every transition
    pub view: ActiveView,

    /// Identity of `view`
    pub view_id: ViewId,

    /// Splash animation
    pub loading_state: LoadingState,

    /// One-line notice for the status bar, cleared on navigation
    pub status: Option<String>,

    next_view_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let mut state = Self {
            phase: AppPhase::Running,
            theme: ThemeState::new(settings.ui.dark_mode),
            settings,
            session: SessionState::new(),
            router: Router::new(Screen::Login),
            view: ActiveView::default(),
            view_id: ViewId(0),
            loading_state: LoadingState::new(),
            status: None,
            next_view_id: 0,
        };
        state.enter(Screen::Login);
        state
    }

    pub fn current_screen(&self) -> Screen {
        self.router.current()
    }

    /// The startup session check is still running
    pub fn show_splash(&self) -> bool {
        !self.session.is_bootstrapped()
    }

    /// Feed `event` through the router and rebuild the view it lands on
    pub fn route(&mut self, event: RouteEvent) -> Screen {
        let next = self.router.apply(event, self.session.is_signed_in());
        self.enter(next);
        next
    }

    fn enter(&mut self, screen: Screen) {
        self.next_view_id += 1;
        self.view_id = ViewId(self.next_view_id);
        self.view = ActiveView::for_screen(screen, self.session.user());
        self.status = None;
        info!("Showing {:?} ({})", screen, self.view_id);
    }

    /// Whether `id` still names the view on display
    pub fn is_current_view(&self, id: ViewId) -> bool {
        self.view_id == id
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
