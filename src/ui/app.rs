//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::SalesApi;
use crate::consts::cli_consts::{KEY_POLL_INTERVAL_MS, SPLASH_DURATION_SECS};
use crate::ui::dashboard::{Action, DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying events, charts and the activity log.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Base URL of the backend the dashboard talks to.
    base_url: String,

    /// Venue pre-filled into new drafts, from the config file.
    default_venue: Option<String>,

    /// The current screen being displayed in the application.
    current_screen: Screen,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(base_url: String, default_venue: Option<String>) -> Self {
        Self {
            start_time: Instant::now(),
            base_url,
            default_venue,
            current_screen: Screen::Splash,
        }
    }

    /// Builds the dashboard state and performs the initial event fetch.
    async fn enter_dashboard(&mut self, api: &dyn SalesApi) {
        let mut state = DashboardState::new(
            self.base_url.clone(),
            self.start_time,
            self.default_venue.clone(),
        );
        state.load_events(api).await;
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    api: &dyn SalesApi,
) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_DURATION_SECS);

    // UI event loop
    loop {
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_dashboard(api).await;
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(KEY_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            return Ok(());
                        }
                        // Any other key press skips the splash screen
                        app.enter_dashboard(api).await;
                    }
                    Screen::Dashboard(state) => match state.handle_key(key.code) {
                        Some(Action::Quit) => return Ok(()),
                        Some(Action::Reload) => state.load_events(api).await,
                        Some(Action::Submit) => state.submit_event(api).await,
                        Some(Action::Import(path)) => state.import_file(api, &path).await,
                        Some(Action::Export(kind)) => state.export_report(api, kind).await,
                        None => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
