//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::refresh::SPLASH_DURATION_SECS;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_interval: Duration,
    /// Seed for reproducible data; entropy when absent.
    pub seed: Option<u64>,
}

impl UIConfig {
    pub fn new(with_background_color: bool, refresh_interval: Duration, seed: Option<u64>) -> Self {
        Self {
            with_background_color,
            refresh_interval,
            seed,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Maintenance dashboard; monitoring runs while this screen is mounted.
    Dashboard(Box<DashboardState>),
}

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    StartMonitoring,
    StopMonitoring,
    /// Any other key; skips the splash screen.
    Other,
}

impl Action {
    pub fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
            KeyCode::Char('s') | KeyCode::Char('S') => Action::StartMonitoring,
            KeyCode::Char('x') | KeyCode::Char('X') => Action::StopMonitoring,
            _ => Action::Other,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// UI settings handed to the dashboard when it mounts.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    /// Mounts the dashboard and starts monitoring.
    fn mount_dashboard(&mut self) {
        let mut state = DashboardState::new(self.ui_config.clone());
        state.start_monitoring();
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Applies a key action. Returns `false` when the app should exit.
    fn handle_action(&mut self, action: Action) -> bool {
        if action == Action::Quit {
            return false;
        }
        match &mut self.current_screen {
            Screen::Splash => self.mount_dashboard(),
            Screen::Dashboard(state) => match action {
                Action::StartMonitoring => state.start_monitoring(),
                Action::StopMonitoring => state.stop_monitoring(),
                Action::Other | Action::Quit => {}
            },
        }
        true
    }

    /// Unmounts the dashboard, if mounted, cancelling its refresher.
    async fn shutdown(&mut self) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.unmount().await;
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let result = event_loop(terminal, &mut app).await;
    app.shutdown().await;
    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_DURATION_SECS);

    loop {
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if matches!(app.current_screen, Screen::Splash) && splash_start.elapsed() >= splash_duration
        {
            app.mount_dashboard();
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !app.handle_action(Action::from_key(key.code)) {
                    return Ok(());
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

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(UIConfig::new(false, Duration::from_millis(2000), Some(1)))
    }

    fn dashboard(app: &App) -> &DashboardState {
        match &app.current_screen {
            Screen::Dashboard(state) => state,
            Screen::Splash => panic!("dashboard not mounted"),
        }
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(Action::from_key(KeyCode::Char('q')), Action::Quit);
        assert_eq!(Action::from_key(KeyCode::Esc), Action::Quit);
        assert_eq!(Action::from_key(KeyCode::Char('S')), Action::StartMonitoring);
        assert_eq!(Action::from_key(KeyCode::Char('x')), Action::StopMonitoring);
        assert_eq!(Action::from_key(KeyCode::Enter), Action::Other);
    }

    #[tokio::test(start_paused = true)]
    async fn any_key_skips_splash_and_starts_monitoring() {
        let mut app = app();
        assert!(app.handle_action(Action::Other));
        assert!(dashboard(&app).is_monitoring());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_and_start_keys_toggle_monitoring() {
        let mut app = app();
        app.handle_action(Action::Other);

        app.handle_action(Action::StopMonitoring);
        assert!(!dashboard(&app).is_monitoring());

        app.handle_action(Action::StartMonitoring);
        assert!(dashboard(&app).is_monitoring());
    }

    #[tokio::test(start_paused = true)]
    async fn quit_exits_and_shutdown_unmounts() {
        let mut app = app();
        app.handle_action(Action::Other);

        assert!(!app.handle_action(Action::Quit));
        app.shutdown().await;
        assert!(!dashboard(&app).is_monitoring());
    }
}
