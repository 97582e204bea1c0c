//! Application state and the terminal event loop

use crate::environment::Environment;
use crate::events::Event as FeedEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// The screens the application can show.
#[derive(Debug)]
pub enum Screen {
    /// Startup splash, shown briefly before the dashboard.
    Splash,
    /// The three-section dashboard.
    Dashboard(Box<DashboardState>),
}

/// Top-level UI state.
#[derive(Debug)]
pub struct App {
    /// When the session began, for the uptime readout.
    start_time: Instant,

    /// Which backend environment the feeds point at.
    environment: Environment,

    /// Screen currently on display.
    current_screen: Screen,

    /// Worker events flowing into the UI.
    event_receiver: mpsc::Receiver<FeedEvent>,

    /// Signals the feed workers to stop on exit.
    shutdown_sender: broadcast::Sender<()>,

    /// Events received while the splash screen is still up. Settlements can
    /// arrive before the dashboard exists and must not be dropped.
    held_events: VecDeque<FeedEvent>,

    /// Paint a background color behind the dashboard.
    with_background_color: bool,
}

impl App {
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<FeedEvent>,
        shutdown_sender: broadcast::Sender<()>,
        with_background_color: bool,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            shutdown_sender,
            held_events: VecDeque::new(),
            with_background_color,
        }
    }

    /// Swap the splash for the dashboard, replaying any events that arrived
    /// while the splash was showing.
    fn show_dashboard(&mut self) {
        let mut state = DashboardState::new(
            self.environment.clone(),
            self.start_time,
            self.with_background_color,
        );
        while let Some(event) = self.held_events.pop_front() {
            state.add_event(event);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Route incoming worker events to the dashboard, or hold them until
    /// it exists.
    fn drain_worker_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match &mut self.current_screen {
                Screen::Dashboard(state) => state.add_event(event),
                Screen::Splash => self.held_events.push_back(event),
            }
        }
    }

    /// React to a key press. Returns true when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                let _ = self.shutdown_sender.send(());
                true
            }
            _ => {
                // Any other key dismisses the splash early
                if let Screen::Splash = self.current_screen {
                    self.show_dashboard();
                }
                false
            }
        }
    }
}

/// Drives the UI: drains worker events, redraws the active screen, and
/// handles keyboard input until the user quits.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = crate::consts::cli_consts::ui::splash_duration();

    loop {
        app.drain_worker_events();

        if let Screen::Dashboard(state) = &mut app.current_screen {
            // Apply queued settlements and advance the animation tick
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // The splash gives way to the dashboard after a fixed delay
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.show_dashboard();
                continue;
            }
        }

        if event::poll(crate::consts::cli_consts::ui::input_poll_interval())? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SourceData;

    #[tokio::test]
    /// Settlements arriving during the splash screen survive the transition.
    async fn test_show_dashboard_replays_held_events() {
        let (_event_sender, event_receiver) = mpsc::channel(8);
        let (shutdown_sender, _) = broadcast::channel(1);
        let mut app = App::new(
            Environment::Production,
            event_receiver,
            shutdown_sender,
            false,
        );

        app.held_events.push_back(FeedEvent::settled(
            SourceData::News(vec![]),
            "Got 0 news articles".to_string(),
        ));
        app.show_dashboard();

        match &mut app.current_screen {
            Screen::Dashboard(state) => {
                state.update();
                assert!(!state.news.is_loading());
            }
            Screen::Splash => panic!("expected dashboard screen"),
        }
        assert!(app.held_events.is_empty());
    }

    #[tokio::test]
    /// Key releases are ignored; a `q` press signals shutdown and exits.
    async fn test_quit_key_signals_shutdown() {
        let (_event_sender, event_receiver) = mpsc::channel(8);
        let (shutdown_sender, mut shutdown_receiver) = broadcast::channel(1);
        let mut app = App::new(
            Environment::Production,
            event_receiver,
            shutdown_sender,
            false,
        );

        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            event::KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert!(!app.handle_key(release));
        assert!(shutdown_receiver.try_recv().is_err());

        let press = KeyEvent::new(KeyCode::Char('q'), event::KeyModifiers::NONE);
        assert!(app.handle_key(press));
        assert!(shutdown_receiver.try_recv().is_ok());
    }
}
