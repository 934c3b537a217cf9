use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use smartreps_background::{Backdrop, FRAME_INTERVAL, FrameTicker};
use smartreps_config::Config;
use smartreps_core::UserProfile;
use smartreps_session::SessionStore;

use crate::dashboard::{Dashboard, DashboardOutcome};
use crate::login::{LoginForm, LoginOutcome};
use crate::role_select::{RoleSelect, SignupOutcome};

mod dashboard;
mod login;
mod modal;
mod role_select;
mod validate;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// Which top-level view is active.
#[derive(Debug)]
enum Screen {
    Login(LoginForm),
    Signup(RoleSelect),
    Dashboard(Dashboard),
}

/// The main application: screen state, session store and backdrop.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Whether the backdrop should be mounted at startup.
    show_background: bool,
    /// Session store, absent when no storage location resolves.
    session: Option<SessionStore>,
    /// Active screen.
    screen: Screen,
    /// Animated backdrop behind every screen.
    backdrop: Backdrop,
    /// Frame schedule driving the redraw cadence.
    ticker: FrameTicker,
    /// Startup instant; elapsed time feeds the backdrop animation.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let session = match &config.session_path {
            Some(path) => Some(SessionStore::new(path.clone())),
            None => SessionStore::open_default(),
        };

        // A stored session skips the login screen entirely.
        let screen = match session.as_ref().and_then(SessionStore::get_user) {
            Some(profile) => Screen::Dashboard(Dashboard::new(profile)),
            None => Screen::Login(LoginForm::new()),
        };

        Self {
            running: false,
            show_background: config.background,
            session,
            screen,
            backdrop: Backdrop::new(),
            ticker: FrameTicker::new(FRAME_INTERVAL),
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        // The backdrop stays unmounted when the surface is unavailable;
        // rendering is then a silent no-op.
        if self.show_background
            && let Ok(size) = terminal.size()
        {
            self.backdrop.mount(size.width, size.height);
        }

        while self.running {
            if self.ticker.poll() {
                terminal.draw(|frame| self.render(frame))?;
            }
            self.handle_crossterm_events()?;
        }

        self.backdrop.unmount();
        self.ticker.cancel();
        Ok(())
    }

    /// Renders the user interface: backdrop first, active screen on top.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        self.backdrop.render(frame, elapsed_ms);

        match &self.screen {
            Screen::Login(form) => form.render(frame),
            Screen::Signup(signup) => signup.render(frame),
            Screen::Dashboard(dashboard) => dashboard.render(frame),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    ///
    /// Polls with the ticker's remaining timeout so redraws stay on the
    /// frame schedule while keys are handled as they arrive.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.ticker.timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key)?,
                Event::Mouse(_) => {}
                // The next draw reads the new dimensions from the frame.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        if key.modifiers == KeyModifiers::CONTROL
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return Ok(());
        }

        match &mut self.screen {
            Screen::Login(form) => match form.handle_key(key) {
                LoginOutcome::None => {}
                LoginOutcome::LoggedIn(profile) => self.log_in(profile)?,
                LoginOutcome::SwitchToSignup => self.screen = Screen::Signup(RoleSelect::new()),
                LoginOutcome::Quit => self.quit(),
            },
            Screen::Signup(signup) => match signup.handle_key(key) {
                SignupOutcome::None => {}
                SignupOutcome::Created(profile) => self.log_in(profile)?,
                SignupOutcome::Back => self.screen = Screen::Login(LoginForm::new()),
            },
            Screen::Dashboard(dashboard) => match dashboard.handle_key(key) {
                DashboardOutcome::None => {}
                DashboardOutcome::LoggedOut => self.log_out()?,
                DashboardOutcome::Quit => self.quit(),
            },
        }
        Ok(())
    }

    /// Persist the profile and move to its dashboard.
    fn log_in(&mut self, profile: UserProfile) -> color_eyre::Result<()> {
        if let Some(store) = &self.session {
            store.set_user(&profile)?;
        }
        self.screen = Screen::Dashboard(Dashboard::new(profile));
        Ok(())
    }

    /// Clear the stored session and return to the login screen.
    fn log_out(&mut self) -> color_eyre::Result<()> {
        if let Some(store) = &self.session {
            store.clear()?;
        }
        self.screen = Screen::Login(LoginForm::new());
        Ok(())
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use smartreps_core::Role;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn scratch_config(name: &str) -> Config {
        let dir = std::env::temp_dir().join("smartreps_app_tests").join(name);
        let _ = std::fs::remove_dir_all(&dir);
        Config {
            background: true,
            session_path: Some(dir.join("session.json")),
        }
    }

    #[test]
    fn test_starts_on_login_without_session() {
        let app = App::new(scratch_config("fresh"));
        assert!(matches!(&app.screen, Screen::Login(_)));
    }

    #[test]
    fn test_stored_session_skips_login() {
        let config = scratch_config("restore");
        let store = SessionStore::new(config.session_path.clone().unwrap());
        store
            .set_user(&UserProfile::signup("Sarah", "sarah@expert.com", Role::Mentor))
            .unwrap();

        let app = App::new(config);
        match &app.screen {
            Screen::Dashboard(_) => {}
            other => panic!("expected dashboard, got {other:?}"),
        }
    }

    #[test]
    fn test_login_persists_session_and_logout_clears_it() {
        let config = scratch_config("round_trip");
        let store = SessionStore::new(config.session_path.clone().unwrap());
        let mut app = App::new(config);
        app.running = true;

        // F1 is the employee demo login.
        app.on_key_event(press(KeyCode::F(1))).unwrap();
        assert!(matches!(&app.screen, Screen::Dashboard(_)));
        assert!(store.is_authenticated());

        app.on_key_event(press(KeyCode::Char('l'))).unwrap();
        assert!(matches!(&app.screen, Screen::Login(_)));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = App::new(scratch_config("quit"));
        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(!app.running);
    }

    #[test]
    fn test_signup_switch_and_back() {
        let mut app = App::new(scratch_config("signup"));
        app.running = true;

        app.on_key_event(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(matches!(&app.screen, Screen::Signup(_)));

        app.on_key_event(press(KeyCode::Esc)).unwrap();
        assert!(matches!(&app.screen, Screen::Login(_)));
    }
}
