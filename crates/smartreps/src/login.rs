//! Login screen: mock authentication and quick demo access.
//!
//! No credentials are ever checked against anything. A submitted form
//! synthesizes a profile locally from the email address; the demo keys
//! hand out canned profiles for each role.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use smartreps_core::{Role, UserProfile, theme};

use crate::validate;

/// What the app should do after a key reached the login form.
#[derive(Debug, PartialEq)]
pub enum LoginOutcome {
    None,
    LoggedIn(UserProfile),
    SwitchToSignup,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Email,
    Password,
}

/// Login form state.
#[derive(Debug)]
pub struct LoginForm {
    email: String,
    password: String,
    remember: bool,
    focus: Field,
    errors: Vec<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            remember: false,
            focus: Field::Email,
            errors: Vec::new(),
        }
    }

    /// Handle a key press, returning the resulting outcome.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginOutcome {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => LoginOutcome::Quit,
            (_, KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab) => {
                self.focus = match self.focus {
                    Field::Email => Field::Password,
                    Field::Password => Field::Email,
                };
                LoginOutcome::None
            }
            (_, KeyCode::Enter) => self.submit(),
            (_, KeyCode::F(1)) => LoginOutcome::LoggedIn(demo_profile(Role::Employee)),
            (_, KeyCode::F(2)) => LoginOutcome::LoggedIn(demo_profile(Role::Company)),
            (_, KeyCode::F(3)) => LoginOutcome::LoggedIn(demo_profile(Role::Mentor)),
            (KeyModifiers::CONTROL, KeyCode::Char('n')) => LoginOutcome::SwitchToSignup,
            (KeyModifiers::CONTROL, KeyCode::Char('r')) => {
                self.remember = !self.remember;
                LoginOutcome::None
            }
            (_, KeyCode::Backspace) => {
                self.focused_field_mut().pop();
                LoginOutcome::None
            }
            (modifiers, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.focused_field_mut().push(c);
                LoginOutcome::None
            }
            _ => LoginOutcome::None,
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    fn submit(&mut self) -> LoginOutcome {
        self.errors = validate::validate_login(&self.email, &self.password);
        if self.errors.is_empty() {
            LoginOutcome::LoggedIn(mock_login(&self.email))
        } else {
            LoginOutcome::None
        }
    }

    /// Render the login panel centered in the frame.
    pub fn render(&self, frame: &mut Frame) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from("Login to Smartreps".bold().fg(theme::ACCENT_BRIGHT)));
        lines.push(Line::default());

        for error in &self.errors {
            lines.push(Line::from(format!("• {error}").fg(theme::ALERT)));
        }
        if !self.errors.is_empty() {
            lines.push(Line::default());
        }

        lines.push(field_line("Email", &self.email, self.focus == Field::Email));
        let masked = "•".repeat(self.password.chars().count());
        lines.push(field_line("Password", &masked, self.focus == Field::Password));
        lines.push(Line::default());

        let checkbox = if self.remember { "[x]" } else { "[ ]" };
        lines.push(Line::from(vec![
            Span::styled(checkbox, Style::new().fg(theme::ACCENT)),
            Span::styled(" Remember me", Style::new().fg(theme::ACCENT_SOFT)),
        ]));
        lines.push(Line::default());
        lines.push(Line::from("Quick Demo Access:".fg(theme::ACCENT_SOFT)));
        lines.push(Line::from(vec![
            "F1".bold().fg(theme::ACCENT),
            " Employee  ".fg(theme::ACCENT_SOFT),
            "F2".bold().fg(theme::ACCENT),
            " Company  ".fg(theme::ACCENT_SOFT),
            "F3".bold().fg(theme::ACCENT),
            " Mentor".fg(theme::ACCENT_SOFT),
        ]));

        let help = Line::from(vec![
            "enter".bold().fg(theme::ACCENT),
            " login  ".dark_gray(),
            "tab".bold().fg(theme::ACCENT),
            " switch field  ".dark_gray(),
            "^n".bold().fg(theme::ACCENT),
            " create account  ".dark_gray(),
            "esc".bold().fg(theme::ACCENT),
            " quit".dark_gray(),
        ])
        .centered();

        let panel_height = lines.len() as u16 + 2;
        let [_, middle, _, help_row] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(panel_height),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [_, panel, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(48),
            Constraint::Fill(1),
        ])
        .areas(middle);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(theme::ACCENT))
            .style(Style::new().bg(Color::Black));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
        frame.render_widget(help, help_row);
    }
}

/// Label/value line for a form field, with a focus marker.
fn field_line<'a>(label: &'a str, value: &str, focused: bool) -> Line<'a> {
    let marker = if focused { "▸ " } else { "  " };
    let value_style = if focused {
        Style::new().fg(Color::White).bold()
    } else {
        Style::new().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(marker, Style::new().fg(theme::ACCENT)),
        Span::styled(format!("{label}: "), Style::new().fg(theme::ACCENT)),
        Span::styled(value.to_string(), value_style),
    ])
}

/// Synthesize the profile a successful login hands out.
///
/// The display name is the email's local part, capitalized.
pub fn mock_login(email: &str) -> UserProfile {
    let local = email.split('@').next().unwrap_or("");
    let mut chars = local.chars();
    let name = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    UserProfile {
        name,
        email: email.to_string(),
        role: Role::Employee,
        level: 5,
        points: 250,
        umr_eligible: false,
    }
}

/// Canned profile for the quick demo keys.
pub fn demo_profile(role: Role) -> UserProfile {
    match role {
        Role::Company => UserProfile {
            name: "Tech Corp".to_string(),
            email: "hr@techcorp.com".to_string(),
            role: Role::Company,
            level: 1,
            points: 0,
            umr_eligible: true,
        },
        Role::Mentor => UserProfile {
            name: "Sarah Mentor".to_string(),
            email: "sarah@expert.com".to_string(),
            role: Role::Mentor,
            level: 10,
            points: 1000,
            umr_eligible: true,
        },
        _ => UserProfile {
            name: "John Employee".to_string(),
            email: "john@company.com".to_string(),
            role: Role::Employee,
            level: 3,
            points: 150,
            umr_eligible: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut form = LoginForm::new();
        for c in "a@b.co".chars() {
            assert_eq!(form.handle_key(press(KeyCode::Char(c))), LoginOutcome::None);
        }
        assert_eq!(form.email, "a@b.co");

        form.handle_key(press(KeyCode::Tab));
        form.handle_key(press(KeyCode::Char('x')));
        assert_eq!(form.password, "x");

        form.handle_key(press(KeyCode::Backspace));
        assert_eq!(form.password, "");
    }

    #[test]
    fn test_submit_with_invalid_form_collects_errors() {
        let mut form = LoginForm::new();
        assert_eq!(form.handle_key(press(KeyCode::Enter)), LoginOutcome::None);
        assert_eq!(form.errors, vec!["Email is required", "Password is required"]);
    }

    #[test]
    fn test_submit_with_valid_form_logs_in() {
        let mut form = LoginForm::new();
        for c in "john@example.com".chars() {
            form.handle_key(press(KeyCode::Char(c)));
        }
        form.handle_key(press(KeyCode::Tab));
        form.handle_key(press(KeyCode::Char('s')));

        match form.handle_key(press(KeyCode::Enter)) {
            LoginOutcome::LoggedIn(profile) => {
                assert_eq!(profile.name, "John");
                assert_eq!(profile.email, "john@example.com");
                assert_eq!(profile.role, Role::Employee);
                assert_eq!(profile.level, 5);
                assert_eq!(profile.points, 250);
                assert!(!profile.umr_eligible);
            }
            other => panic!("expected login, got {other:?}"),
        }
    }

    #[test]
    fn test_demo_keys_hand_out_canned_profiles() {
        let mut form = LoginForm::new();
        match form.handle_key(press(KeyCode::F(3))) {
            LoginOutcome::LoggedIn(profile) => {
                assert_eq!(profile.name, "Sarah Mentor");
                assert_eq!(profile.level, 10);
                assert!(profile.umr_eligible);
            }
            other => panic!("expected login, got {other:?}"),
        }
    }

    #[test]
    fn test_escape_quits_and_ctrl_n_switches() {
        let mut form = LoginForm::new();
        assert_eq!(form.handle_key(press(KeyCode::Esc)), LoginOutcome::Quit);
        assert_eq!(
            form.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            LoginOutcome::SwitchToSignup
        );
    }
}
