//! Role selection and signup forms.
//!
//! A card picker for the four roles, then a per-role form. Submitting
//! synthesizes a profile locally with role-derived defaults; nothing is
//! sent anywhere.

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

/// What the app should do after a key reached this screen.
#[derive(Debug, PartialEq)]
pub enum SignupOutcome {
    None,
    Created(UserProfile),
    Back,
}

/// Current status options for employee signups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Employed,
    Unemployed,
    Student,
}

impl EmployeeStatus {
    fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Employed => "Employed",
            EmployeeStatus::Unemployed => "Unemployed",
            EmployeeStatus::Student => "Student",
        }
    }

    fn next(self) -> Self {
        match self {
            EmployeeStatus::Employed => EmployeeStatus::Unemployed,
            EmployeeStatus::Unemployed => EmployeeStatus::Student,
            EmployeeStatus::Student => EmployeeStatus::Employed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Name,
    Email,
    Age,
    Status,
    Extra,
    Terms,
}

/// The fields shown for a role, in focus order.
fn fields(role: Role) -> &'static [FormField] {
    use FormField::*;
    match role {
        Role::Employee => &[Name, Email, Age, Status, Terms],
        Role::Company | Role::Mentor => &[Name, Email, Extra, Terms],
        Role::Consultant => &[Name, Email, Terms],
    }
}

#[derive(Debug)]
enum Stage {
    Choose { selected: usize },
    Form(SignupForm),
}

/// Role selection screen state.
#[derive(Debug)]
pub struct RoleSelect {
    stage: Stage,
}

impl Default for RoleSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleSelect {
    pub fn new() -> Self {
        Self {
            stage: Stage::Choose { selected: 0 },
        }
    }

    /// Handle a key press, returning the resulting outcome.
    pub fn handle_key(&mut self, key: KeyEvent) -> SignupOutcome {
        match &mut self.stage {
            Stage::Choose { selected } => match key.code {
                KeyCode::Esc => SignupOutcome::Back,
                KeyCode::Up | KeyCode::Left | KeyCode::BackTab => {
                    *selected = selected.checked_sub(1).unwrap_or(Role::all().len() - 1);
                    SignupOutcome::None
                }
                KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                    *selected = (*selected + 1) % Role::all().len();
                    SignupOutcome::None
                }
                KeyCode::Enter => {
                    let role = Role::all()[*selected];
                    self.stage = Stage::Form(SignupForm::new(role));
                    SignupOutcome::None
                }
                _ => SignupOutcome::None,
            },
            Stage::Form(form) => {
                if key.code == KeyCode::Esc {
                    // Back to the cards, dropping any half-filled form.
                    let selected = Role::all().iter().position(|r| *r == form.role).unwrap_or(0);
                    self.stage = Stage::Choose { selected };
                    return SignupOutcome::None;
                }
                form.handle_key(key)
            }
        }
    }

    /// Render the active stage centered in the frame.
    pub fn render(&self, frame: &mut Frame) {
        match &self.stage {
            Stage::Choose { selected } => render_cards(frame, *selected),
            Stage::Form(form) => form.render(frame),
        }
    }
}

/// Per-role signup form state.
#[derive(Debug)]
struct SignupForm {
    role: Role,
    name: String,
    email: String,
    age: String,
    status: Option<EmployeeStatus>,
    /// Company code or expertise area, depending on the role.
    extra: String,
    agree_terms: bool,
    focus: usize,
    errors: Vec<String>,
}

impl SignupForm {
    fn new(role: Role) -> Self {
        Self {
            role,
            name: String::new(),
            email: String::new(),
            age: String::new(),
            status: None,
            extra: String::new(),
            agree_terms: false,
            focus: 0,
            errors: Vec::new(),
        }
    }

    fn focused(&self) -> FormField {
        fields(self.role)[self.focus]
    }

    fn handle_key(&mut self, key: KeyEvent) -> SignupOutcome {
        let count = fields(self.role).len();
        match (key.modifiers, key.code) {
            (_, KeyCode::Tab | KeyCode::Down) => {
                self.focus = (self.focus + 1) % count;
                SignupOutcome::None
            }
            (_, KeyCode::BackTab | KeyCode::Up) => {
                self.focus = self.focus.checked_sub(1).unwrap_or(count - 1);
                SignupOutcome::None
            }
            (_, KeyCode::Enter) => self.submit(),
            (_, KeyCode::Char(' ')) if self.focused() == FormField::Terms => {
                self.agree_terms = !self.agree_terms;
                SignupOutcome::None
            }
            (_, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right)
                if self.focused() == FormField::Status =>
            {
                self.status = Some(self.status.map_or(EmployeeStatus::Employed, |s| s.next()));
                SignupOutcome::None
            }
            (_, KeyCode::Backspace) => {
                if let Some(text) = self.focused_text_mut() {
                    text.pop();
                }
                SignupOutcome::None
            }
            (modifiers, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(text) = self.focused_text_mut() {
                    text.push(c);
                }
                SignupOutcome::None
            }
            _ => SignupOutcome::None,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused() {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Age => Some(&mut self.age),
            FormField::Extra => Some(&mut self.extra),
            FormField::Status | FormField::Terms => None,
        }
    }

    fn submit(&mut self) -> SignupOutcome {
        self.errors = validate::validate_signup(
            self.role,
            &self.name,
            &self.email,
            &self.age,
            self.status.is_some(),
            self.agree_terms,
        );
        if self.errors.is_empty() {
            SignupOutcome::Created(UserProfile::signup(
                self.name.clone(),
                self.email.clone(),
                self.role,
            ))
        } else {
            SignupOutcome::None
        }
    }

    fn render(&self, frame: &mut Frame) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(
            format!("Join as {}", self.role.title())
                .bold()
                .fg(theme::ACCENT_BRIGHT),
        ));
        lines.push(Line::default());

        for error in &self.errors {
            lines.push(Line::from(format!("• {error}").fg(theme::ALERT)));
        }
        if !self.errors.is_empty() {
            lines.push(Line::default());
        }

        for field in fields(self.role) {
            let focused = *field == self.focused();
            match field {
                FormField::Name => {
                    let label = if self.role == Role::Company {
                        "Company Name"
                    } else {
                        "Full Name"
                    };
                    let placeholder = if self.role == Role::Company {
                        "Tech Corp"
                    } else {
                        "John Doe"
                    };
                    lines.push(text_field(label, &self.name, placeholder, focused));
                }
                FormField::Email => {
                    lines.push(text_field("Email", &self.email, "john@example.com", focused));
                }
                FormField::Age => {
                    lines.push(text_field("Age", &self.age, "25", focused));
                }
                FormField::Status => {
                    let value = self.status.map_or("Select status", EmployeeStatus::label);
                    lines.push(selector_field("Current Status", value, focused));
                }
                FormField::Extra => {
                    let (label, placeholder) = if self.role == Role::Company {
                        ("Company Code (Optional)", "COMP123")
                    } else {
                        ("Expertise Area", "Software Development")
                    };
                    lines.push(text_field(label, &self.extra, placeholder, focused));
                }
                FormField::Terms => {
                    let marker = if focused { "▸ " } else { "  " };
                    let checkbox = if self.agree_terms { "[x]" } else { "[ ]" };
                    lines.push(Line::from(vec![
                        Span::styled(marker, Style::new().fg(theme::ACCENT)),
                        Span::styled(checkbox, Style::new().fg(theme::ACCENT)),
                        Span::styled(
                            " I agree to the Terms of Service and Privacy Policy",
                            Style::new().fg(theme::ACCENT_SOFT),
                        ),
                    ]));
                }
            }
        }

        let help = Line::from(vec![
            "enter".bold().fg(theme::ACCENT),
            " create account  ".dark_gray(),
            "tab".bold().fg(theme::ACCENT),
            " next field  ".dark_gray(),
            "space".bold().fg(theme::ACCENT),
            " toggle  ".dark_gray(),
            "esc".bold().fg(theme::ACCENT),
            " back".dark_gray(),
        ])
        .centered();

        render_panel(frame, lines, help, 58);
    }
}

/// Render the role cards.
fn render_cards(frame: &mut Frame, selected: usize) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from("Choose Your Path".bold().fg(theme::ACCENT_BRIGHT)));
    lines.push(Line::default());

    for (index, role) in Role::all().iter().enumerate() {
        let focused = index == selected;
        let marker = if focused { "▸ " } else { "  " };
        let title_style = if focused {
            Style::new().fg(theme::ACCENT_BRIGHT).bold()
        } else {
            Style::new().fg(theme::ACCENT)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::new().fg(theme::ACCENT)),
            Span::styled(role.title(), title_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(role.description(), Style::new().fg(theme::ACCENT_SOFT)),
        ]));
        lines.push(Line::default());
    }

    let help = Line::from(vec![
        "↑↓".bold().fg(theme::ACCENT),
        " select  ".dark_gray(),
        "enter".bold().fg(theme::ACCENT),
        " continue  ".dark_gray(),
        "esc".bold().fg(theme::ACCENT),
        " back".dark_gray(),
    ])
    .centered();

    render_panel(frame, lines, help, 58);
}

/// Bordered panel centered in the frame with a help line underneath.
fn render_panel(frame: &mut Frame, lines: Vec<Line>, help: Line, width: u16) {
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
        Constraint::Length(width),
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

/// Label/value line for a text field, with placeholder and focus marker.
fn text_field<'a>(label: &'a str, value: &str, placeholder: &'a str, focused: bool) -> Line<'a> {
    let marker = if focused { "▸ " } else { "  " };
    let value_span = if value.is_empty() {
        Span::styled(placeholder, Style::new().fg(Color::DarkGray))
    } else {
        let style = if focused {
            Style::new().fg(Color::White).bold()
        } else {
            Style::new().fg(Color::Gray)
        };
        Span::styled(value.to_string(), style)
    };
    Line::from(vec![
        Span::styled(marker, Style::new().fg(theme::ACCENT)),
        Span::styled(format!("{label}: "), Style::new().fg(theme::ACCENT)),
        value_span,
    ])
}

/// Label/value line for the status selector.
fn selector_field<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Style::new().fg(theme::ACCENT)),
        Span::styled(format!("{label}: "), Style::new().fg(theme::ACCENT)),
        Span::styled("◂ ", Style::new().fg(theme::ACCENT)),
        Span::styled(value, Style::new().fg(Color::White)),
        Span::styled(" ▸", Style::new().fg(theme::ACCENT)),
    ])
}
