//! Role dashboards: static demo metrics around the stored profile.
//!
//! The dashboards only present supplied fields and canned demo numbers;
//! every panel behind the action cards is a mock.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};
use smartreps_core::{Role, UserProfile, theme};

use crate::modal;

/// What the app should do after a key reached the dashboard.
#[derive(Debug, PartialEq)]
pub enum DashboardOutcome {
    None,
    LoggedOut,
    Quit,
}

/// Modal panels reachable from the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    LiveClasses,
    SkillTree,
    VerbalTests,
    Consultations,
    Forum,
    Achievements,
    Recruit,
    Programs,
    Analytics,
    Schedule,
}

impl Panel {
    /// Card title on the dashboard grid.
    fn card_title(self) -> &'static str {
        match self {
            Panel::LiveClasses => "Live Classes",
            Panel::SkillTree => "Skill Tree",
            Panel::VerbalTests => "Verbal Tests",
            Panel::Consultations => "Consultations",
            Panel::Forum => "Forum",
            Panel::Achievements => "Achievements",
            Panel::Recruit => "Recruit Talent",
            Panel::Programs => "Training Programs",
            Panel::Analytics => "Analytics",
            Panel::Schedule => "Schedule Sessions",
        }
    }

    /// One-line blurb under the card title.
    fn card_blurb(self) -> &'static str {
        match self {
            Panel::LiveClasses => "Join interactive sessions with expert mentors",
            Panel::SkillTree => "Track your learning journey and unlock new abilities",
            Panel::VerbalTests => "Test your knowledge with AI-powered assessments",
            Panel::Consultations => "Book 1-on-1 sessions with industry experts",
            Panel::Recruit => "Find and hire skilled professionals",
            Panel::Programs => "Create and manage employee training",
            Panel::Analytics => "Track team performance and growth",
            Panel::Schedule => "Book mentorship and training sessions",
            Panel::Forum | Panel::Achievements => "",
        }
    }

    /// Heading of the opened modal.
    fn modal_title(self) -> &'static str {
        match self {
            Panel::LiveClasses => "Camera Required",
            Panel::SkillTree => "Your Skill Tree",
            Panel::VerbalTests => "Next Test Available",
            Panel::Consultations => "Book Your Free Session",
            Panel::Forum => "Forum",
            Panel::Achievements => "Achievements",
            Panel::Recruit => "Find Top Talent",
            Panel::Programs => "Training Programs",
            Panel::Analytics => "Performance Analytics",
            Panel::Schedule => "Schedule Sessions",
        }
    }
}

/// Action cards shown for a role, in grid order.
fn action_cards(role: Role) -> &'static [Panel] {
    match role {
        Role::Company => &[
            Panel::Recruit,
            Panel::Programs,
            Panel::Analytics,
            Panel::Schedule,
        ],
        Role::Mentor => &[],
        _ => &[
            Panel::LiveClasses,
            Panel::SkillTree,
            Panel::VerbalTests,
            Panel::Consultations,
        ],
    }
}

/// Tagline under the welcome banner.
fn tagline(role: Role) -> &'static str {
    match role {
        Role::Company => "Manage Your Team's Growth",
        Role::Mentor => "Guide the Next Generation",
        _ => "Your Skill Journey Begins",
    }
}

/// Dashboard screen state.
#[derive(Debug)]
pub struct Dashboard {
    profile: UserProfile,
    selected: usize,
    active_modal: Option<Panel>,
}

impl Dashboard {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            selected: 0,
            active_modal: None,
        }
    }

    /// Handle a key press, returning the resulting outcome.
    pub fn handle_key(&mut self, key: KeyEvent) -> DashboardOutcome {
        if self.active_modal.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.active_modal = None;
            }
            return DashboardOutcome::None;
        }

        let cards = action_cards(self.profile.role);
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => DashboardOutcome::Quit,
            KeyCode::Char('l') => DashboardOutcome::LoggedOut,
            KeyCode::Left | KeyCode::Up if !cards.is_empty() => {
                self.selected = self.selected.checked_sub(1).unwrap_or(cards.len() - 1);
                DashboardOutcome::None
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab if !cards.is_empty() => {
                self.selected = (self.selected + 1) % cards.len();
                DashboardOutcome::None
            }
            KeyCode::Enter if !cards.is_empty() => {
                self.active_modal = Some(cards[self.selected]);
                DashboardOutcome::None
            }
            KeyCode::Char('f') if self.profile.role != Role::Company => {
                self.active_modal = Some(Panel::Forum);
                DashboardOutcome::None
            }
            KeyCode::Char('a') if self.profile.role != Role::Company => {
                self.active_modal = Some(Panel::Achievements);
                DashboardOutcome::None
            }
            _ => DashboardOutcome::None,
        }
    }

    /// Render the dashboard over the backdrop, modal last.
    pub fn render(&self, frame: &mut Frame) {
        let [header, banner, _, stats, _, cards_area, profile_area, help_row] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(5),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        self.render_header(frame, header);
        self.render_banner(frame, banner);
        self.render_stats(frame, stats);
        self.render_cards(frame, cards_area);
        self.render_profile(frame, profile_area);
        self.render_help(frame, help_row);

        if let Some(panel) = self.active_modal {
            modal::render(frame, panel.modal_title(), &panel_body(panel));
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let date = Local::now().format("%A, %B %d, %Y").to_string();
        frame.render_widget(
            Paragraph::new(Line::from(" smartreps".bold().fg(theme::ACCENT))),
            area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(format!("{date} ").dark_gray()))
                .alignment(Alignment::Right),
            area,
        );
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(
                format!("Welcome, {}!", self.profile.name)
                    .bold()
                    .fg(theme::ACCENT_BRIGHT),
            )
            .centered(),
            Line::from(tagline(self.profile.role).fg(theme::ACCENT_SOFT)).centered(),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let title = if self.profile.role == Role::Company {
            "Team Overview"
        } else {
            "Your Progress"
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(theme::ACCENT))
            .title(format!(" {title} "))
            .title_style(Style::new().fg(theme::ACCENT));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.profile.role == Role::Company {
            let stats: [(String, &str); 4] = [
                ("24".to_string(), "Total Employees"),
                ("8".to_string(), "Active Programs"),
                ("87%".to_string(), "Completion Rate"),
                ("+42%".to_string(), "Skill Growth"),
            ];
            render_stat_columns(frame, inner, &stats);
        } else {
            let columns = Layout::horizontal([Constraint::Fill(1); 4]).split(inner);
            self.render_level_gauge(frame, columns[0]);

            let eligibility = if self.profile.umr_eligible { "✔" } else { "✘" };
            let stats: [(String, &str); 3] = [
                (self.profile.points.to_string(), "Points"),
                (eligibility.to_string(), "UMR Eligible"),
                ("0".to_string(), "Skills Mastered"),
            ];
            for (column, (value, label)) in columns.iter().skip(1).zip(&stats) {
                let style = if *label == "UMR Eligible" && !self.profile.umr_eligible {
                    Style::new().fg(theme::ALERT).bold()
                } else {
                    Style::new().fg(theme::ACCENT_BRIGHT).bold()
                };
                let lines = vec![
                    Line::default(),
                    Line::styled(value.clone(), style).centered(),
                    Line::from((*label).fg(theme::ACCENT_SOFT)).centered(),
                ];
                frame.render_widget(Paragraph::new(lines), *column);
            }
        }
    }

    /// Level progress toward the next level; fresh accounts sit at zero.
    fn render_level_gauge(&self, frame: &mut Frame, area: Rect) {
        let [_, gauge_row, label_row, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, gauge_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Fill(1),
        ])
        .areas(gauge_row);

        let gauge = Gauge::default()
            .ratio(0.0)
            .label("0%")
            .gauge_style(Style::new().fg(theme::ACCENT))
            .use_unicode(true);
        frame.render_widget(gauge, gauge_area);
        frame.render_widget(
            Paragraph::new(
                Line::from(format!("Level {}", self.profile.level).fg(theme::ACCENT_SOFT))
                    .centered(),
            ),
            label_row,
        );
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let cards = action_cards(self.profile.role);
        if cards.is_empty() {
            // Mentors get a quiet space instead of a card grid.
            frame.render_widget(
                Paragraph::new(
                    Line::from("Your mentees will appear here soon".fg(theme::ACCENT_SOFT))
                        .centered(),
                ),
                area,
            );
            return;
        }

        let rows = Layout::vertical([Constraint::Fill(1); 2]).split(area);
        for (row_index, row) in rows.iter().enumerate() {
            let columns = Layout::horizontal([Constraint::Fill(1); 2]).split(*row);
            for (col_index, column) in columns.iter().enumerate() {
                let index = row_index * 2 + col_index;
                let Some(panel) = cards.get(index) else {
                    continue;
                };
                self.render_card(frame, *column, *panel, index == self.selected);
            }
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, panel: Panel, selected: bool) {
        let border_style = if selected {
            Style::new().fg(theme::ACCENT_BRIGHT)
        } else {
            Style::new().fg(theme::ACCENT)
        };
        let title_style = if selected {
            Style::new().fg(theme::ACCENT_BRIGHT).bold()
        } else {
            Style::new().fg(theme::ACCENT)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", panel.card_title()))
            .title_style(title_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(panel.card_blurb().fg(theme::ACCENT_SOFT)))
                .wrap(ratatui::widgets::Wrap { trim: true }),
            inner,
        );
    }

    fn render_profile(&self, frame: &mut Frame, area: Rect) {
        let title = if self.profile.role == Role::Company {
            "Company Profile"
        } else {
            "Profile"
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(theme::ACCENT))
            .title(format!(" {title} "))
            .title_style(Style::new().fg(theme::ACCENT));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" ({}) ", self.profile.initial()),
                    Style::new().fg(theme::ACCENT_BRIGHT).bold(),
                ),
                Span::styled(self.profile.name.clone(), Style::new().fg(theme::ACCENT_BRIGHT)),
            ]),
            Line::from(Span::styled(
                format!("     {}", self.profile.email),
                Style::new().fg(theme::ACCENT_SOFT),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            "↑↓←→".bold().fg(theme::ACCENT),
            " select  ".dark_gray(),
            "enter".bold().fg(theme::ACCENT),
            " open  ".dark_gray(),
        ];
        if self.profile.role != Role::Company {
            spans.extend([
                "f".bold().fg(theme::ACCENT),
                " forum  ".dark_gray(),
                "a".bold().fg(theme::ACCENT),
                " achievements  ".dark_gray(),
            ]);
        }
        spans.extend([
            "l".bold().fg(theme::ACCENT),
            " logout  ".dark_gray(),
            "q".bold().fg(theme::ACCENT),
            " quit".dark_gray(),
        ]);
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}

/// Four equal stat columns: big value over a label.
fn render_stat_columns(frame: &mut Frame, area: Rect, stats: &[(String, &str)]) {
    let columns = Layout::horizontal(vec![Constraint::Fill(1); stats.len()]).split(area);
    for (column, (value, label)) in columns.iter().zip(stats) {
        let lines = vec![
            Line::default(),
            Line::styled(value.clone(), Style::new().fg(theme::ACCENT_BRIGHT).bold()).centered(),
            Line::from((*label).fg(theme::ACCENT_SOFT)).centered(),
        ];
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

/// Body lines for an opened modal panel.
fn panel_body(panel: Panel) -> Vec<Line<'static>> {
    match panel {
        Panel::LiveClasses => vec![
            Line::from("Please turn on your camera to join the live class".fg(theme::ACCENT_SOFT)),
            Line::default(),
            Line::from("[ Start Session ]".bold().fg(theme::ACCENT)),
        ],
        Panel::SkillTree => vec![
            Line::from("(1) Communication".fg(theme::ACCENT_BRIGHT)),
            Line::from("(✕) Leadership".fg(theme::MUTED)),
            Line::from("(✕) Technical".fg(theme::MUTED)),
            Line::default(),
            Line::from("Complete 3 classes to unlock Leadership".fg(theme::ACCENT_SOFT)),
        ],
        Panel::VerbalTests => vec![
            Line::from("24:00:00".bold().fg(theme::ACCENT_BRIGHT)),
            Line::default(),
            Line::from("Practice your skills while you wait".fg(theme::ACCENT_SOFT)),
        ],
        Panel::Consultations => {
            let mut lines: Vec<Line> = (0..4)
                .map(|week| {
                    let days: String =
                        (1..=7).map(|d| format!(" {:>2} ", week * 7 + d)).collect();
                    Line::from(days.fg(theme::ACCENT_SOFT))
                })
                .collect();
            lines.push(Line::default());
            lines.push(Line::from("[ Select Time Slot ]".bold().fg(theme::ACCENT)));
            lines
        }
        // These panels have no content yet; the overlay itself is the demo.
        Panel::Forum | Panel::Achievements => Vec::new(),
        Panel::Recruit => vec![
            Line::from("Browse our pool of skilled professionals".fg(theme::ACCENT_SOFT)),
            Line::default(),
            Line::from("[ Browse Candidates ]  [ Post Job Opening ]".bold().fg(theme::ACCENT)),
        ],
        Panel::Programs => vec![
            Line::from("Manage your employee development initiatives".fg(theme::ACCENT_SOFT)),
            Line::default(),
            Line::from("[ Create Program ]  [ View Active ]".bold().fg(theme::ACCENT)),
        ],
        Panel::Analytics => vec![
            Line::from("Team Skill Score".fg(theme::ACCENT_SOFT)),
            Line::from("847".bold().fg(theme::ACCENT_BRIGHT)),
            Line::default(),
            Line::from("Monthly Growth".fg(theme::ACCENT_SOFT)),
            Line::from("+12%".bold().fg(theme::ACCENT_BRIGHT)),
        ],
        Panel::Schedule => vec![
            Line::from("Book training and mentorship sessions".fg(theme::ACCENT_SOFT)),
            Line::default(),
            Line::from("[ Open Calendar ]".bold().fg(theme::ACCENT)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn employee_dashboard() -> Dashboard {
        Dashboard::new(UserProfile::signup("John", "john@company.com", Role::Employee))
    }

    #[test]
    fn test_cards_per_role() {
        assert_eq!(action_cards(Role::Employee).len(), 4);
        assert_eq!(action_cards(Role::Consultant).len(), 4);
        assert_eq!(action_cards(Role::Company).len(), 4);
        assert!(action_cards(Role::Mentor).is_empty());
    }

    #[test]
    fn test_enter_opens_selected_card_and_esc_closes() {
        let mut dashboard = employee_dashboard();
        dashboard.handle_key(press(KeyCode::Right));
        assert_eq!(dashboard.handle_key(press(KeyCode::Enter)), DashboardOutcome::None);
        assert_eq!(dashboard.active_modal, Some(Panel::SkillTree));

        // Keys other than close are swallowed while the modal is open.
        assert_eq!(dashboard.handle_key(press(KeyCode::Char('q'))), DashboardOutcome::None);
        assert_eq!(dashboard.active_modal, Some(Panel::SkillTree));

        dashboard.handle_key(press(KeyCode::Esc));
        assert_eq!(dashboard.active_modal, None);
    }

    #[test]
    fn test_card_selection_wraps() {
        let mut dashboard = employee_dashboard();
        dashboard.handle_key(press(KeyCode::Left));
        assert_eq!(dashboard.selected, 3);
        dashboard.handle_key(press(KeyCode::Right));
        assert_eq!(dashboard.selected, 0);
    }

    #[test]
    fn test_logout_and_quit() {
        let mut dashboard = employee_dashboard();
        assert_eq!(
            dashboard.handle_key(press(KeyCode::Char('l'))),
            DashboardOutcome::LoggedOut
        );
        assert_eq!(
            dashboard.handle_key(press(KeyCode::Char('q'))),
            DashboardOutcome::Quit
        );
        assert_eq!(dashboard.handle_key(press(KeyCode::Esc)), DashboardOutcome::Quit);
    }

    #[test]
    fn test_bottom_links_open_modals() {
        let mut dashboard = employee_dashboard();
        dashboard.handle_key(press(KeyCode::Char('f')));
        assert_eq!(dashboard.active_modal, Some(Panel::Forum));
        dashboard.handle_key(press(KeyCode::Esc));

        dashboard.handle_key(press(KeyCode::Char('a')));
        assert_eq!(dashboard.active_modal, Some(Panel::Achievements));
    }

    #[test]
    fn test_mentor_ignores_card_keys() {
        let mut dashboard =
            Dashboard::new(UserProfile::signup("Sarah", "sarah@expert.com", Role::Mentor));
        assert_eq!(dashboard.handle_key(press(KeyCode::Enter)), DashboardOutcome::None);
        assert_eq!(dashboard.active_modal, None);
    }

    #[test]
    fn test_consultation_grid_has_four_weeks() {
        let body = panel_body(Panel::Consultations);
        // Four week rows, a blank, and the action row.
        assert_eq!(body.len(), 6);
    }
}
