//! Core types shared across the smartreps crates.

use serde::{Deserialize, Serialize};

pub mod theme {
    //! Accent palette for dashboard chrome.

    use ratatui::style::Color;

    /// Primary emerald accent.
    pub const ACCENT: Color = Color::Rgb(16, 185, 129);
    /// Bright accent for headings and highlighted values.
    pub const ACCENT_BRIGHT: Color = Color::Rgb(52, 211, 153);
    /// Soft accent for body text.
    pub const ACCENT_SOFT: Color = Color::Rgb(110, 231, 183);
    /// Muted gray for locked or disabled content.
    pub const MUTED: Color = Color::Rgb(107, 114, 128);
    /// Alert red for validation errors and negative flags.
    pub const ALERT: Color = Color::Rgb(248, 113, 113);
}

/// Account role chosen at signup or assigned at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Company,
    Mentor,
    Consultant,
}

impl Role {
    /// All selectable roles, in signup card order.
    pub fn all() -> &'static [Role] {
        &[Role::Employee, Role::Company, Role::Mentor, Role::Consultant]
    }

    /// Display title for this role.
    pub fn title(self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Company => "Company",
            Role::Mentor => "Mentor",
            Role::Consultant => "Consultant",
        }
    }

    /// One-line pitch shown on the signup card.
    pub fn description(self) -> &'static str {
        match self {
            Role::Employee => "Grow your skills and advance your career",
            Role::Company => "Find and develop top talent",
            Role::Mentor => "Guide the next generation",
            Role::Consultant => "Share your expertise globally",
        }
    }

    /// Level assigned to a freshly created account.
    pub fn starting_level(self) -> u32 {
        match self {
            Role::Mentor => 10,
            _ => 1,
        }
    }

    /// Points assigned to a freshly created account.
    pub fn starting_points(self) -> u32 {
        match self {
            Role::Mentor => 1000,
            _ => 0,
        }
    }

    /// Whether accounts of this role start out UMR eligible.
    pub fn starts_umr_eligible(self) -> bool {
        matches!(self, Role::Company | Role::Mentor)
    }
}

/// A locally synthesized user profile.
///
/// This is the single record the session store persists. Field names are
/// serialized in camelCase to match the stored record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name (company name for company accounts).
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Current skill level.
    pub level: u32,
    /// Accumulated points.
    pub points: u32,
    /// UMR eligibility flag.
    pub umr_eligible: bool,
}

impl UserProfile {
    /// Build a profile for a freshly signed-up user with role-derived defaults.
    pub fn signup(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            level: role.starting_level(),
            points: role.starting_points(),
            umr_eligible: role.starts_umr_eligible(),
        }
    }

    /// First letter of the display name, uppercased, for the avatar badge.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}
