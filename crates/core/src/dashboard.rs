//! # Dashboard
//!
//! Role-aware navigation and the overview figures.
//!
//! The role picked at sign-in only decides which tabs are listed; it is not
//! an access check.

use crate::models::{Project, ProjectStatus, UserRole};
use serde::{Deserialize, Serialize};

/// A dashboard tab
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Overview,
    Registry,
    Mrv,
    Blockchain,
    Marketplace,
    Community,
    Analytics,
    Settings,
}

string_enum!(Tab, "tab", {
    Overview => "overview",
    Registry => "registry",
    Mrv => "mrv",
    Blockchain => "blockchain",
    Marketplace => "marketplace",
    Community => "community",
    Analytics => "analytics",
    Settings => "settings",
});

impl Tab {
    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Registry => "Registry",
            Self::Mrv => "MRV Workspace",
            Self::Blockchain => "Blockchain",
            Self::Marketplace => "Marketplace",
            Self::Community => "Community",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    /// Roles that see this tab in the menu
    pub fn roles(&self) -> &'static [UserRole] {
        use UserRole::*;
        match self {
            Self::Overview => &[Admin, Buyer, Researcher, Company, Ngo],
            Self::Registry => &[Admin, Verifier, Buyer, Researcher, Company, Ngo],
            Self::Mrv => &[Admin, Verifier, Researcher],
            Self::Blockchain => &[Admin, Buyer, Researcher, Company],
            Self::Marketplace => &[Buyer, Company],
            Self::Community => &[Community, Farmer, Ngo],
            Self::Analytics => &[Admin, Researcher, Company],
            Self::Settings => &[
                Admin, Verifier, Buyer, Researcher, Community, Company, Farmer, Ngo,
            ],
        }
    }

    pub fn visible_to(&self, role: UserRole) -> bool {
        self.roles().contains(&role)
    }

    /// Whether the tab has content yet
    pub fn is_under_development(&self) -> bool {
        matches!(self, Self::Community | Self::Analytics | Self::Settings)
    }
}

/// Tabs listed for `role`, in menu order
pub fn available_tabs(role: UserRole) -> Vec<Tab> {
    Tab::all()
        .into_iter()
        .filter(|tab| tab.visible_to(role))
        .collect()
}

/// Navigation state after sign-in
#[derive(Debug, Clone)]
pub struct Dashboard {
    role: UserRole,
    active: Tab,
}

impl Dashboard {
    /// Sign in with `role`. Opens on the overview, or on the first listed tab
    /// when the role has no overview.
    pub fn login(role: UserRole) -> Self {
        let active = if Tab::Overview.visible_to(role) {
            Tab::Overview
        } else {
            available_tabs(role)
                .into_iter()
                .next()
                .unwrap_or(Tab::Settings)
        };
        tracing::info!(role = %role, tab = active.as_str(), "Signed in");
        Self { role, active }
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn tabs(&self) -> Vec<Tab> {
        available_tabs(self.role)
    }

    /// Switch to `tab` if it is listed for the role. Returns whether it switched.
    pub fn select(&mut self, tab: Tab) -> bool {
        if !tab.visible_to(self.role) {
            tracing::debug!(role = %self.role, tab = tab.as_str(), "Tab not listed for role");
            return false;
        }
        self.active = tab;
        true
    }
}

/// Number of projects previewed on the overview tab
pub const OVERVIEW_PREVIEW: usize = 3;

/// Headline figures on the overview tab
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_credits: u64,
    pub credits_available: u64,
    pub projects: usize,
    pub verified_projects: usize,
    /// Mean trust score, 0 with no projects
    pub trust_score: f64,
}

impl OverviewStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let total_credits = projects.iter().map(|p| p.credits_issued).sum();
        let credits_available = projects.iter().map(|p| p.credits_available).sum();
        let verified_projects = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Verified)
            .count();
        let trust_score = if projects.is_empty() {
            0.0
        } else {
            projects.iter().map(|p| f64::from(p.trust_score)).sum::<f64>() / projects.len() as f64
        };

        Self {
            total_credits,
            credits_available,
            projects: projects.len(),
            verified_projects,
            trust_score,
        }
    }
}
