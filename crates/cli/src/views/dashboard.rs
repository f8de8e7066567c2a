//! # Dashboard View
//!
//! The signed-in landing screen: role, menu and the overview tab.

use anyhow::Result;
use aquacarbon_core::catalog::CatalogSource;
use aquacarbon_core::dashboard::{Dashboard, OverviewStats, Tab, OVERVIEW_PREVIEW};
use aquacarbon_core::models::{Project, UserRole};
use serde::Serialize;

use crate::output::usd;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Tab,
    pub label: &'static str,
    pub active: bool,
    pub under_development: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPage {
    pub role: UserRole,
    pub menu: Vec<MenuItem>,
    /// Present when the role lands on the overview tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<OverviewStats>,
    pub preview: Vec<Project>,
}

pub fn menu(dashboard: &Dashboard) -> Vec<MenuItem> {
    dashboard
        .tabs()
        .into_iter()
        .map(|tab| MenuItem {
            id: tab,
            label: tab.label(),
            active: tab == dashboard.active_tab(),
            under_development: tab.is_under_development(),
        })
        .collect()
}

pub fn build(source: &dyn CatalogSource, role: UserRole) -> Result<DashboardPage> {
    let dashboard = Dashboard::login(role);
    let menu = menu(&dashboard);

    let (stats, preview) = if dashboard.active_tab() == Tab::Overview {
        let projects = source.projects()?;
        let stats = OverviewStats::from_projects(&projects);
        let preview = projects.into_iter().take(OVERVIEW_PREVIEW).collect();
        (Some(stats), preview)
    } else {
        (None, Vec::new())
    };

    Ok(DashboardPage {
        role,
        menu,
        stats,
        preview,
    })
}

pub fn render_menu(menu: &[MenuItem]) -> String {
    let mut out = String::new();
    for item in menu {
        let marker = if item.active { ">" } else { " " };
        let note = if item.under_development {
            " (under development)"
        } else {
            ""
        };
        out.push_str(&format!("{} {:<14} {}{}\n", marker, item.id.as_str(), item.label, note));
    }
    out
}

pub fn render(page: &DashboardPage) -> String {
    let mut out = format!("AquaCarbon  [{}]\n\n", page.role.display_name());
    out.push_str(&render_menu(&page.menu));

    if let Some(stats) = &page.stats {
        out.push_str("\nOverview\n");
        out.push_str(&format!("  Total Credits    {}\n", stats.total_credits));
        out.push_str(&format!("  Available        {}\n", stats.credits_available));
        out.push_str(&format!(
            "  Projects         {} ({} verified)\n",
            stats.projects, stats.verified_projects
        ));
        out.push_str(&format!("  Trust Score      {:.0}%\n", stats.trust_score));

        out.push_str("\nFeatured projects\n");
        for p in &page.preview {
            out.push_str(&format!(
                "  [{}] {} ({}) {}\n",
                p.id,
                p.name,
                p.location,
                usd(p.price)
            ));
        }
    }
    out
}
