//! # Registry View
//!
//! Projects filtered by name/location, status and project type.

use anyhow::Result;
use aquacarbon_core::catalog::{CatalogSource, FilterState};
use aquacarbon_core::models::{Project, ProjectStatus, ProjectType};
use aquacarbon_core::screens::{RegistryScreen, ViewMode};
use serde::Serialize;

use crate::output::usd;

/// Filter edits applied after mounting
#[derive(Debug, Default)]
pub struct RegistryQuery {
    pub search: String,
    pub status: String,
    pub project_type: String,
    pub view: String,
    pub details: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryPage {
    pub filter: FilterState<ProjectStatus, ProjectType>,
    pub view_mode: ViewMode,
    /// Projects in the store before filtering
    pub total: usize,
    pub projects: Vec<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Project>,
}

pub fn build(source: &dyn CatalogSource, query: &RegistryQuery) -> Result<RegistryPage> {
    let mut screen = RegistryScreen::mount(source)?;
    screen.set_search(query.search.as_str());
    screen.select_status(&query.status);
    screen.select_type(&query.project_type);
    screen.set_view_mode(ViewMode::parse(&query.view));

    let details = match &query.details {
        Some(id) => Some(screen.details(id)?.clone()),
        None => None,
    };

    Ok(RegistryPage {
        filter: screen.filter().clone(),
        view_mode: screen.view_mode(),
        total: screen.view().entries().len(),
        projects: screen.visible().cloned().collect(),
        details,
    })
}

pub fn render(page: &RegistryPage) -> String {
    let mut out = String::new();
    out.push_str("Blue Carbon Registry\n");
    out.push_str(&format!(
        "Showing {} of {} projects (search: \"{}\", status: {}, type: {})\n\n",
        page.projects.len(),
        page.total,
        page.filter.search_text,
        page.filter.status,
        page.filter.category,
    ));

    if page.projects.is_empty() {
        out.push_str("No projects match the current filters.\n");
    }

    match page.view_mode {
        ViewMode::Grid => {
            for p in &page.projects {
                out.push_str(&project_card(p));
            }
        }
        ViewMode::Map => {
            out.push_str("Interactive map view coming soon\n");
            for p in &page.projects {
                out.push_str(&format!(
                    "  {:<36} {:>7.2}, {:>7.2}\n",
                    p.name, p.coordinates.1, p.coordinates.0
                ));
            }
        }
    }

    if let Some(p) = &page.details {
        out.push_str("\nDetails\n");
        out.push_str(&project_card(p));
        out.push_str(&format!("    {}\n", p.description));
        out.push_str(&format!("    SDGs: {}\n", p.sdg_impacts.join(", ")));
        out.push_str(&format!(
            "    Community benefits: {}  Biodiversity: {}/10  Certificate: {}  QR: {}\n",
            p.community_benefits, p.biodiversity_score, p.blockchain_cert, p.qr_code
        ));
    }
    out
}

fn project_card(p: &Project) -> String {
    let badge = if p.verification_badge { " [verified]" } else { "" };
    format!(
        "  [{}] {}{}\n      {} | {} | {} | {}/credit | {}/{} available | trust {}%\n",
        p.id,
        p.name,
        badge,
        p.location,
        p.project_type.display_name(),
        p.status,
        usd(p.price),
        p.credits_available,
        p.credits_issued,
        p.trust_score,
    )
}
