//! # MRV View

use anyhow::{Context, Result};
use aquacarbon_core::catalog::CatalogSource;
use aquacarbon_core::models::Notification;
use aquacarbon_core::mrv::{MrvWorkspace, Verification};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MrvPage {
    pub project: Option<String>,
    pub verification: Option<Verification>,
    pub notifications: Vec<Notification>,
}

pub fn build(
    source: &dyn CatalogSource,
    project: Option<&str>,
    urgent_only: bool,
    tolerance: f64,
) -> Result<MrvPage> {
    let mut workspace =
        MrvWorkspace::new(source.mrv_reports()?, source.notifications()?).with_tolerance(tolerance);
    if let Some(id) = project {
        workspace
            .select_project(id)
            .with_context(|| format!("No MRV report for project '{}'", id))?;
    }

    let notifications = if urgent_only {
        workspace.urgent().cloned().collect()
    } else {
        workspace.notifications().to_vec()
    };

    Ok(MrvPage {
        project: workspace.selected_project().map(str::to_string),
        verification: workspace.verification(),
        notifications,
    })
}

fn bar(ratio: f64) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * 20.0).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}

pub fn render(page: &MrvPage) -> String {
    let mut out = String::from("MRV Workspace\n\n");
    match (&page.project, &page.verification) {
        (Some(project), Some(v)) => {
            out.push_str(&format!(
                "Verification Comparison (project {}, report {}), trust score {}%\n",
                project, v.report_id, v.trust_score
            ));
            out.push_str(&format!("  Reported       {} {:>8.0} tCO2\n", bar(1.0), v.reported));
            out.push_str(&format!(
                "  AI Calculated  {} {:>8.0} tCO2\n",
                bar(v.ai_ratio),
                v.ai_calculated
            ));
            out.push_str(&format!(
                "  Verified       {} {:>8.0} tCO2\n",
                bar(v.verified_ratio),
                v.verified
            ));
            let verdict = if v.within_tolerance {
                "within acceptable range"
            } else {
                "outside acceptable range"
            };
            out.push_str(&format!(
                "  Variance {:.1}%, {}\n",
                v.variance * 100.0,
                verdict
            ));
        }
        _ => out.push_str("No MRV reports available.\n"),
    }

    out.push_str("\nNotifications\n");
    for n in &page.notifications {
        let urgent = if n.urgent { " [URGENT]" } else { "" };
        out.push_str(&format!("  ({}) {}{}\n", n.kind, n.message, urgent));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquacarbon_core::catalog::MockCatalog;
    use aquacarbon_core::mrv::DEFAULT_TOLERANCE;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(1.0), "#".repeat(20));
        assert_eq!(bar(0.5).matches('#').count(), 10);
        assert_eq!(bar(2.0).len(), 20);
    }

    #[test]
    fn test_urgent_only() {
        let page = build(&MockCatalog::new(), None, true, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(page.notifications.len(), 2);
        assert!(render(&page).contains("Variance 5.6%, within acceptable range"));
    }

    #[test]
    fn test_unknown_project() {
        assert!(build(&MockCatalog::new(), Some("x"), false, DEFAULT_TOLERANCE).is_err());
    }
}
