//! # MRV Workspace
//!
//! Monitoring, reporting and verification: compares what a project reported
//! against the AI estimate and the verifier's figure, and lists notifications.

use crate::error::{CatalogError, Result};
use crate::models::{MrvReport, Notification};
use serde::Serialize;

/// Largest accepted gap between reported and verified sequestration
pub const DEFAULT_TOLERANCE: f64 = 0.10;

/// Comparison figures for one report
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub report_id: String,
    pub project_id: String,
    pub reported: f64,
    pub ai_calculated: f64,
    pub verified: f64,
    /// (reported - verified) / reported
    pub variance: f64,
    /// AI estimate as a fraction of the reported value
    pub ai_ratio: f64,
    /// Verified value as a fraction of the reported value
    pub verified_ratio: f64,
    pub trust_score: u8,
    pub within_tolerance: bool,
}

impl Verification {
    pub fn of(report: &MrvReport, tolerance: f64) -> Self {
        let reported = report.reported_sequestration;
        let ratio = |value: f64| if reported > 0.0 { value / reported } else { 0.0 };
        let variance = if reported > 0.0 {
            (reported - report.verified_sequestration) / reported
        } else {
            0.0
        };

        Self {
            report_id: report.id.clone(),
            project_id: report.project_id.clone(),
            reported,
            ai_calculated: report.ai_calculation,
            verified: report.verified_sequestration,
            variance,
            ai_ratio: ratio(report.ai_calculation),
            verified_ratio: ratio(report.verified_sequestration),
            trust_score: report.trust_score,
            within_tolerance: variance.abs() <= tolerance,
        }
    }
}

/// The MRV screen: one selected project's report plus the notification center
#[derive(Debug, Clone)]
pub struct MrvWorkspace {
    reports: Vec<MrvReport>,
    notifications: Vec<Notification>,
    selected: Option<String>,
    tolerance: f64,
}

impl MrvWorkspace {
    /// Mount with the first report's project selected
    pub fn new(reports: Vec<MrvReport>, notifications: Vec<Notification>) -> Self {
        let selected = reports.first().map(|r| r.project_id.clone());
        Self {
            reports,
            notifications,
            selected,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Select the project whose latest report is shown
    pub fn select_project(&mut self, project_id: &str) -> Result<()> {
        if !self.reports.iter().any(|r| r.project_id == project_id) {
            return Err(CatalogError::UnknownEntry(project_id.to_string()));
        }
        self.selected = Some(project_id.to_string());
        Ok(())
    }

    pub fn selected_project(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Most recent report for the selected project
    pub fn report(&self) -> Option<&MrvReport> {
        let project_id = self.selected.as_deref()?;
        self.reports
            .iter()
            .filter(|r| r.project_id == project_id)
            .max_by_key(|r| r.report_date)
    }

    pub fn verification(&self) -> Option<Verification> {
        self.report().map(|r| Verification::of(r, self.tolerance))
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn urgent(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| n.urgent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, MockCatalog};

    fn workspace() -> MrvWorkspace {
        let catalog = MockCatalog::new();
        MrvWorkspace::new(
            catalog.mrv_reports().unwrap(),
            catalog.notifications().unwrap(),
        )
    }

    #[test]
    fn test_default_selection_and_figures() {
        let ws = workspace();
        assert_eq!(ws.selected_project(), Some("1"));
        let v = ws.verification().unwrap();
        assert_eq!(v.reported, 1250.0);
        assert!((v.variance - 0.056).abs() < 1e-9);
        assert!((v.ai_ratio - 0.964).abs() < 1e-9);
        assert!((v.verified_ratio - 0.944).abs() < 1e-9);
        assert!(v.within_tolerance);
    }

    #[test]
    fn test_disputed_report_outside_tolerance() {
        let mut ws = workspace();
        ws.select_project("3").unwrap();
        let v = ws.verification().unwrap();
        assert!(!v.within_tolerance);

        let mut loose = workspace().with_tolerance(0.5);
        loose.select_project("3").unwrap();
        assert!(loose.verification().unwrap().within_tolerance);
    }

    #[test]
    fn test_unknown_project_keeps_selection() {
        let mut ws = workspace();
        assert!(ws.select_project("99").is_err());
        assert_eq!(ws.selected_project(), Some("1"));
    }

    #[test]
    fn test_zero_reported_has_no_ratio() {
        let mut report = MockCatalog::new().mrv_reports().unwrap().remove(0);
        report.reported_sequestration = 0.0;
        let v = Verification::of(&report, DEFAULT_TOLERANCE);
        assert_eq!(v.variance, 0.0);
        assert_eq!(v.ai_ratio, 0.0);
    }

    #[test]
    fn test_urgent_notifications() {
        let ws = workspace();
        let ids: Vec<u32> = ws.urgent().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(ws.notifications().len(), 3);
    }

    #[test]
    fn test_empty_workspace() {
        let ws = MrvWorkspace::new(Vec::new(), Vec::new());
        assert!(ws.selected_project().is_none());
        assert!(ws.verification().is_none());
    }
}
