//! # Mock Catalog
//!
//! The built-in data set rendered when no data file is configured.

use super::source::{CatalogData, CatalogSource};
use crate::error::Result;
use crate::models::{
    CarbonCredit, Certificate, CertificateStatus, CreditStatus, MrvReport, MrvStatus,
    Notification, NotificationKind, Project, ProjectStatus, ProjectType, Transaction,
    TransactionKind,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const IMG_SUNDARBANS: &str =
    "https://images.pexels.com/photos/1655166/pexels-photo-1655166.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_TAMIL_NADU: &str =
    "https://images.pexels.com/photos/1670187/pexels-photo-1670187.jpeg?auto=compress&cs=tinysrgb&w=400";
const IMG_PALAWAN: &str =
    "https://images.pexels.com/photos/544731/pexels-photo-544731.jpeg?auto=compress&cs=tinysrgb&w=400";

/// In-memory catalog with three projects, three credit lots and their ledger
#[derive(Debug, Clone)]
pub struct MockCatalog {
    data: CatalogData,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            data: CatalogData {
                projects: projects(),
                credits: credits(),
                transactions: transactions(),
                certificates: certificates(),
                mrv_reports: mrv_reports(),
                notifications: notifications(),
            },
        }
    }

    /// The whole data set, e.g. to export it as a JSON document
    pub fn data(&self) -> &CatalogData {
        &self.data
    }
}

impl CatalogSource for MockCatalog {
    fn projects(&self) -> Result<Vec<Project>> {
        self.data.projects()
    }

    fn credits(&self) -> Result<Vec<CarbonCredit>> {
        self.data.credits()
    }

    fn transactions(&self) -> Result<Vec<Transaction>> {
        self.data.transactions()
    }

    fn certificates(&self) -> Result<Vec<Certificate>> {
        self.data.certificates()
    }

    fn mrv_reports(&self) -> Result<Vec<MrvReport>> {
        self.data.mrv_reports()
    }

    fn notifications(&self) -> Result<Vec<Notification>> {
        self.data.notifications()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "Sundarbans Mangrove Restoration".to_string(),
            location: "Bangladesh".to_string(),
            coordinates: (89.5, 22.5),
            status: ProjectStatus::Active,
            credits_issued: 15_000,
            credits_available: 8_500,
            price: 25.0,
            project_type: ProjectType::MangroveRestoration,
            description: "Large-scale mangrove restoration in the Sundarbans delta".to_string(),
            images: strings(&[IMG_SUNDARBANS]),
            verification_badge: true,
            sdg_impacts: strings(&["Climate Action", "Life Below Water", "Life on Land"]),
            community_benefits: 2_500,
            biodiversity_score: 9,
            qr_code: "QR123".to_string(),
            blockchain_cert: "BC-001".to_string(),
            trust_score: 94,
        },
        Project {
            id: "2".to_string(),
            name: "Tamil Nadu Coastal Protection".to_string(),
            location: "Tamil Nadu, India".to_string(),
            coordinates: (80.2, 13.1),
            status: ProjectStatus::Verified,
            credits_issued: 8_500,
            credits_available: 3_200,
            price: 30.0,
            project_type: ProjectType::CoastalWetlands,
            description: "Protecting and restoring coastal wetlands along Tamil Nadu coast"
                .to_string(),
            images: strings(&[IMG_TAMIL_NADU]),
            verification_badge: true,
            sdg_impacts: strings(&["Climate Action", "Sustainable Communities"]),
            community_benefits: 1_800,
            biodiversity_score: 8,
            qr_code: "QR124".to_string(),
            blockchain_cert: "BC-002".to_string(),
            trust_score: 91,
        },
        Project {
            id: "3".to_string(),
            name: "Philippines Seagrass Conservation".to_string(),
            location: "Palawan, Philippines".to_string(),
            coordinates: (118.7, 9.5),
            status: ProjectStatus::Pending,
            credits_issued: 5_200,
            credits_available: 5_200,
            price: 22.0,
            project_type: ProjectType::SeagrassBeds,
            description: "Conservation and restoration of seagrass ecosystems".to_string(),
            images: strings(&[IMG_PALAWAN]),
            verification_badge: false,
            sdg_impacts: strings(&["Life Below Water", "Climate Action"]),
            community_benefits: 1_200,
            biodiversity_score: 7,
            qr_code: "QR125".to_string(),
            blockchain_cert: "BC-003".to_string(),
            trust_score: 87,
        },
    ]
}

fn credits() -> Vec<CarbonCredit> {
    vec![
        CarbonCredit {
            id: "1".to_string(),
            project_id: "proj-001".to_string(),
            token_id: "BC-001-2024".to_string(),
            price: 25.0,
            vintage: "2024".to_string(),
            quantity: 100,
            status: CreditStatus::Available,
            owner: "Mangrove Foundation".to_string(),
            transaction_hash: "0x123...".to_string(),
            certificate_url: "https://cert.example.com/bc-001".to_string(),
            impact_badges: strings(&["Biodiversity Boost", "Community Benefit"]),
        },
        CarbonCredit {
            id: "2".to_string(),
            project_id: "proj-002".to_string(),
            token_id: "BC-002-2024".to_string(),
            price: 30.0,
            vintage: "2024".to_string(),
            quantity: 75,
            status: CreditStatus::Available,
            owner: "Coastal Restoration Inc".to_string(),
            transaction_hash: "0x456...".to_string(),
            certificate_url: "https://cert.example.com/bc-002".to_string(),
            impact_badges: strings(&["Climate Resilience", "Ocean Protection"]),
        },
        CarbonCredit {
            id: "3".to_string(),
            project_id: "proj-003".to_string(),
            token_id: "BC-003-2024".to_string(),
            price: 28.0,
            vintage: "2024".to_string(),
            quantity: 200,
            status: CreditStatus::Available,
            owner: "Blue Carbon Collective".to_string(),
            transaction_hash: "0x789...".to_string(),
            certificate_url: "https://cert.example.com/bc-003".to_string(),
            impact_badges: strings(&[
                "Biodiversity Boost",
                "Community Benefit",
                "Climate Resilience",
            ]),
        },
    ]
}

fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".to_string(),
            kind: TransactionKind::Mint,
            credit_id: "BC-001-2024".to_string(),
            from: "System".to_string(),
            to: "0x1234...5678".to_string(),
            amount: 1_000,
            timestamp: at(2024, 1, 15, 10, 30),
            tx_hash: "0xabcd1234efgh5678...".to_string(),
            verified: true,
        },
        Transaction {
            id: "2".to_string(),
            kind: TransactionKind::Transfer,
            credit_id: "BC-001-2024".to_string(),
            from: "0x1234...5678".to_string(),
            to: "0x9876...5432".to_string(),
            amount: 500,
            timestamp: at(2024, 1, 20, 14, 15),
            tx_hash: "0xefgh5678ijkl9012...".to_string(),
            verified: true,
        },
        Transaction {
            id: "3".to_string(),
            kind: TransactionKind::Retire,
            credit_id: "BC-001-2024".to_string(),
            from: "0x9876...5432".to_string(),
            to: "Retired".to_string(),
            amount: 500,
            timestamp: at(2024, 1, 25, 9, 45),
            tx_hash: "0xijkl9012mnop3456...".to_string(),
            verified: true,
        },
    ]
}

fn certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: "BC-001-2024".to_string(),
            project_name: "Mangrove Restoration Sundarbans".to_string(),
            quantity: 1_000,
            vintage: "2024".to_string(),
            issue_date: date(2024, 1, 15),
            status: CertificateStatus::Active,
            image_url: IMG_SUNDARBANS.to_string(),
        },
        Certificate {
            id: "BC-002-2024".to_string(),
            project_name: "Coastal Wetland Protection".to_string(),
            quantity: 750,
            vintage: "2024".to_string(),
            issue_date: date(2024, 1, 20),
            status: CertificateStatus::Retired,
            image_url: IMG_TAMIL_NADU.to_string(),
        },
    ]
}

fn mrv_reports() -> Vec<MrvReport> {
    vec![
        MrvReport {
            id: "MR-001".to_string(),
            project_id: "1".to_string(),
            report_date: date(2024, 2, 1),
            reported_sequestration: 1_250.0,
            verified_sequestration: 1_180.0,
            ai_calculation: 1_205.0,
            trust_score: 94,
            satellite_data: Some("sentinel-2/2024-01-30".to_string()),
            drone_data: strings(&["survey-north.tif", "survey-south.tif"]),
            verifier_notes: "Minor variance within acceptable range.".to_string(),
            status: MrvStatus::Verified,
        },
        MrvReport {
            id: "MR-002".to_string(),
            project_id: "2".to_string(),
            report_date: date(2024, 2, 3),
            reported_sequestration: 860.0,
            verified_sequestration: 0.0,
            ai_calculation: 812.0,
            trust_score: 91,
            satellite_data: Some("sentinel-2/2024-02-01".to_string()),
            drone_data: Vec::new(),
            verifier_notes: "Monthly report due.".to_string(),
            status: MrvStatus::Pending,
        },
        MrvReport {
            id: "MR-003".to_string(),
            project_id: "3".to_string(),
            report_date: date(2024, 2, 5),
            reported_sequestration: 640.0,
            verified_sequestration: 470.0,
            ai_calculation: 495.0,
            trust_score: 87,
            satellite_data: Some("landsat-9/2024-02-04".to_string()),
            drone_data: strings(&["palawan-bed-7.tif"]),
            verifier_notes: "Anomaly detected in satellite data.".to_string(),
            status: MrvStatus::Disputed,
        },
    ]
}

fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Verification,
            message: "New verification required for Project MR-001".to_string(),
            urgent: true,
        },
        Notification {
            id: 2,
            kind: NotificationKind::Report,
            message: "Monthly report due in 3 days for Project MR-002".to_string(),
            urgent: false,
        },
        Notification {
            id: 3,
            kind: NotificationKind::Alert,
            message: "Anomaly detected in satellite data for Project MR-003".to_string(),
            urgent: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use std::collections::HashSet;

    #[test]
    fn test_mock_ids_are_unique() {
        let catalog = MockCatalog::new();
        let projects = catalog.projects().unwrap();
        let ids: HashSet<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), projects.len());

        let credits = catalog.credits().unwrap();
        let ids: HashSet<_> = credits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), credits.len());
    }

    #[test]
    fn test_mock_timestamps_are_set() {
        let txs = MockCatalog::new().transactions().unwrap();
        assert_eq!(txs[0].timestamp.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_mock_dates_are_valid() {
        let catalog = MockCatalog::new();
        for tx in catalog.transactions().unwrap() {
            assert_eq!(tx.timestamp.year(), 2024, "transaction {}", tx.id);
        }
        for cert in catalog.certificates().unwrap() {
            assert_ne!(cert.issue_date, NaiveDate::default(), "certificate {}", cert.id);
            assert_eq!(cert.issue_date.year(), 2024);
        }
        for report in catalog.mrv_reports().unwrap() {
            assert_ne!(report.report_date, NaiveDate::default(), "report {}", report.id);
            assert_eq!(report.report_date.year(), 2024);
        }
    }
}
