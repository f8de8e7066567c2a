//! # AquaCarbon Models
//!
//! Record types shared by every screen: registry projects, marketplace credits,
//! ledger transactions, certificates, MRV reports and user roles.
//!
//! Records are immutable once loaded from a [`CatalogSource`](crate::catalog::CatalogSource).
//! Status and category fields are closed enums so that a filter value outside
//! the known set is caught when it is parsed, not when it is compared.

use crate::error::CatalogError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a registry project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Issuing credits
    Active,
    /// Submitted, awaiting review
    Pending,
    /// Being reviewed by a verifier
    UnderReview,
    /// Verified by a third party
    Verified,
}

string_enum!(ProjectStatus, "project status", {
    Active => "active",
    Pending => "pending",
    UnderReview => "under-review",
    Verified => "verified",
});

/// Kind of blue carbon ecosystem a project restores
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectType {
    #[serde(rename = "Mangrove Restoration")]
    MangroveRestoration,
    #[serde(rename = "Coastal Wetlands")]
    CoastalWetlands,
    #[serde(rename = "Seagrass Beds")]
    SeagrassBeds,
}

string_enum!(ProjectType, "project type", {
    MangroveRestoration => "mangrove" | "mangrove restoration",
    CoastalWetlands => "coastal" | "coastal wetlands",
    SeagrassBeds => "seagrass" | "seagrass beds",
});

impl ProjectType {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MangroveRestoration => "Mangrove Restoration",
            Self::CoastalWetlands => "Coastal Wetlands",
            Self::SeagrassBeds => "Seagrass Beds",
        }
    }
}

/// A registered restoration project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Longitude, latitude
    pub coordinates: (f64, f64),
    pub status: ProjectStatus,
    pub credits_issued: u64,
    pub credits_available: u64,
    /// USD per credit
    pub price: f64,
    pub project_type: ProjectType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub verification_badge: bool,
    #[serde(default)]
    pub sdg_impacts: Vec<String>,
    /// People benefiting locally
    #[serde(default)]
    pub community_benefits: u64,
    /// 0-10
    #[serde(default)]
    pub biodiversity_score: u8,
    #[serde(default)]
    pub qr_code: String,
    #[serde(default)]
    pub blockchain_cert: String,
    /// 0-100
    #[serde(default)]
    pub trust_score: u8,
}

/// Market status of a credit lot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CreditStatus {
    Available,
    Retired,
    Pending,
}

string_enum!(CreditStatus, "credit status", {
    Available => "available",
    Retired => "retired",
    Pending => "pending",
});

/// Marketplace price-range selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PriceBand {
    /// $0 - $25 inclusive
    #[serde(rename = "0-25")]
    UpTo25,
    /// Above $25 up to $50 inclusive
    #[serde(rename = "25-50")]
    From25To50,
    /// Above $50
    #[serde(rename = "50+")]
    Over50,
}

string_enum!(PriceBand, "price band", {
    UpTo25 => "0-25",
    From25To50 => "25-50",
    Over50 => "50+",
});

impl PriceBand {
    /// Band a unit price falls into
    pub fn of(price: f64) -> Self {
        if price <= 25.0 {
            Self::UpTo25
        } else if price <= 50.0 {
            Self::From25To50
        } else {
            Self::Over50
        }
    }
}

/// A tokenised lot of carbon credits offered on the marketplace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarbonCredit {
    pub id: String,
    pub project_id: String,
    pub token_id: String,
    /// USD per credit
    pub price: f64,
    pub vintage: String,
    pub quantity: u64,
    pub status: CreditStatus,
    pub owner: String,
    #[serde(default)]
    pub transaction_hash: String,
    #[serde(default)]
    pub certificate_url: String,
    #[serde(default)]
    pub impact_badges: Vec<String>,
}

/// Kind of ledger transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    /// New credits issued
    Mint,
    /// Ownership change
    Transfer,
    /// Credits taken out of circulation
    Retire,
}

string_enum!(TransactionKind, "transaction kind", {
    Mint => "mint",
    Transfer => "transfer",
    Retire => "retire",
});

/// A credit movement on the ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Token id of the credit lot
    pub credit_id: String,
    pub from: String,
    pub to: String,
    pub amount: u64,
    pub timestamp: DateTime<Utc>,
    pub tx_hash: String,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CertificateStatus {
    Active,
    Retired,
}

string_enum!(CertificateStatus, "certificate status", {
    Active => "active",
    Retired => "retired",
});

/// NFT certificate backing an issued credit lot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub project_name: String,
    /// tCO2
    pub quantity: u64,
    pub vintage: String,
    pub issue_date: NaiveDate,
    pub status: CertificateStatus,
    #[serde(default)]
    pub image_url: String,
}

/// Verification state of an MRV report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MrvStatus {
    Pending,
    Verified,
    Disputed,
}

string_enum!(MrvStatus, "MRV status", {
    Pending => "pending",
    Verified => "verified",
    Disputed => "disputed",
});

/// A monitoring, reporting and verification report for one project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MrvReport {
    pub id: String,
    pub project_id: String,
    pub report_date: NaiveDate,
    /// tCO2 claimed by the project
    pub reported_sequestration: f64,
    /// tCO2 accepted by the verifier
    pub verified_sequestration: f64,
    /// tCO2 estimated from satellite and drone data
    pub ai_calculation: f64,
    /// 0-100
    pub trust_score: u8,
    #[serde(default)]
    pub satellite_data: Option<String>,
    #[serde(default)]
    pub drone_data: Vec<String>,
    #[serde(default)]
    pub verifier_notes: String,
    pub status: MrvStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Verification,
    Report,
    Alert,
}

string_enum!(NotificationKind, "notification kind", {
    Verification => "verification",
    Report => "report",
    Alert => "alert",
});

/// An entry in the MRV notification center
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    #[serde(default)]
    pub urgent: bool,
}

/// Role picked in the sign-in modal; decides which dashboard tabs are shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Admin,
    Verifier,
    Community,
    #[default]
    Buyer,
    Researcher,
    Company,
    Farmer,
    Ngo,
}

string_enum!(UserRole, "user role", {
    Admin => "admin",
    Verifier => "verifier",
    Community => "community",
    Buyer => "buyer",
    Researcher => "researcher",
    Company => "company",
    Farmer => "farmer",
    Ngo => "ngo",
});

impl UserRole {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Verifier => "Verifier",
            Self::Community => "Community Member",
            Self::Buyer => "Credit Buyer",
            Self::Researcher => "Researcher",
            Self::Company => "Company",
            Self::Farmer => "Farmer",
            Self::Ngo => "NGO",
        }
    }

    /// Parse a role name, reporting unknown names as [`CatalogError::UnknownRole`]
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        raw.parse()
            .map_err(|_| CatalogError::UnknownRole(raw.to_string()))
    }
}
