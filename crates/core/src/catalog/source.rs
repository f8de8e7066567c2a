//! # Catalog Sources
//!
//! The external collaborator that supplies records. Records are assumed to be
//! valid already; sources only deserialize them.

use crate::error::{CatalogError, Result};
use crate::models::{CarbonCredit, Certificate, MrvReport, Notification, Project, Transaction};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Read access to every record set the screens render
pub trait CatalogSource {
    fn projects(&self) -> Result<Vec<Project>>;

    fn credits(&self) -> Result<Vec<CarbonCredit>>;

    fn transactions(&self) -> Result<Vec<Transaction>>;

    fn certificates(&self) -> Result<Vec<Certificate>>;

    fn mrv_reports(&self) -> Result<Vec<MrvReport>>;

    fn notifications(&self) -> Result<Vec<Notification>>;
}

/// Every record set in one document. Missing sections are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub credits: Vec<CarbonCredit>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub mrv_reports: Vec<MrvReport>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl CatalogSource for CatalogData {
    fn projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn credits(&self) -> Result<Vec<CarbonCredit>> {
        Ok(self.credits.clone())
    }

    fn transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn certificates(&self) -> Result<Vec<Certificate>> {
        Ok(self.certificates.clone())
    }

    fn mrv_reports(&self) -> Result<Vec<MrvReport>> {
        Ok(self.mrv_reports.clone())
    }

    fn notifications(&self) -> Result<Vec<Notification>> {
        Ok(self.notifications.clone())
    }
}

/// A catalog read from a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
    data: CatalogData,
}

impl JsonCatalog {
    /// Read and parse the document at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| CatalogError::Read {
            path: path.clone(),
            source,
        })?;
        let data: CatalogData =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.clone(),
                source,
            })?;

        tracing::info!(
            path = %path.display(),
            projects = data.projects.len(),
            credits = data.credits.len(),
            "Loaded catalog"
        );

        Ok(Self { path, data })
    }

    /// Where the document was read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalog {
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
