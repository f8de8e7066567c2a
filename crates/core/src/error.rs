//! # Catalog Errors
//!
//! Failures at the edges of the core: loading a data source and resolving ids
//! typed in by the user. Projection and cart operations never fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data source file could not be read
    #[error("failed to read catalog file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data source file is not a valid catalog document
    #[error("failed to parse catalog file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An id that does not exist in the catalog store
    #[error("no catalog entry with id '{0}'")]
    UnknownEntry(String),

    /// A role name outside the known set
    #[error("unknown user role '{0}'")]
    UnknownRole(String),

    /// A selector value outside the closed set for its field
    #[error("unknown {field} value '{value}'")]
    UnknownValue { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
