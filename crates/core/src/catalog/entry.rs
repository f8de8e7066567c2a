//! # Catalog Entries
//!
//! What the view projection and the cart need to know about a record.

use crate::models::{CarbonCredit, CreditStatus, PriceBand, Project, ProjectStatus, ProjectType};
use std::fmt;

/// A record shown in a filterable list view
pub trait CatalogEntry {
    /// Closed status enumeration for this kind of entry
    type Status: Copy + PartialEq + fmt::Debug + 'static;
    /// Closed category enumeration for this kind of entry
    type Category: Copy + PartialEq + fmt::Debug + 'static;

    /// Unique id within the catalog store
    fn id(&self) -> &str;

    fn status(&self) -> Self::Status;

    fn category(&self) -> Self::Category;

    /// Fields matched by the search box
    fn search_fields(&self) -> [&str; 2];

    /// Short label used in the cart
    fn label(&self) -> &str;

    /// Unit price in USD
    fn price(&self) -> f64;
}

impl CatalogEntry for Project {
    type Status = ProjectStatus;
    type Category = ProjectType;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> ProjectStatus {
        self.status
    }

    fn category(&self) -> ProjectType {
        self.project_type
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.location]
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }
}

impl CatalogEntry for CarbonCredit {
    type Status = CreditStatus;
    type Category = PriceBand;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> CreditStatus {
        self.status
    }

    fn category(&self) -> PriceBand {
        PriceBand::of(self.price)
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.token_id, &self.owner]
    }

    fn label(&self) -> &str {
        &self.token_id
    }

    fn price(&self) -> f64 {
        self.price
    }
}
