//! # AquaCarbon Core
//!
//! Everything the AquaCarbon screens do besides drawing: the record models,
//! the catalog view projection, the marketplace cart, role-aware navigation,
//! the ledger explorer and the MRV workspace.
//!
//! ## Architecture
//!
//! - `models` - Projects, credits, transactions, certificates, MRV reports, roles
//! - `catalog/` - Catalog entries, filter state, view projection, data sources
//! - `cart` - Duplicate-free selection with total-price aggregation
//! - `screens` - Registry and marketplace screen state
//! - `dashboard` - Tabs per role and overview figures
//! - `explorer` - Ledger history, certificates, audit summary
//! - `mrv` - Reported vs. verified sequestration
//! - `config` - `.aquacarbon/config.json` plus environment overrides
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aquacarbon_core::catalog::MockCatalog;
//! use aquacarbon_core::screens::MarketplaceScreen;
//!
//! let mut market = MarketplaceScreen::mount(&MockCatalog::new())?;
//! market.select_price_band("25-50");
//! market.add_to_cart("2")?;
//! assert_eq!(market.cart().total(), 30.0);
//! ```

#[macro_use]
mod macros;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod explorer;
pub mod models;
pub mod mrv;
pub mod screens;

pub use error::CatalogError;
