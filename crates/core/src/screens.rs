//! # Screens
//!
//! Screen-local state for the registry and the marketplace. A screen is
//! created ("mounted") from a catalog source, owns its filter and selection
//! state, and drops them when it goes away. Nothing here is shared between
//! screens.

use crate::cart::Cart;
use crate::catalog::{project, CatalogEntry, CatalogSource, FilterState, Selector};
use crate::error::{CatalogError, Result};
use crate::models::{CarbonCredit, CreditStatus, PriceBand, Project, ProjectStatus, ProjectType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An immutable catalog store paired with the filter state that narrows it
#[derive(Debug, Clone)]
pub struct CatalogView<E: CatalogEntry> {
    entries: Vec<E>,
    filter: FilterState<E::Status, E::Category>,
}

impl<E: CatalogEntry> CatalogView<E> {
    /// Mount over `entries` with an empty filter
    pub fn new(entries: Vec<E>) -> Self {
        Self {
            entries,
            filter: FilterState::default(),
        }
    }

    /// The whole store, in source order
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn filter(&self) -> &FilterState<E::Status, E::Category> {
        &self.filter
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    pub fn set_status(&mut self, status: Selector<E::Status>) {
        self.filter.status = status;
    }

    pub fn set_category(&mut self, category: Selector<E::Category>) {
        self.filter.category = category;
    }

    /// Visible entries for the current filter, in store order
    pub fn visible(&self) -> impl Iterator<Item = &E> + '_ {
        project(&self.entries, &self.filter)
    }

    /// Look up an entry by id, ignoring the filter
    pub fn get(&self, id: &str) -> Option<&E> {
        self.entries.iter().find(|entry| entry.id() == id)
    }
}

impl<E> CatalogView<E>
where
    E: CatalogEntry,
    E::Status: FromStr,
    E::Category: FromStr,
{
    /// Set the status selector from a raw select box value
    pub fn select_status(&mut self, raw: &str) {
        self.set_status(Selector::parse(raw));
    }

    /// Set the category selector from a raw select box value
    pub fn select_category(&mut self, raw: &str) {
        self.set_category(Selector::parse(raw));
    }
}

/// How the registry lays out its projects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Grid,
    /// Placeholder until the GIS map lands
    Map,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Map => "map",
        }
    }

    /// Unknown names fall back to the grid
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "map" => Self::Map,
            _ => Self::Grid,
        }
    }
}

/// The registry browser: projects filtered by name/location, status and type
#[derive(Debug, Clone)]
pub struct RegistryScreen {
    view: CatalogView<Project>,
    view_mode: ViewMode,
}

impl RegistryScreen {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            view: CatalogView::new(projects),
            view_mode: ViewMode::default(),
        }
    }

    /// Mount with the projects supplied by `source`
    pub fn mount(source: &dyn CatalogSource) -> Result<Self> {
        let projects = source.projects()?;
        tracing::debug!(count = projects.len(), "Registry mounted");
        Ok(Self::new(projects))
    }

    pub fn view(&self) -> &CatalogView<Project> {
        &self.view
    }

    pub fn filter(&self) -> &FilterState<ProjectStatus, ProjectType> {
        self.view.filter()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.view.set_search(text);
    }

    pub fn select_status(&mut self, raw: &str) {
        self.view.select_status(raw);
    }

    pub fn select_type(&mut self, raw: &str) {
        self.view.select_category(raw);
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn visible(&self) -> impl Iterator<Item = &Project> + '_ {
        self.view.visible()
    }

    /// Project details for the "View Details" action
    pub fn details(&self, id: &str) -> Result<&Project> {
        self.view
            .get(id)
            .ok_or_else(|| CatalogError::UnknownEntry(id.to_string()))
    }
}

/// The marketplace: credit lots, their filter and the shopping cart
#[derive(Debug, Clone)]
pub struct MarketplaceScreen {
    view: CatalogView<CarbonCredit>,
    cart: Cart<CarbonCredit>,
}

impl MarketplaceScreen {
    pub fn new(credits: Vec<CarbonCredit>) -> Self {
        Self {
            view: CatalogView::new(credits),
            cart: Cart::new(),
        }
    }

    /// Mount with the credits supplied by `source` and an empty cart
    pub fn mount(source: &dyn CatalogSource) -> Result<Self> {
        let credits = source.credits()?;
        tracing::debug!(count = credits.len(), "Marketplace mounted");
        Ok(Self::new(credits))
    }

    pub fn view(&self) -> &CatalogView<CarbonCredit> {
        &self.view
    }

    pub fn filter(&self) -> &FilterState<CreditStatus, PriceBand> {
        self.view.filter()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.view.set_search(text);
    }

    pub fn select_status(&mut self, raw: &str) {
        self.view.select_status(raw);
    }

    pub fn select_price_band(&mut self, raw: &str) {
        self.view.select_category(raw);
    }

    pub fn visible(&self) -> impl Iterator<Item = &CarbonCredit> + '_ {
        self.view.visible()
    }

    pub fn cart(&self) -> &Cart<CarbonCredit> {
        &self.cart
    }

    /// Put the credit lot with `id` in the cart.
    ///
    /// Adding a lot that is already there changes nothing. Fails only when no
    /// lot in the store has this id.
    pub fn add_to_cart(&mut self, id: &str) -> Result<bool> {
        let credit = self
            .view
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownEntry(id.to_string()))?;
        Ok(self.cart.add(credit))
    }

    /// Take the lot with `id` out of the cart; absent ids are ignored
    pub fn remove_from_cart(&mut self, id: &str) -> bool {
        self.cart.remove(id)
    }

    /// Label of the add button for the lot with `id`
    pub fn cart_button_label(&self, id: &str) -> &'static str {
        if self.cart.contains(id) {
            "Added to Cart"
        } else {
            "Add to Cart"
        }
    }
}
