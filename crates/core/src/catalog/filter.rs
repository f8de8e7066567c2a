//! # Filter State and View Projection
//!
//! A screen owns one [`FilterState`]; [`project`] maps the catalog store and
//! that state to the visible entries. Every active predicate must hold (text,
//! status and category are ANDed) and the store's order is kept as is.

use super::entry::CatalogEntry;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A select box value: either "all" or one member of a closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    /// No filtering on this field
    All,
    /// Only entries whose field equals the value
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    /// Whether a field value passes this selector
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Selector<T>
where
    T: FromStr,
{
    /// Parse a raw select box value.
    ///
    /// `"all"`, an empty string, and anything that isn't a member of `T` all
    /// become [`Selector::All`], so a stale or mistyped value widens the view
    /// instead of failing.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Selector::All;
        }
        match trimmed.parse::<T>() {
            Ok(value) => Selector::Only(value),
            Err(_) => {
                tracing::debug!(value = %raw, "Unrecognised filter value, showing all");
                Selector::All
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("all"),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

impl<T: Serialize> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selector::All => serializer.serialize_str("all"),
            Selector::Only(value) => value.serialize(serializer),
        }
    }
}

/// User-editable predicate parameters for one list view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState<S, C> {
    /// Case-insensitive substring searched in the entry's text fields
    pub search_text: String,
    pub status: Selector<S>,
    pub category: Selector<C>,
}

impl<S, C> Default for FilterState<S, C> {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            status: Selector::All,
            category: Selector::All,
        }
    }
}

impl<S, C> FilterState<S, C> {
    /// Set the search text
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Only show entries with this status
    pub fn with_status(mut self, status: S) -> Self {
        self.status = Selector::Only(status);
        self
    }

    /// Only show entries in this category
    pub fn with_category(mut self, category: C) -> Self {
        self.category = Selector::Only(category);
        self
    }

    /// True when no predicate narrows the view
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty()
            && matches!(self.status, Selector::All)
            && matches!(self.category, Selector::All)
    }
}

/// Lazily yield the entries of `entries` that pass every predicate in `filter`,
/// in store order.
pub fn project<'a, E>(
    entries: &'a [E],
    filter: &FilterState<E::Status, E::Category>,
) -> impl Iterator<Item = &'a E> + 'a
where
    E: CatalogEntry,
{
    let needle = filter.search_text.to_lowercase();
    let status = filter.status;
    let category = filter.category;

    entries.iter().filter(move |entry| {
        text_matches(*entry, &needle)
            && status.matches(&entry.status())
            && category.matches(&entry.category())
    })
}

fn text_matches<E: CatalogEntry>(entry: &E, needle: &str) -> bool {
    needle.is_empty()
        || entry
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}
