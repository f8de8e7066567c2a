//! # Cart
//!
//! Selection state of the marketplace screen: the credit lots picked for a
//! notional purchase. Ids are unique and keep insertion order.

use crate::catalog::CatalogEntry;
use serde::Serialize;

/// Ordered, duplicate-free selection of catalog entries
#[derive(Debug, Clone)]
pub struct Cart<E> {
    items: Vec<E>,
}

impl<E> Default for Cart<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// One line of the cart summary
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    pub id: String,
    pub label: String,
    pub price: f64,
}

/// Serialisable view of the cart for display
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    pub count: usize,
    pub total: f64,
}

impl<E: CatalogEntry> Cart<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless an entry with the same id is already selected.
    ///
    /// Returns whether the cart changed.
    pub fn add(&mut self, entry: E) -> bool {
        if self.contains(entry.id()) {
            tracing::debug!(id = %entry.id(), "Already in cart");
            return false;
        }
        tracing::debug!(id = %entry.id(), price = entry.price(), "Added to cart");
        self.items.push(entry);
        true
    }

    /// Drop the entry with `id` if present. Returns whether the cart changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if removed {
            tracing::debug!(id = %id, "Removed from cart");
        }
        removed
    }

    /// Whether an entry with `id` is selected ("Added to Cart" state)
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Sum of the selected entries' prices; 0 when empty
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .fold(0.0, |total, item| total + item.price())
    }

    /// Selected entries in insertion order
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Selected ids in insertion order
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self
                .items
                .iter()
                .map(|item| CartLine {
                    id: item.id().to_string(),
                    label: item.label().to_string(),
                    price: item.price(),
                })
                .collect(),
            count: self.items.len(),
            total: self.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, MockCatalog};
    use crate::models::CarbonCredit;

    fn credit(id: &str, price: f64) -> CarbonCredit {
        let mut credit = MockCatalog::new().credits().unwrap().remove(0);
        credit.id = id.to_string();
        credit.token_id = format!("BC-{id}");
        credit.price = price;
        credit
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart: Cart<CarbonCredit> = Cart::new();
        assert_eq!(cart.total(), 0.0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_add_remove_scenario() {
        let mut cart = Cart::new();
        cart.add(credit("1", 25.0));
        cart.add(credit("2", 30.0));
        assert_eq!(cart.total(), 55.0);

        cart.remove("1");
        assert_eq!(cart.total(), 30.0);
        assert_eq!(cart.ids(), vec!["2"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut once = Cart::new();
        assert!(once.add(credit("1", 25.0)));

        let mut twice = Cart::new();
        twice.add(credit("1", 25.0));
        assert!(!twice.add(credit("1", 25.0)));

        assert_eq!(once.ids(), twice.ids());
        assert_eq!(once.total(), twice.total());
    }

    #[test]
    fn test_duplicate_id_keeps_first_entry() {
        let mut cart = Cart::new();
        cart.add(credit("1", 25.0));
        cart.add(credit("1", 99.0));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 25.0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(credit("1", 25.0));
        cart.add(credit("2", 30.0));
        assert!(!cart.remove("7"));
        assert_eq!(cart.ids(), vec!["1", "2"]);
        assert_eq!(cart.total(), 55.0);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut cart = Cart::new();
        for id in ["3", "1", "2"] {
            cart.add(credit(id, 10.0));
        }
        cart.add(credit("1", 10.0));
        assert_eq!(cart.ids(), vec!["3", "1", "2"]);
        assert!(cart.contains("2"));
        assert!(!cart.contains("4"));
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::new();
        cart.add(credit("1", 25.0));
        cart.add(credit("2", 30.0));
        let summary = cart.summary();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total, 55.0);
        assert_eq!(summary.items[1].label, "BC-2");

        cart.clear();
        assert_eq!(cart.summary().total, 0.0);
    }
}
