//! # Marketplace View
//!
//! Credit lots with search, status and price-band filters, plus the cart.

use anyhow::{Context, Result};
use aquacarbon_core::cart::CartSummary;
use aquacarbon_core::catalog::{CatalogSource, FilterState};
use aquacarbon_core::models::{CarbonCredit, CreditStatus, PriceBand};
use aquacarbon_core::screens::MarketplaceScreen;
use serde::Serialize;

use crate::output::usd;

/// Filter edits and cart actions, applied in order: filters, adds, removes
#[derive(Debug, Default)]
pub struct MarketplaceQuery {
    pub search: String,
    pub status: String,
    pub price: String,
    pub add: Vec<String>,
    pub remove: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(flatten)]
    pub credit: CarbonCredit,
    pub in_cart: bool,
    pub button: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplacePage {
    pub filter: FilterState<CreditStatus, PriceBand>,
    pub total: usize,
    pub credits: Vec<Listing>,
    pub cart: CartSummary,
}

pub fn build(source: &dyn CatalogSource, query: &MarketplaceQuery) -> Result<MarketplacePage> {
    let mut screen = MarketplaceScreen::mount(source)?;
    screen.set_search(query.search.as_str());
    screen.select_status(&query.status);
    screen.select_price_band(&query.price);

    for id in &query.add {
        screen
            .add_to_cart(id)
            .with_context(|| format!("Cannot add credit '{}' to cart", id))?;
    }
    for id in &query.remove {
        screen.remove_from_cart(id);
    }

    let credits = screen
        .visible()
        .map(|credit| Listing {
            credit: credit.clone(),
            in_cart: screen.cart().contains(&credit.id),
            button: screen.cart_button_label(&credit.id),
        })
        .collect();

    Ok(MarketplacePage {
        filter: screen.filter().clone(),
        total: screen.view().entries().len(),
        credits,
        cart: screen.cart().summary(),
    })
}

pub fn render(page: &MarketplacePage) -> String {
    let mut out = String::new();
    out.push_str("Carbon Credit Marketplace\n");
    out.push_str(&format!(
        "Showing {} of {} credit lots (search: \"{}\", status: {}, price: {})\n\n",
        page.credits.len(),
        page.total,
        page.filter.search_text,
        page.filter.status,
        page.filter.category,
    ));

    for listing in &page.credits {
        let c = &listing.credit;
        out.push_str(&format!(
            "  [{}] {}  {}  {} per credit\n      {} credits | vintage {} | {} | {}\n",
            c.id,
            c.token_id,
            c.owner,
            usd(c.price),
            c.quantity,
            c.vintage,
            c.impact_badges.join(", "),
            listing.button,
        ));
    }

    out.push_str(&format!("\nCart ({})\n", page.cart.count));
    if page.cart.items.is_empty() {
        out.push_str("  Your cart is empty\n");
    } else {
        for line in &page.cart.items {
            out.push_str(&format!("  {:<16} {:>8}\n", line.label, usd(line.price)));
        }
        out.push_str(&format!("  {:<16} {:>8}\n", "Total:", usd(page.cart.total)));
    }
    out
}
