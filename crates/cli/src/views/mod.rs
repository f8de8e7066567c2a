//! # Views
//!
//! One module per dashboard screen. Each builds a serialisable page from the
//! catalog source and knows how to print it as text.

pub mod dashboard;
pub mod explorer;
pub mod marketplace;
pub mod mrv;
pub mod registry;
