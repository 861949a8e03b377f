// src/domain/product.rs

use chrono::{DateTime, Utc};

/// Raw product data as the card needs it.
///
/// Amounts are in the currency's major unit (dollars, not cents).
/// `sale_price` being present is what marks the item as discounted;
/// nothing here checks that it is lower than `price`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub price: f64,
    pub sale_price: Option<f64>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}
