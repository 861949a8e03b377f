// src/domain/variant.rs

use chrono::{DateTime, Utc};

use crate::domain::freshness::is_recent_release;
use crate::domain::price::format_price;
use crate::domain::product::Product;
use crate::errors::DomainError;

/// Display category of a shoe card. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }
}

/// Everything a renderer needs to draw the price/badge part of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDecision {
    pub variant: Variant,
    pub display_price: String,
    /// Only set for `Variant::OnSale`.
    pub display_sale_price: Option<String>,
    pub color_label: String,
}

/// Classify a product and derive its display fields.
///
/// Precedence is fixed: a sale price wins over freshness, so a shoe that is
/// both new and discounted shows up as `OnSale`.
pub fn resolve_variant(
    product: &Product,
    now: DateTime<Utc>,
) -> Result<VariantDecision, DomainError> {
    let variant = if product.sale_price.is_some() {
        Variant::OnSale
    } else if is_recent_release(product.release_date, now) {
        Variant::NewRelease
    } else {
        Variant::Default
    };

    let display_price = format_price(product.price)?;
    let display_sale_price = match (variant, product.sale_price) {
        (Variant::OnSale, Some(sale)) => Some(format_price(sale)?),
        _ => None,
    };

    Ok(VariantDecision {
        variant,
        display_price,
        display_sale_price,
        color_label: pluralize("Color", product.num_of_colors),
    })
}

/// `1 Color`, `0 Colors`, `3 Colors`.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
