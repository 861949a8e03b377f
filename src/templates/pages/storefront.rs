// templates/pages/storefront.rs

use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::catalog::ShoeListing;
use crate::domain::{resolve_variant, VariantDecision};
use crate::errors::DomainError;
use crate::templates::{desktop_layout, shoe_card};

fn resolve(listing: &ShoeListing, now: DateTime<Utc>) -> Result<VariantDecision, DomainError> {
    let product = listing.to_product()?;
    resolve_variant(&product, now)
}

/// Header plus a grid of shoe cards.
///
/// A listing whose data cannot be resolved is left out of the grid rather
/// than failing the whole page.
pub fn storefront_page(listings: &[ShoeListing], now: DateTime<Utc>) -> Markup {
    let cards: Vec<Markup> = listings
        .iter()
        .filter_map(|listing| match resolve(listing, now) {
            Ok(decision) => {
                tracing::debug!(
                    slug = %listing.slug,
                    variant = decision.variant.as_str(),
                    "resolved card"
                );
                Some(shoe_card(listing, &decision))
            }
            Err(err) => {
                tracing::warn!(slug = %listing.slug, error = %err, "skipping shoe card");
                None
            }
        })
        .collect();

    desktop_layout(
        "Sole&Ankle",
        html! {
            section class="shoe-grid" {
                @for card in &cards {
                    (card)
                }
            }
        },
    )
}
