use maud::{html, Markup};

use crate::catalog::ShoeListing;
use crate::domain::{Variant, VariantDecision};
use crate::templates::theme::COLORS;

/// Badge text and background for a variant; `Default` has none.
fn tag(variant: Variant) -> Option<(&'static str, &'static str)> {
    match variant {
        Variant::NewRelease => Some(("Just Released", COLORS.secondary)),
        Variant::OnSale => Some(("Sale", COLORS.primary)),
        Variant::Default => None,
    }
}

pub fn shoe_card(listing: &ShoeListing, decision: &VariantDecision) -> Markup {
    let on_sale = decision.variant == Variant::OnSale;

    html! {
        a class="shoe-link" href=(listing.href()) {
            article class={ "shoe-card " (decision.variant.as_str()) } {
                div class="shoe-image-wrapper" {
                    @if let Some((label, background)) = tag(decision.variant) {
                        div class="shoe-tag" style={ "--background-color: " (background) } {
                            (label)
                        }
                    }
                    img class="shoe-image" alt="" src=(listing.image_src);
                }
                div class="shoe-row" {
                    h3 class="shoe-name" { (listing.name) }
                    span.shoe-price.cancelled[on_sale] { (decision.display_price) }
                }
                div class="shoe-row" {
                    p class="shoe-colors" { (decision.color_label) }
                    @if let Some(sale) = &decision.display_sale_price {
                        span class="shoe-sale-price" { (sale) }
                    }
                }
            }
        }
    }
}
