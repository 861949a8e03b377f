// src/catalog/listing.rs

use serde::Deserialize;

use crate::domain::{parse_release_date, Product};
use crate::errors::DomainError;

/// One card's worth of catalog data, as it arrives from the JSON feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: f64,
    #[serde(default)]
    pub sale_price: Option<f64>,
    // Kept raw; parsed when the listing becomes a `Product`.
    pub release_date: String,
    pub num_of_colors: u32,
}

impl ShoeListing {
    pub fn to_product(&self) -> Result<Product, DomainError> {
        Ok(Product {
            price: self.price,
            sale_price: self.sale_price,
            release_date: parse_release_date(&self.release_date)?,
            num_of_colors: self.num_of_colors,
        })
    }

    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}
