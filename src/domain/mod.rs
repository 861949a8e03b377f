pub mod freshness;
pub mod price;
pub mod product;
pub mod variant;

pub use freshness::parse_release_date;
pub use product::Product;
pub use variant::{resolve_variant, Variant, VariantDecision};
