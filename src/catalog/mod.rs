pub mod listing;
pub mod loader;

pub use listing::ShoeListing;
pub use loader::{default_catalog, load_catalog};
