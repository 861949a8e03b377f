pub mod error;
pub mod header;
pub mod shoe_card;

pub use error::error_page;
pub use header::site_header;
pub use shoe_card::shoe_card;
