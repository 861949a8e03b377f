pub mod storefront;

pub use storefront::storefront_page;
