mod error_tests;
mod storefront_tests;
