use crate::catalog::ShoeListing;
use astra::{Body, Request, Response};
use chrono::{DateTime, TimeZone, Utc};
use http::Method;
use std::io::Read;

/// Fixed clock so freshness checks are deterministic.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn listing(
    slug: &str,
    price: f64,
    sale_price: Option<f64>,
    release_date: &str,
    colors: u32,
) -> ShoeListing {
    ShoeListing {
        slug: slug.to_string(),
        name: format!("Shoe {slug}"),
        image_src: format!("/assets/{slug}.png"),
        price,
        sale_price,
        release_date: release_date.to_string(),
        num_of_colors: colors,
    }
}

pub fn request(method: Method, path: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut body_bytes).unwrap();
    String::from_utf8(body_bytes).unwrap()
}
