// src/tests/router_tests/storefront_tests.rs

use crate::catalog::default_catalog;
use crate::router::handle;
use crate::tests::utils::{body_string, listing, request, test_now};
use http::Method;

#[test]
fn storefront_renders_all_three_variants() {
    let listings = vec![
        // on sale and fresh: sale wins
        listing("fresh-sale", 120.0, Some(100.0), "2024-06-05", 2),
        listing("fresh", 90.0, None, "2024-06-10", 1),
        listing("boundary", 95.0, None, "2024-05-16T12:00:00Z", 3),
        listing("old", 75.0, None, "2024-05-06", 0),
    ];

    let resp = handle(request(Method::GET, "/"), &listings, test_now()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);

    assert_eq!(body.matches(">Sale</div>").count(), 1);
    assert_eq!(body.matches("Just Released").count(), 2);
    assert!(body.contains("$120.00"));
    assert!(body.contains("$100.00"));
    assert!(body.contains("1 Color<"));
    assert!(body.contains("0 Colors"));
    assert!(body.contains("3 Colors"));
    assert!(body.contains(r#"href="/shoe/old""#));
}

#[test]
fn storefront_includes_header_navigation() {
    let resp = handle(request(Method::GET, "/"), &[], test_now()).unwrap();
    let body = body_string(resp);

    for href in ["/sale", "/new", "/men", "/women", "/kids", "/collections"] {
        assert!(body.contains(&format!("href=\"{href}\"")), "missing nav link {href}");
    }
}

#[test]
fn bundled_catalog_serves() {
    let listings = default_catalog().unwrap();
    let resp = handle(request(Method::GET, "/"), &listings, test_now()).unwrap();
    let body = body_string(resp);

    for l in &listings {
        assert!(body.contains(&l.href()), "card for {} missing", l.slug);
    }
}

#[test]
fn same_clock_renders_identical_pages() {
    let listings = vec![listing("a", 50.0, None, "2024-06-01", 1)];

    let first = body_string(handle(request(Method::GET, "/"), &listings, test_now()).unwrap());
    let second = body_string(handle(request(Method::GET, "/"), &listings, test_now()).unwrap());
    assert_eq!(first, second);
}
