// src/tests/router_tests/error_tests.rs

use crate::errors::{DomainError, ServerError};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, request, test_now};
use http::Method;

#[test]
fn unknown_path_is_not_found() {
    let Err(err) = handle(request(Method::GET, "/shoe/anything"), &[], test_now()) else {
        panic!("expected an error for an unknown path");
    };
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn post_to_root_is_not_found() {
    let result = handle(request(Method::POST, "/"), &[], test_now());
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn domain_errors_render_as_bad_request() {
    let err = DomainError::invalid("price must not be negative");
    let resp = error_to_response(ServerError::from(err));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("price must not be negative"));
}

#[test]
fn catalog_errors_hide_details() {
    let resp = error_to_response(ServerError::CatalogError("disk on fire".into()));
    assert_eq!(resp.status(), 500);

    let body = body_string(resp);
    assert!(body.contains("Catalog unavailable"));
    assert!(!body.contains("disk on fire"));
}
