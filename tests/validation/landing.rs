//! Landing page structure and conformance class gating

use crate::common::{MockOptions, MockStac, assert_has_message};
use stac_api_validator::stac::conformance::classes;

/// Missing `conformsTo` and `links` are two structural errors and stop the run
#[tokio::test]
async fn missing_conforms_to_and_links() {
    let mock = MockStac::with_options(MockOptions {
        conforms_to: None,
        omit_links: true,
        ..Default::default()
    })
    .await;

    let report = mock.validate(false).await;

    assert_eq!(report.error_count(), 2, "errors: {:#?}", report.errors());
    assert_has_message(report.errors(), "'conformsTo' field must be defined and non-empty");
    assert_has_message(report.errors(), "'links' field must be defined and non-empty");
    assert_eq!(mock.hits(), vec!["/"], "no capability check may run");
}

/// A landing page without `conformsTo` yields exactly one error
#[tokio::test]
async fn missing_conforms_to_only() {
    let mock = MockStac::with_options(MockOptions {
        conforms_to: None,
        ..Default::default()
    })
    .await;

    let report = mock.validate(true).await;

    assert_eq!(
        report.errors(),
        ["/ : 'conformsTo' field must be defined and non-empty. This field is required as of 1.0.0."]
    );
    assert_eq!(mock.hits(), vec!["/"]);
}

#[tokio::test]
async fn landing_page_error_status_is_fatal() {
    let mock = MockStac::with_options(MockOptions {
        landing_status: 503,
        ..Default::default()
    })
    .await;

    let report = mock.validate(false).await;

    assert_eq!(report.error_count(), 1);
    assert_has_message(report.errors(), "returned status code 503");
    assert_eq!(mock.hits(), vec!["/"]);
}

#[tokio::test]
async fn unreachable_root_is_fatal() {
    let report = stac_api_validator::validate_api("http://127.0.0.1:1/", false)
        .await
        .expect("Failed to build validator");

    assert_eq!(report.error_count(), 1);
    assert_has_message(report.errors(), "could not be fetched");
}

#[tokio::test]
async fn no_recognized_conformance_class() {
    let mock = MockStac::with_options(MockOptions {
        conforms_to: Some(vec![classes::FEATURES_CORE.to_string()]),
        ..Default::default()
    })
    .await;

    let report = mock.validate(false).await;

    assert_eq!(
        report.errors(),
        ["/ : 'conformsTo' must contain at least one STAC API conformance class."]
    );
    assert_eq!(mock.hits(), vec!["/"]);
}

/// Core is mandatory once any STAC API class is advertised
#[tokio::test]
async fn core_class_is_required() {
    let mock = MockStac::with_options(MockOptions {
        conforms_to: Some(vec![
            classes::STAC_FEATURES.to_string(),
            classes::STAC_ITEM_SEARCH.to_string(),
        ]),
        ..Default::default()
    })
    .await;

    let report = mock.validate(false).await;

    assert_eq!(
        report.errors(),
        ["/ : 'conformsTo' must contain STAC API - Core conformance class."]
    );
    assert_eq!(mock.hits(), vec!["/"]);
}

#[tokio::test]
async fn deprecated_req_namespace_warns() {
    let mut conforms_to = MockOptions::default().conforms_to.unwrap_or_default();
    conforms_to.push("http://www.opengis.net/spec/ogcapi-features-1/1.0/req/geojson".to_string());
    let mock = MockStac::with_options(MockOptions {
        conforms_to: Some(conforms_to),
        ..Default::default()
    })
    .await;

    let report = mock.validate(false).await;

    assert!(!report.has_errors(), "errors: {:#?}", report.errors());
    assert_has_message(report.warnings(), "using 'req' instead of 'conf'");
}

/// Only advertised capabilities are exercised
#[tokio::test]
async fn core_only_service_skips_features_and_search() {
    let mock = MockStac::with_options(MockOptions {
        conforms_to: Some(vec![classes::STAC_CORE.to_string()]),
        ..Default::default()
    })
    .await;

    let report = mock.validate(true).await;

    assert!(!report.has_errors(), "errors: {:#?}", report.errors());
    let hits = mock.hits();
    assert!(!hits.iter().any(|p| p == "/search"), "hits: {:?}", hits);
    assert!(!hits.iter().any(|p| p == "/conformance"), "hits: {:?}", hits);
}
