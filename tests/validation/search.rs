//! STAC API - Item Search endpoint discovery and baseline response

use crate::common::{MockOptions, MockStac, assert_has_message};
use stac_api_validator::fixtures::{
    INVALID_DATETIMES, INVALID_LIMITS, VALID_BBOXES, VALID_DATETIMES, VALID_LIMITS,
    WRONG_LENGTH_BBOXES, geometries,
};

#[tokio::test]
async fn missing_search_link_aborts_search_only() {
    let mock = MockStac::with_options(MockOptions {
        drop_links: vec!["search"],
        ..Default::default()
    })
    .await;

    let report = mock.validate(true).await;

    assert_eq!(
        report.errors(),
        ["/ : Link[rel=search] should exist when Item Search is implemented"]
    );
    let hits = mock.hits();
    assert!(!hits.iter().any(|p| p == "/search"), "hits: {:?}", hits);
    // Core and Features still ran
    assert!(hits.iter().any(|p| p == "/api"));
    assert!(hits.iter().any(|p| p == "/conformance"));
}

#[tokio::test]
async fn search_must_serve_geojson() {
    let mock = MockStac::with_options(MockOptions {
        search_content_type: "application/json".to_string(),
        ..Default::default()
    })
    .await;

    let report = mock.validate(false).await;

    assert_eq!(report.error_count(), 1, "errors: {:#?}", report.errors());
    assert_has_message(
        report.errors(),
        "should have content-type header 'application/geo+json', actually 'application/json'",
    );
}

#[tokio::test]
async fn geojson_with_charset_is_accepted() {
    let mock = MockStac::with_options(MockOptions {
        search_content_type: "application/geo+json; charset=utf-8".to_string(),
        ..Default::default()
    })
    .await;

    let report = mock.validate(false).await;

    assert!(!report.has_errors(), "errors: {:#?}", report.errors());
}

/// An empty catalog cannot be sampled, which is a warning and not an error
#[tokio::test]
async fn empty_catalog_warns() {
    let mock = MockStac::with_options(MockOptions {
        empty: true,
        ..Default::default()
    })
    .await;

    let report = mock.validate(true).await;

    assert!(!report.has_errors(), "errors: {:#?}", report.errors());
    assert_has_message(report.warnings(), "GET Search with no parameters returned zero results");
    assert_has_message(report.warnings(), "no Item with a datetime");
}

/// The unfiltered sample page is fetched once and shared by every parameter check
#[tokio::test]
async fn sample_page_is_fetched_once() {
    let mock = MockStac::start().await;

    let report = mock.validate(false).await;
    assert!(!report.has_errors(), "errors: {:#?}", report.errors());

    let search_hits = mock.hits().iter().filter(|p| *p == "/search").count();
    let unfiltered = 2; // baseline + sample
    let limits = VALID_LIMITS.len() + INVALID_LIMITS.len();
    let bboxes = VALID_BBOXES.len() + 1 + 1 + WRONG_LENGTH_BBOXES.len();
    let datetimes = 1 + VALID_DATETIMES.len() + INVALID_DATETIMES.len();
    // [a] and [a, b]; the full page is the same as the latter
    let ids = 2;
    // all, then each of c1 and c2; first three is the full set
    let collections = 1 + 2;
    let intersects = geometries().len();
    assert_eq!(
        search_hits,
        unfiltered + limits + bboxes + datetimes + ids + collections + intersects
    );
}

#[tokio::test]
async fn failing_collections_listing_is_an_error() {
    let mock = MockStac::with_options(MockOptions {
        collections_status: 500,
        ..Default::default()
    })
    .await;

    let report = mock.validate(false).await;

    assert_eq!(
        report.errors(),
        [format!(
            "Collections ({}/collections): returned status code 500",
            mock.base_url
        )]
    );
}
