//! Full runs against a conformant service

use serde_json::Value;

use crate::common::{MockOptions, MockStac, assert_has_message};
use stac_api_validator::{
    Validator, ValidatorConfig,
    schema::{SchemaValidator, SchemaViolation},
    stac::conformance::classes,
};

/// Core + Features + Search, two items `a` and `b`: nothing to report
#[tokio::test]
async fn conformant_service_passes() {
    let mock = MockStac::start().await;

    let report = mock.validate(false).await;

    assert!(report.errors().is_empty(), "errors: {:#?}", report.errors());
    assert!(report.warnings().is_empty(), "warnings: {:#?}", report.warnings());
}

#[tokio::test]
async fn conformant_service_passes_with_post() {
    let mock = MockStac::start().await;

    let (warnings, errors) = mock.validate(true).await.into_parts();

    assert!(errors.is_empty(), "errors: {:#?}", errors);
    assert!(warnings.is_empty(), "warnings: {:#?}", warnings);
}

/// The schema pass covers every child collection
#[tokio::test]
async fn schema_pass_reports_invalid_collections() {
    let mock = MockStac::with_options(MockOptions {
        omit_collection_license: true,
        ..Default::default()
    })
    .await;

    let report = mock.validate(false).await;

    assert_eq!(
        report.errors(),
        [
            "Collection 'c1': missing required field 'license'",
            "Collection 'c2': missing required field 'license'",
        ]
    );
}

/// The schema pass only runs once the capability checks are clean
#[tokio::test]
async fn schema_pass_skipped_after_errors() {
    let mock = MockStac::with_options(MockOptions {
        omit_collection_license: true,
        accept_inverted_bbox: true,
        ..Default::default()
    })
    .await;

    let report = mock.validate(false).await;

    assert_eq!(report.error_count(), 1, "errors: {:#?}", report.errors());
    assert_has_message(report.errors(), "bbox=100.0,1.0,105.0,0.0");
}

struct RejectAll;

impl SchemaValidator for RejectAll {
    fn validate_catalog(&self, _document: &Value) -> Result<(), SchemaViolation> {
        Err(SchemaViolation {
            document: "Catalog".to_string(),
            reason: "rejected".to_string(),
        })
    }

    fn validate_collection(&self, _document: &Value) -> Result<(), SchemaViolation> {
        Ok(())
    }
}

#[tokio::test]
async fn custom_schema_validator() {
    let mock = MockStac::start().await;
    let validator = Validator::new(&ValidatorConfig::new(mock.root_url()))
        .expect("Failed to build validator")
        .with_schema_validator(RejectAll);

    let report = validator.run(&mock.root_url(), false).await;

    assert_eq!(report.errors(), ["Catalog: rejected"]);
}

/// Each run owns its report
#[tokio::test]
async fn validator_reuse_keeps_reports_separate() {
    let good = MockStac::start().await;
    let bad = MockStac::with_options(MockOptions {
        conforms_to: None,
        ..Default::default()
    })
    .await;
    let validator = Validator::new(&ValidatorConfig::new(good.root_url()))
        .expect("Failed to build validator");

    let bad_report = validator.run(&bad.root_url(), false).await;
    let good_report = validator.run(&good.root_url(), false).await;

    assert_eq!(bad_report.error_count(), 1);
    assert!(!good_report.has_errors(), "errors: {:#?}", good_report.errors());
}

/// A collections listing the schema pass cannot read is an error, not an
/// empty catalog
#[tokio::test]
async fn schema_pass_reports_failing_collections_listing() {
    let mock = MockStac::with_options(MockOptions {
        conforms_to: Some(vec![classes::STAC_CORE.to_string()]),
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
