//! STAC API - Core: landing page links.

use tracing::info;

use crate::client::StacClient;
use crate::report::ValidationReport;
use crate::stac::{ConformanceClass, LandingDocument, Link, media_type, rel};

pub async fn validate_core(
    client: &StacClient,
    landing: &LandingDocument,
    report: &mut ValidationReport,
) {
    info!("{} conformance class found.", ConformanceClass::Core);

    for relation in [rel::ROOT, rel::SELF] {
        match landing.link(relation) {
            Some(link) => report.check(
                link.has_type(media_type::JSON),
                format!(
                    "/ : Link[rel={}] should have media type '{}', actually '{}'",
                    relation,
                    media_type::JSON,
                    link.type_or_none()
                ),
            ),
            None => report.warn(format!("/ : Link[rel={}] should exist", relation)),
        }
    }

    match landing.link(rel::SERVICE_DESC) {
        Some(link) => validate_service_desc(client, landing, link, report).await,
        None => report.warn("/ : Link[rel=service-desc] should exist"),
    }

    match landing.link(rel::SERVICE_DOC) {
        Some(link) => validate_service_doc(client, landing, link, report).await,
        None => report.warn("/ : Link[rel=service-doc] should exist"),
    }
}

async fn validate_service_desc(
    client: &StacClient,
    landing: &LandingDocument,
    link: &Link,
    report: &mut ValidationReport,
) {
    report.check(
        link.has_type(media_type::OPENAPI_JSON),
        format!(
            "/ : Link[rel=service-desc] should have media type '{}', actually '{}'",
            media_type::OPENAPI_JSON,
            link.type_or_none()
        ),
    );

    let url = landing.resolve(link);
    let probe = match client.get(&url).await {
        Ok(probe) => probe,
        Err(e) => {
            tracing::warn!(%url, error = %e, "service-desc request failed");
            report.error(format!("service-desc ({}): request failed: {}", url, e));
            return;
        }
    };

    report.check(
        probe.is_ok(),
        format!(
            "/ : Link[rel=service-desc] must return 200, actually {}",
            probe.status_code()
        ),
    );
    report.check(
        probe.content_type.as_deref() == Some(media_type::OPENAPI_JSON),
        format!(
            "service-desc ({}): should have content-type header '{}', actually '{}'",
            url,
            media_type::OPENAPI_JSON,
            probe.content_type_or_none()
        ),
    );
    report.check(
        probe.json().is_some(),
        format!(
            "service-desc ({}): should return JSON, instead got non-JSON text",
            url
        ),
    );
}

async fn validate_service_doc(
    client: &StacClient,
    landing: &LandingDocument,
    link: &Link,
    report: &mut ValidationReport,
) {
    report.check(
        link.has_type(media_type::HTML),
        format!(
            "/ : Link[rel=service-doc] should have media type '{}', actually '{}'",
            media_type::HTML,
            link.type_or_none()
        ),
    );

    let url = landing.resolve(link);
    let probe = match client.get(&url).await {
        Ok(probe) => probe,
        Err(e) => {
            tracing::warn!(%url, error = %e, "service-doc request failed");
            report.error(format!("service-doc ({}): request failed: {}", url, e));
            return;
        }
    };

    report.check(
        probe.is_ok(),
        format!(
            "/ : Link[rel=service-doc] must return 200, actually {}",
            probe.status_code()
        ),
    );
    report.check(
        probe
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with(media_type::HTML)),
        format!(
            "service-doc ({}): should have content-type header '{}', actually '{}'",
            url,
            media_type::HTML,
            probe.content_type_or_none()
        ),
    );
}
