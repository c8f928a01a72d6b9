//! STAC API - Features: conformance and collections links.

use std::collections::BTreeSet;
use tracing::info;

use crate::client::StacClient;
use crate::report::ValidationReport;
use crate::stac::{ConformanceClass, LandingDocument, media_type, rel};

pub async fn validate_features(
    client: &StacClient,
    landing: &LandingDocument,
    report: &mut ValidationReport,
) {
    info!("{} conformance class found.", ConformanceClass::Features);

    let conformance = landing.link(rel::CONFORMANCE);
    report.check(
        conformance.is_some_and(|link| link.href.ends_with("/conformance")),
        "/ : Link[rel=conformance] should href /conformance",
    );

    if let Some(link) = conformance {
        let url = landing.resolve(link);
        match client.get(&url).await {
            Ok(probe) => {
                report.check(
                    probe.is_ok(),
                    format!(
                        "conformance ({}): must return 200, actually {}",
                        url,
                        probe.status_code()
                    ),
                );
                report.check(
                    probe.content_type.as_deref() == Some(media_type::JSON),
                    format!(
                        "conformance ({}): should have content-type header '{}', actually '{}'",
                        url,
                        media_type::JSON,
                        probe.content_type_or_none()
                    ),
                );

                match probe.json() {
                    Some(body) => {
                        let served: BTreeSet<&str> = body
                            .get("conformsTo")
                            .and_then(|v| v.as_array())
                            .map(|uris| uris.iter().filter_map(|u| u.as_str()).collect())
                            .unwrap_or_default();
                        let advertised: BTreeSet<&str> =
                            landing.conforms_to.iter().map(String::as_str).collect();

                        report.check_warn(
                            served == advertised,
                            "Landing Page conformsTo and /conformance conformsTo should be the same",
                        );
                    }
                    None => report.error(format!(
                        "conformance ({}): should return JSON, instead got non-JSON text",
                        url
                    )),
                }
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "conformance request failed");
                report.error(format!("conformance ({}): request failed: {}", url, e));
            }
        }
    }

    report.check(
        landing.link(rel::DATA).is_some(),
        "/ : Link[rel=data] should href /collections",
    );

    report.check_warn(
        landing.link(rel::COLLECTIONS).is_none(),
        "/ : Link[rel=collections] is a non-standard relation. Use Link[rel=data] instead",
    );
}
