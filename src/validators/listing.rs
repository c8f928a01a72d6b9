use serde_json::Value;

use crate::client::StacClient;
use crate::report::ValidationReport;

/// The `collections` array of the collections listing at `url`.
///
/// A request failure, a non-200 status or a body without a `collections`
/// array records one error and yields `None`.
pub async fn fetch_collections(
    client: &StacClient,
    url: &str,
    report: &mut ValidationReport,
) -> Option<Vec<Value>> {
    let probe = match client.get(url).await {
        Ok(probe) => probe,
        Err(e) => {
            tracing::warn!(%url, error = %e, "collections request failed");
            report.error(format!("Collections ({}): request failed: {}", url, e));
            return None;
        }
    };

    if !probe.is_ok() {
        report.error(format!(
            "Collections ({}): returned status code {}",
            url,
            probe.status_code()
        ));
        return None;
    }

    let collections = probe
        .json()
        .and_then(|body| body.get("collections").and_then(Value::as_array).cloned());
    if collections.is_none() {
        report.error(format!(
            "Collections ({}): should return JSON with a 'collections' array",
            url
        ));
    }
    collections
}
