//! STAC API - Item Search: endpoint discovery and the parameter battery.
//!
//! Every parameter validator goes through [`SearchContext::search`], so a
//! parameter is serialized the same way for every check: a string in the GET
//! query, a native JSON value in the POST body.

pub mod bbox;
pub mod collections;
pub mod datetime;
pub mod ids;
pub mod intersects;
pub mod limit;

use serde_json::{Map, Value};
use tokio::sync::OnceCell;
use tracing::info;

use crate::client::{Probe, StacClient, Transport};
use crate::error::ValidatorResult;
use crate::report::ValidationReport;
use crate::stac::{ConformanceClass, LandingDocument, media_type, rel};

/// Size of the unfiltered page sampled for limits, ids and datetimes
const SAMPLE_LIMIT: &str = "10";

/// One search parameter in both of its serializations
#[derive(Debug, Clone)]
pub struct Param {
    pub name: &'static str,
    pub query: String,
    pub body: Value,
}

impl Param {
    pub fn new(name: &'static str, query: impl Into<String>, body: Value) -> Self {
        Self {
            name,
            query: query.into(),
            body,
        }
    }

    /// How the parameter appears in messages for the given transport
    pub fn describe(&self, transport: Transport) -> String {
        match transport {
            Transport::Get => format!("{}={}", self.name, self.query),
            Transport::Post => format!("{}:{}", self.name, self.body),
        }
    }
}

/// What the unfiltered sample page says about one feature
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledItem {
    pub id: Option<String>,
    pub datetime: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SamplePage {
    pub items: Vec<SampledItem>,
}

impl SamplePage {
    fn from_features(features: &[Value]) -> Self {
        let items = features
            .iter()
            .map(|feature| SampledItem {
                id: str_field(feature, "id"),
                datetime: feature
                    .get("properties")
                    .and_then(|p| str_field(p, "datetime")),
            })
            .collect();
        Self { items }
    }

    pub fn ids(&self) -> Vec<String> {
        self.items.iter().filter_map(|i| i.id.clone()).collect()
    }
}

fn str_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}

/// Endpoints discovered for one search run, plus the lazily sampled page
pub struct SearchContext<'a> {
    pub client: &'a StacClient,
    pub search_url: String,
    pub collections_url: String,
    pub post: bool,
    sample: OnceCell<Result<SamplePage, String>>,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        client: &'a StacClient,
        search_url: impl Into<String>,
        collections_url: impl Into<String>,
        post: bool,
    ) -> Self {
        Self {
            client,
            search_url: search_url.into(),
            collections_url: collections_url.into(),
            post,
            sample: OnceCell::new(),
        }
    }

    pub fn transports(&self) -> &'static [Transport] {
        Transport::enabled(self.post)
    }

    pub async fn search(&self, transport: Transport, param: &Param) -> ValidatorResult<Probe> {
        match transport {
            Transport::Get => {
                self.client
                    .get_with_query(&self.search_url, &[(param.name, param.query.clone())])
                    .await
            }
            Transport::Post => {
                let mut body = Map::new();
                body.insert(param.name.to_string(), param.body.clone());
                self.client
                    .post_json(&self.search_url, &Value::Object(body))
                    .await
            }
        }
    }

    /// The first page of an unfiltered search, fetched once per run
    pub async fn sample(&self) -> &Result<SamplePage, String> {
        self.sample.get_or_init(|| self.fetch_sample()).await
    }

    async fn fetch_sample(&self) -> Result<SamplePage, String> {
        let probe = self
            .client
            .get_with_query(&self.search_url, &[("limit", SAMPLE_LIMIT.to_string())])
            .await
            .map_err(|e| format!("GET Search with no parameters failed: {}", e))?;

        if !probe.is_ok() {
            return Err(format!(
                "GET Search with no parameters returned status code {}",
                probe.status_code()
            ));
        }

        let features = probe.features().ok_or_else(|| {
            "GET Search with no parameters did not return a 'features' array".to_string()
        })?;
        Ok(SamplePage::from_features(&features))
    }
}

/// Issue the request and require 200 with a JSON body
pub async fn expect_results(
    ctx: &SearchContext<'_>,
    report: &mut ValidationReport,
    transport: Transport,
    param: &Param,
) -> Option<Value> {
    let desc = param.describe(transport);
    let probe = match ctx.search(transport, param).await {
        Ok(probe) => probe,
        Err(e) => {
            tracing::warn!(%transport, param = %desc, error = %e, "search request failed");
            report.error(format!("{} Search with {} failed: {}", transport, desc, e));
            return None;
        }
    };

    if !probe.is_ok() {
        report.error(format!(
            "{} Search with {} returned status code {}",
            transport,
            desc,
            probe.status_code()
        ));
        return None;
    }

    match probe.json() {
        Some(body) => Some(body),
        None => {
            report.error(format!(
                "{} Search with {} returned non-json response: {}",
                transport,
                desc,
                probe.text()
            ));
            None
        }
    }
}

/// Issue the request and require exactly 400
pub async fn expect_rejected(
    ctx: &SearchContext<'_>,
    report: &mut ValidationReport,
    transport: Transport,
    param: &Param,
    note: &str,
) {
    let desc = param.describe(transport);
    match ctx.search(transport, param).await {
        Ok(probe) => report.check(
            probe.status_code() == 400,
            format!(
                "{} Search with {}{} returned status code {}, instead of 400",
                transport,
                desc,
                note,
                probe.status_code()
            ),
        ),
        Err(e) => {
            tracing::warn!(%transport, param = %desc, error = %e, "search request failed");
            report.error(format!("{} Search with {} failed: {}", transport, desc, e));
        }
    }
}

/// The `features` array of a search response body
pub fn features_of(body: &Value) -> Option<&Vec<Value>> {
    body.get("features").and_then(Value::as_array)
}

pub async fn validate_search(
    client: &StacClient,
    landing: &LandingDocument,
    post: bool,
    report: &mut ValidationReport,
) {
    info!("{} conformance class found.", ConformanceClass::Search);

    let Some(search) = landing.link(rel::SEARCH) else {
        report.error("/ : Link[rel=search] should exist when Item Search is implemented");
        return;
    };
    let search_url = landing.resolve(search);

    let collections_url = match landing.link(rel::DATA) {
        Some(data) => landing.resolve(data),
        None => {
            let root = landing
                .link(rel::SELF)
                .map(|link| landing.resolve(link))
                .unwrap_or_else(|| landing.url.clone());
            format!("{}/collections", root.trim_end_matches('/'))
        }
    };

    let ctx = SearchContext::new(client, search_url, collections_url, post);
    validate_baseline(&ctx, report).await;
    if let Err(e) = ctx.sample().await {
        report.error(e.clone());
    }

    limit::validate_search_limit(&ctx, report).await;
    bbox::validate_search_bbox(&ctx, report).await;
    datetime::validate_search_datetime(&ctx, report).await;
    ids::validate_search_ids(&ctx, report).await;
    collections::validate_search_collections(&ctx, report).await;
    intersects::validate_search_intersects(&ctx, report).await;
}

async fn validate_baseline(ctx: &SearchContext<'_>, report: &mut ValidationReport) {
    let url = &ctx.search_url;
    let probe = match ctx.client.get(url).await {
        Ok(probe) => probe,
        Err(e) => {
            tracing::warn!(%url, error = %e, "search request failed");
            report.error(format!("Search ({}): request failed: {}", url, e));
            return;
        }
    };

    let geojson = probe.content_type.as_deref().is_some_and(|ct| {
        let ct = ct.to_ascii_lowercase();
        ct == media_type::GEOJSON || ct == media_type::GEOJSON_UTF8
    });
    report.check(
        geojson,
        format!(
            "Search ({}): should have content-type header '{}', actually '{}'",
            url,
            media_type::GEOJSON,
            probe.content_type_or_none()
        ),
    );
    report.check(
        probe.is_ok(),
        format!(
            "Search ({}): should return 200, actually {}",
            url,
            probe.status_code()
        ),
    );
    report.check(
        probe.json().is_some(),
        format!(
            "Search ({}): should return JSON, instead got non-JSON text",
            url
        ),
    );
}
