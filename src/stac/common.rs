use serde::Deserialize;
use url::Url;

/// OGC API Link object
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(rename = "type", default)]
    pub media_type: Option<String>,
}

impl Link {
    /// True if the link declares exactly `expected` as its media type
    pub fn has_type(&self, expected: &str) -> bool {
        self.media_type.as_deref() == Some(expected)
    }

    /// Media type for messages, `None` rendered as such
    pub fn type_or_none(&self) -> &str {
        self.media_type.as_deref().unwrap_or("None")
    }
}

/// Standard link relations
pub mod rel {
    pub const SELF: &str = "self";
    pub const ROOT: &str = "root";
    pub const CONFORMANCE: &str = "conformance";
    pub const DATA: &str = "data";
    pub const SERVICE_DESC: &str = "service-desc";
    pub const SERVICE_DOC: &str = "service-doc";
    pub const SEARCH: &str = "search";
    pub const CHILD: &str = "child";
    /// Non-standard alias of `data` found on older deployments
    pub const COLLECTIONS: &str = "collections";
}

/// Standard media types
pub mod media_type {
    pub const JSON: &str = "application/json";
    pub const GEOJSON: &str = "application/geo+json";
    pub const GEOJSON_UTF8: &str = "application/geo+json; charset=utf-8";
    pub const OPENAPI_JSON: &str = "application/vnd.oai.openapi+json;version=3.0";
    pub const HTML: &str = "text/html";
}

/// First link with the given relation, in document order
pub fn find_link<'a>(links: &'a [Link], relation: &str) -> Option<&'a Link> {
    links.iter().find(|link| link.rel == relation)
}

/// Resolve a link href against the URL of the document that carried it.
///
/// Absolute hrefs are returned as-is; relative ones are joined onto `base`.
/// Falls back to the raw href if either side does not parse.
pub fn resolve_href(base: &str, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return href.to_string();
    }

    Url::parse(base)
        .and_then(|b| b.join(href))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}
