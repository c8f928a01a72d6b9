use serde::Deserialize;
use serde_json::Value;

use super::common::{Link, find_link, resolve_href};
use super::conformance::AdvertisedClasses;

/// STAC API landing page, as fetched from the root URL
#[derive(Debug, Clone)]
pub struct LandingDocument {
    /// URL the document was fetched from, used to resolve relative hrefs
    pub url: String,
    pub conforms_to: Vec<String>,
    pub links: Vec<Link>,
    /// The document as served, kept for the schema pass
    pub raw: Value,
}

impl LandingDocument {
    /// Build the typed view of a landing page.
    ///
    /// Each field is read on its own. A missing or mistyped field becomes an
    /// empty collection so that the caller can report it; entries that are
    /// not strings or not well-formed links are skipped.
    pub fn from_json(url: impl Into<String>, raw: Value) -> Self {
        let conforms_to = array_field(&raw, "conformsTo")
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();

        let links = array_field(&raw, "links")
            .filter_map(|v| Link::deserialize(v).ok())
            .collect();

        Self {
            url: url.into(),
            conforms_to,
            links,
            raw,
        }
    }

    pub fn link(&self, relation: &str) -> Option<&Link> {
        find_link(&self.links, relation)
    }

    /// Absolute URL of a link's target
    pub fn resolve(&self, link: &Link) -> String {
        resolve_href(&self.url, &link.href)
    }

    pub fn classes(&self) -> AdvertisedClasses {
        AdvertisedClasses::from_uris(&self.conforms_to)
    }
}

fn array_field<'a>(raw: &'a Value, field: &str) -> impl Iterator<Item = &'a Value> {
    raw.get(field)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}
