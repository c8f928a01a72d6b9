use std::fmt;

/// Conformance class URIs
pub mod classes {
    /// Namespace every recognized STAC API class lives under
    pub const STAC_API_PREFIX: &str = "https://api.stacspec.org/";

    pub const STAC_CORE: &str = "https://api.stacspec.org/v1.0.0/core";
    pub const STAC_FEATURES: &str = "https://api.stacspec.org/v1.0.0/ogcapi-features";
    pub const STAC_ITEM_SEARCH: &str = "https://api.stacspec.org/v1.0.0/item-search";

    // OGC API Features
    pub const FEATURES_CORE: &str = "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/core";
    pub const FEATURES_GEOJSON: &str =
        "http://www.opengis.net/spec/ogcapi-features-1/1.0/conf/geojson";

    /// Requirement-class namespace some servers advertise in place of `conf`
    pub const DEPRECATED_FEATURES_REQ_PREFIX: &str =
        "http://www.opengis.net/spec/ogcapi-features-1/1.0/req/";
}

/// A capability a service declares through one of its `conformsTo` URIs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConformanceClass {
    Core,
    Features,
    Search,
    Unknown(String),
}

impl ConformanceClass {
    /// Classify a single advertised URI.
    ///
    /// A URI belongs to a family when it starts with the STAC API namespace and
    /// the family segment appears after at least one character of version path,
    /// e.g. `https://api.stacspec.org/v1.0.0-rc.2/item-search#sort`.
    pub fn classify(uri: &str) -> Self {
        let Some(rest) = uri.strip_prefix(classes::STAC_API_PREFIX) else {
            return ConformanceClass::Unknown(uri.to_string());
        };

        if has_family_segment(rest, "/core") {
            ConformanceClass::Core
        } else if has_family_segment(rest, "/ogcapi-features") {
            ConformanceClass::Features
        } else if has_family_segment(rest, "/item-search") {
            ConformanceClass::Search
        } else {
            ConformanceClass::Unknown(uri.to_string())
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ConformanceClass::Unknown(_))
    }
}

impl fmt::Display for ConformanceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConformanceClass::Core => write!(f, "STAC API - Core"),
            ConformanceClass::Features => write!(f, "STAC API - Features"),
            ConformanceClass::Search => write!(f, "STAC API - Item Search"),
            ConformanceClass::Unknown(uri) => write!(f, "{}", uri),
        }
    }
}

fn has_family_segment(rest: &str, segment: &str) -> bool {
    rest.match_indices(segment).any(|(idx, _)| idx > 0)
}

/// The classified view of a landing page's `conformsTo` list
#[derive(Debug, Clone, Default)]
pub struct AdvertisedClasses {
    classes: Vec<ConformanceClass>,
}

impl AdvertisedClasses {
    pub fn from_uris<S: AsRef<str>>(uris: &[S]) -> Self {
        Self {
            classes: uris
                .iter()
                .map(|uri| ConformanceClass::classify(uri.as_ref()))
                .collect(),
        }
    }

    pub fn advertises(&self, class: &ConformanceClass) -> bool {
        self.classes.contains(class)
    }

    pub fn any_recognized(&self) -> bool {
        self.classes.iter().any(ConformanceClass::is_recognized)
    }
}

/// Advertised URIs that use the OGC `req` namespace instead of `conf`
pub fn deprecated_req_classes<S: AsRef<str>>(uris: &[S]) -> Vec<String> {
    uris.iter()
        .map(AsRef::as_ref)
        .filter(|uri| uri.starts_with(classes::DEPRECATED_FEATURES_REQ_PREFIX))
        .map(str::to_string)
        .collect()
}
