pub mod common;
pub mod conformance;
pub mod landing;

pub use common::{Link, find_link, media_type, rel, resolve_href};
pub use conformance::{AdvertisedClasses, ConformanceClass};
pub use landing::LandingDocument;
