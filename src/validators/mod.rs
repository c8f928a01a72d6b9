pub mod core;
pub mod features;
pub mod listing;
pub mod search;

pub use self::core::validate_core;
pub use features::validate_features;
pub use listing::fetch_collections;
pub use search::validate_search;
