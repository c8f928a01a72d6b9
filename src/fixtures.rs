//! Boundary-value corpora for the item search battery.
//!
//! These are hand-curated: each entry sits on an edge of RFC 3339, of the bbox
//! encoding rules, or of the GeoJSON geometry types. Extend the lists here; the
//! validators iterate whatever they contain.

use serde_json::{Value, json};

/// Datetime and interval literals a conformant server must accept
pub const VALID_DATETIMES: &[&str] = &[
    "1985-04-12T23:20:50.52Z",
    "1985-04-12T23:20:50,52Z",
    "1996-12-19T16:39:57-00:00",
    "1996-12-19T16:39:57+00:00",
    "1996-12-19T16:39:57-08:00",
    "1996-12-19T16:39:57+08:00",
    "../1985-04-12T23:20:50.52Z",
    "1985-04-12T23:20:50.52Z/..",
    "/1985-04-12T23:20:50.52Z",
    "1985-04-12T23:20:50.52Z/",
    "1985-04-12T23:20:50.52Z/1986-04-12T23:20:50.52Z",
    "1985-04-12T23:20:50.52+01:00/1986-04-12T23:20:50.52+01:00",
    "1985-04-12T23:20:50.52-01:00/1986-04-12T23:20:50.52-01:00",
    "1937-01-01T12:00:27.87+01:00",
    "1937-01-01T12:00:27.8710+01:00",
    "1937-01-01T12:00:27.8+01:00",
    "1937-01-01T12:00:27.8Z",
    "2020-07-23T00:00:00.000+03:00",
    "2020-07-23T00:00:00+03:00",
    "1985-04-12t23:20:50.000z",
    "2020-07-23T00:00:00Z",
    "2020-07-23T00:00:00.0Z",
    "2020-07-23T00:00:00.01Z",
    "2020-07-23T00:00:00.012Z",
    "2020-07-23T00:00:00.0123Z",
    "2020-07-23T00:00:00.01234Z",
    "2020-07-23T00:00:00.012345Z",
    "2020-07-23T00:00:00.0123456Z",
    "2020-07-23T00:00:00.01234567Z",
    "2020-07-23T00:00:00.012345678Z",
];

/// Literals a conformant server must reject with 400
pub const INVALID_DATETIMES: &[&str] = &[
    // date only
    "1985-04-12",
    // offset without the colon separator
    "1937-01-01T12:00:27.87+0100",
    // two-digit year
    "37-01-01T12:00:27.87Z",
    // no offset
    "1985-12-12T23:20:50.52",
    // five-digit year
    "21985-12-12T23:20:50.52Z",
    "1985-13-12T23:20:50.52Z",
    "1985-12-32T23:20:50.52Z",
    "1985-12-01T25:20:50.52Z",
    "1985-12-01T00:60:50.52Z",
    "1985-12-01T00:06:61.52Z",
    // fraction separator with no digits
    "1985-04-12T23:20:50.Z",
    "1985-04-12T23:20:50,Z",
    "1990-12-31T23:59:61Z",
    // end before start
    "1986-04-12T23:20:50.52Z/1985-04-12T23:20:50.52Z",
];

/// A bounding box as sent in a search request
#[derive(Debug, Clone, Copy)]
pub struct BboxCase {
    pub coordinates: &'static [f64],
}

impl BboxCase {
    /// Comma-separated query string form, e.g. `100.0,0.0,105.0,1.0`
    pub fn as_query(&self) -> String {
        self.coordinates
            .iter()
            .map(|c| format!("{:?}", c))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Native JSON array form for request bodies
    pub fn as_json(&self) -> Value {
        json!(self.coordinates)
    }
}

/// 2D and 3D boxes that must return results
pub const VALID_BBOXES: &[BboxCase] = &[
    BboxCase {
        coordinates: &[100.0, 0.0, 105.0, 1.0],
    },
    BboxCase {
        coordinates: &[100.0, 0.0, 0.0, 105.0, 1.0, 1.0],
    },
];

/// Southern bound above the northern bound
pub const INVERTED_BBOX: BboxCase = BboxCase {
    coordinates: &[100.0, 1.0, 105.0, 0.0],
};

/// Lengths other than 4 or 6
pub const WRONG_LENGTH_BBOXES: &[BboxCase] = &[
    BboxCase {
        coordinates: &[0.0],
    },
    BboxCase {
        coordinates: &[0.0, 0.0],
    },
    BboxCase {
        coordinates: &[0.0, 0.0, 0.0],
    },
    BboxCase {
        coordinates: &[0.0, 0.0, 0.0, 1.0, 1.0],
    },
    BboxCase {
        coordinates: &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
    },
];

/// A bbox written as a JSON array literal in the query string
pub const BRACKETED_GET_BBOX: &str = "[100.0, 0.0, 105.0, 1.0]";

/// A bbox sent as a delimited string in a request body
pub const DELIMITED_POST_BBOX: &str = "100.0, 0.0, 105.0, 1.0";

pub const VALID_LIMITS: &[i64] = &[1, 2, 10, 10000];
pub const INVALID_LIMITS: &[i64] = &[-1, 0, 10001];

/// One geometry of every GeoJSON type, in the order they are exercised
pub fn geometries() -> Vec<(&'static str, Value)> {
    vec![
        ("Point", point()),
        ("LineString", linestring()),
        ("Polygon", polygon()),
        ("Polygon with hole", polygon_with_hole()),
        ("MultiPoint", multipoint()),
        ("MultiLineString", multilinestring()),
        ("MultiPolygon", multipolygon()),
        ("GeometryCollection", geometry_collection()),
    ]
}

pub fn point() -> Value {
    json!({"type": "Point", "coordinates": [100.0, 0.0]})
}

pub fn linestring() -> Value {
    json!({"type": "LineString", "coordinates": [[100.0, 0.0], [101.0, 1.0]]})
}

pub fn polygon() -> Value {
    json!({
        "type": "Polygon",
        "coordinates": [
            [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]]
        ]
    })
}

pub fn polygon_with_hole() -> Value {
    json!({
        "type": "Polygon",
        "coordinates": [
            [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
            [[100.8, 0.8], [100.8, 0.2], [100.2, 0.2], [100.2, 0.8], [100.8, 0.8]]
        ]
    })
}

pub fn multipoint() -> Value {
    json!({"type": "MultiPoint", "coordinates": [[100.0, 0.0], [101.0, 1.0]]})
}

pub fn multilinestring() -> Value {
    json!({
        "type": "MultiLineString",
        "coordinates": [
            [[100.0, 0.0], [101.0, 1.0]],
            [[102.0, 2.0], [103.0, 3.0]]
        ]
    })
}

pub fn multipolygon() -> Value {
    json!({
        "type": "MultiPolygon",
        "coordinates": [
            [[[102.0, 2.0], [103.0, 2.0], [103.0, 3.0], [102.0, 3.0], [102.0, 2.0]]],
            [
                [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
                [[100.2, 0.2], [100.2, 0.8], [100.8, 0.8], [100.8, 0.2], [100.2, 0.2]]
            ]
        ]
    })
}

pub fn geometry_collection() -> Value {
    json!({
        "type": "GeometryCollection",
        "geometries": [
            {"type": "Point", "coordinates": [100.0, 0.0]},
            {"type": "LineString", "coordinates": [[101.0, 0.0], [102.0, 1.0]]}
        ]
    })
}
