use serde_json::Value;
use thiserror::Error;

/// A document that does not match the STAC object schema
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{document}: {reason}")]
pub struct SchemaViolation {
    pub document: String,
    pub reason: String,
}

/// Catch-all schema check run over the root catalog and each child collection
/// once every capability check has passed.
pub trait SchemaValidator: Send + Sync {
    fn validate_catalog(&self, document: &Value) -> Result<(), SchemaViolation>;

    fn validate_collection(&self, document: &Value) -> Result<(), SchemaViolation>;
}

/// Required-field and type checks for STAC Catalog and Collection objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct StacSchemaValidator;

impl SchemaValidator for StacSchemaValidator {
    fn validate_catalog(&self, document: &Value) -> Result<(), SchemaViolation> {
        let doc = Document::new("Catalog", document);
        doc.require_type_value("Catalog")?;
        doc.require_common()?;
        Ok(())
    }

    fn validate_collection(&self, document: &Value) -> Result<(), SchemaViolation> {
        let doc = Document::new("Collection", document);
        doc.require_type_value("Collection")?;
        doc.require_common()?;
        doc.require_str("license")?;

        let extent = doc.require_object("extent")?;
        let spatial_bbox = extent
            .get("spatial")
            .and_then(|s| s.get("bbox"))
            .and_then(Value::as_array);
        if spatial_bbox.is_none() {
            return Err(doc.violation("'extent.spatial.bbox' must be an array"));
        }
        let temporal_interval = extent
            .get("temporal")
            .and_then(|t| t.get("interval"))
            .and_then(Value::as_array);
        if temporal_interval.is_none() {
            return Err(doc.violation("'extent.temporal.interval' must be an array"));
        }

        Ok(())
    }
}

struct Document<'a> {
    kind: &'static str,
    value: &'a Value,
}

impl<'a> Document<'a> {
    fn new(kind: &'static str, value: &'a Value) -> Self {
        Self { kind, value }
    }

    fn label(&self) -> String {
        match self.value.get("id").and_then(Value::as_str) {
            Some(id) => format!("{} '{}'", self.kind, id),
            None => self.kind.to_string(),
        }
    }

    fn violation(&self, reason: impl Into<String>) -> SchemaViolation {
        SchemaViolation {
            document: self.label(),
            reason: reason.into(),
        }
    }

    fn require_str(&self, field: &str) -> Result<&'a str, SchemaViolation> {
        match self.value.get(field) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(self.violation(format!("'{}' must be a string", field))),
            None => Err(self.violation(format!("missing required field '{}'", field))),
        }
    }

    fn require_object(
        &self,
        field: &str,
    ) -> Result<&'a serde_json::Map<String, Value>, SchemaViolation> {
        match self.value.get(field) {
            Some(Value::Object(map)) => Ok(map),
            Some(_) => Err(self.violation(format!("'{}' must be an object", field))),
            None => Err(self.violation(format!("missing required field '{}'", field))),
        }
    }

    fn require_type_value(&self, expected: &str) -> Result<(), SchemaViolation> {
        let actual = self.require_str("type")?;
        if actual != expected {
            return Err(self.violation(format!(
                "'type' must be '{}', actually '{}'",
                expected, actual
            )));
        }
        Ok(())
    }

    fn require_common(&self) -> Result<(), SchemaViolation> {
        self.require_str("stac_version")?;
        self.require_str("id")?;
        self.require_str("description")?;

        let links = match self.value.get("links") {
            Some(Value::Array(links)) => links,
            Some(_) => return Err(self.violation("'links' must be an array")),
            None => return Err(self.violation("missing required field 'links'")),
        };
        for (idx, link) in links.iter().enumerate() {
            let well_formed = link.get("href").is_some_and(Value::is_string)
                && link.get("rel").is_some_and(Value::is_string);
            if !well_formed {
                return Err(self.violation(format!(
                    "links[{}] must have string 'href' and 'rel'",
                    idx
                )));
            }
        }
        Ok(())
    }
}
