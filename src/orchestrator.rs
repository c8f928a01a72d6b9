use serde_json::Value;
use tracing::info;

use crate::client::StacClient;
use crate::config::ValidatorConfig;
use crate::error::ValidatorResult;
use crate::report::ValidationReport;
use crate::schema::{SchemaValidator, StacSchemaValidator};
use crate::stac::conformance::deprecated_req_classes;
use crate::stac::{ConformanceClass, LandingDocument, rel};
use crate::validators::{fetch_collections, validate_core, validate_features, validate_search};

/// Whether a run proceeds past a checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Continue,
    Halt,
}

/// Runs the conformance suite against one STAC API at a time.
///
/// Each call to [`Validator::run`] owns its report, so one validator can be
/// reused for several services.
pub struct Validator {
    client: StacClient,
    schema: Box<dyn SchemaValidator>,
}

impl Validator {
    pub fn new(config: &ValidatorConfig) -> ValidatorResult<Self> {
        Ok(Self {
            client: StacClient::new(&config.user_agent)?,
            schema: Box::new(StacSchemaValidator),
        })
    }

    /// Replace the catch-all schema pass
    pub fn with_schema_validator(mut self, schema: impl SchemaValidator + 'static) -> Self {
        self.schema = Box::new(schema);
        self
    }

    pub async fn run(&self, root_url: &str, post: bool) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(landing) = self.fetch_landing(root_url, &mut report).await else {
            return report;
        };

        if check_landing(&landing, &mut report) == Gate::Halt {
            return report;
        }

        if self.run_capabilities(&landing, post, &mut report).await == Gate::Halt {
            return report;
        }

        if !report.has_errors() {
            self.run_schema_pass(&landing, &mut report).await;
        }

        info!(
            warnings = report.warnings().len(),
            errors = report.error_count(),
            "validation complete"
        );
        report
    }

    async fn fetch_landing(
        &self,
        root_url: &str,
        report: &mut ValidationReport,
    ) -> Option<LandingDocument> {
        let probe = match self.client.get(root_url).await {
            Ok(probe) => probe,
            Err(e) => {
                tracing::warn!(url = root_url, error = %e, "landing page request failed");
                report.error(format!("root URL {} could not be fetched: {}", root_url, e));
                return None;
            }
        };

        if !probe.is_ok() {
            report.error(format!(
                "root URL {} returned status code {}",
                root_url,
                probe.status_code()
            ));
            return None;
        }

        match probe.json() {
            Some(body) => Some(LandingDocument::from_json(root_url, body)),
            None => {
                report.error(format!("root URL {} did not return a JSON document", root_url));
                None
            }
        }
    }

    async fn run_capabilities(
        &self,
        landing: &LandingDocument,
        post: bool,
        report: &mut ValidationReport,
    ) -> Gate {
        let classes = landing.classes();

        if classes.advertises(&ConformanceClass::Core) {
            validate_core(&self.client, landing, report).await;
        } else {
            report.error("/ : 'conformsTo' must contain STAC API - Core conformance class.");
            return Gate::Halt;
        }

        if classes.advertises(&ConformanceClass::Features) {
            validate_features(&self.client, landing, report).await;
        }

        if classes.advertises(&ConformanceClass::Search) {
            validate_search(&self.client, landing, post, report).await;
        }

        Gate::Continue
    }

    async fn run_schema_pass(&self, landing: &LandingDocument, report: &mut ValidationReport) {
        if let Err(e) = self.schema.validate_catalog(&landing.raw) {
            report.error(e.to_string());
        }

        for child in self.children(landing, report).await {
            if let Err(e) = self.schema.validate_collection(&child) {
                report.error(e.to_string());
            }
        }
    }

    /// Child collections, from the collections listing when the service has
    /// one, otherwise by following each `child` link
    async fn children(&self, landing: &LandingDocument, report: &mut ValidationReport) -> Vec<Value> {
        if let Some(data) = landing.link(rel::DATA) {
            let url = landing.resolve(data);
            return fetch_collections(&self.client, &url, report)
                .await
                .unwrap_or_default();
        }

        let mut children = Vec::new();
        for link in landing.links.iter().filter(|link| link.rel == rel::CHILD) {
            let url = landing.resolve(link);
            match self.client.get(&url).await {
                Ok(probe) => match probe.json() {
                    Some(child) => children.push(child),
                    None => report.error(format!("child ({}): should return JSON", url)),
                },
                Err(e) => report.error(format!("child ({}): request failed: {}", url, e)),
            }
        }
        children
    }
}

/// Structural checks on the landing page itself
fn check_landing(landing: &LandingDocument, report: &mut ValidationReport) -> Gate {
    let errors_before = report.error_count();

    if landing.conforms_to.is_empty() {
        report.error(
            "/ : 'conformsTo' field must be defined and non-empty. This field is required as of 1.0.0.",
        );
    }

    if landing.links.is_empty() {
        report.error("/ : 'links' field must be defined and non-empty.");
    }

    if !landing.conforms_to.is_empty() && !landing.classes().any_recognized() {
        report.error("/ : 'conformsTo' must contain at least one STAC API conformance class.");
    }

    let req_classes = deprecated_req_classes(&landing.conforms_to);
    if !req_classes.is_empty() {
        report.warn(format!(
            "/ : 'conformsTo' contains OGC API conformance classes using 'req' instead of 'conf': {:?}.",
            req_classes
        ));
    }

    if report.error_count() > errors_before {
        Gate::Halt
    } else {
        Gate::Continue
    }
}

/// Validate the STAC API at `root_url` with default settings.
///
/// `post` additionally exercises every search parameter over POST.
pub async fn validate_api(root_url: &str, post: bool) -> ValidatorResult<ValidationReport> {
    let config = ValidatorConfig::new(root_url);
    let validator = Validator::new(&config)?;
    Ok(validator.run(root_url, post).await)
}
