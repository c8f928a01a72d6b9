use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::ValidatorResult;

#[derive(Clone, Deserialize)]
pub struct ValidatorConfig {
    /// Landing page of the STAC API under test
    pub root_url: String,
    /// Also exercise search parameters in POST request bodies
    #[serde(default)]
    pub post: bool,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl fmt::Debug for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorConfig")
            .field("root_url", &self.root_url)
            .field("post", &self.post)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_user_agent() -> String {
    format!("stac-api-validator/{}", env!("CARGO_PKG_VERSION"))
}

/// Values given on the command line, applied over file and environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root_url: Option<String>,
    pub post: Option<bool>,
}

impl ValidatorConfig {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            post: false,
            user_agent: default_user_agent(),
        }
    }

    /// Layer an optional config file, `STAC_API_VALIDATOR__*` environment
    /// variables and command line overrides, in increasing precedence.
    pub fn load(
        file: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> ValidatorResult<Self> {
        let mut builder = config::Config::builder();

        builder = match file {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name("stac-api-validator").required(false)),
        };

        let config = builder
            .add_source(
                config::Environment::with_prefix("STAC_API_VALIDATOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("root_url", overrides.root_url)?
            .set_override_option("post", overrides.post)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
