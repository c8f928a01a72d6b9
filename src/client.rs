use bytes::Bytes;
use reqwest::{StatusCode, header};
use serde_json::Value;
use std::fmt;
use url::Url;

use crate::error::ValidatorResult;

/// How a search parameter is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Query string on a GET request, every value serialized as a string
    Get,
    /// JSON request body on a POST request, values kept as native JSON
    Post,
}

impl Transport {
    /// GET always, POST only when the run exercises request bodies
    pub fn enabled(post: bool) -> &'static [Transport] {
        if post {
            &[Transport::Get, Transport::Post]
        } else {
            &[Transport::Get]
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Get => write!(f, "GET"),
            Transport::Post => write!(f, "POST"),
        }
    }
}

/// A captured HTTP response
#[derive(Debug, Clone)]
pub struct Probe {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Probe {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Content type for messages, `None` rendered as such
    pub fn content_type_or_none(&self) -> &str {
        self.content_type.as_deref().unwrap_or("None")
    }

    pub fn parse_json(&self) -> ValidatorResult<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn json(&self) -> Option<Value> {
        self.parse_json().ok()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// The `features` array of a FeatureCollection body
    pub fn features(&self) -> Option<Vec<Value>> {
        match self.json()? {
            Value::Object(mut map) => match map.remove("features")? {
                Value::Array(features) => Some(features),
                _ => None,
            },
            _ => None,
        }
    }
}

/// HTTP client used for every request a run issues
#[derive(Debug, Clone)]
pub struct StacClient {
    http: reqwest::Client,
}

impl StacClient {
    pub fn new(user_agent: &str) -> ValidatorResult<Self> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { http })
    }

    pub async fn get(&self, url: &str) -> ValidatorResult<Probe> {
        let target = Url::parse(url)?;
        self.send(self.http.get(target), "GET", url).await
    }

    pub async fn get_with_query(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> ValidatorResult<Probe> {
        let target = Url::parse(url)?;
        self.send(self.http.get(target).query(params), "GET", url).await
    }

    pub async fn post_json(&self, url: &str, body: &Value) -> ValidatorResult<Probe> {
        let target = Url::parse(url)?;
        self.send(self.http.post(target).json(body), "POST", url).await
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        url: &str,
    ) -> ValidatorResult<Probe> {
        let response = request.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = response.bytes().await?;

        tracing::debug!(method, url, status = status.as_u16(), "request complete");

        Ok(Probe {
            status,
            content_type,
            body,
        })
    }
}
