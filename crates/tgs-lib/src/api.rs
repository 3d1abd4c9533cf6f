//! Client for the TGS REST API.
//!
//! Every endpoint follows the same shape: a GET returning
//! `{"data": <record or list of records>}`. [`TgsClient`] performs the request,
//! [`extract_data`] peels off the envelope, and the `*_from_response` helpers
//! hand each record to the converters. Failures are logged here and then
//! propagated; nothing is skipped or retried.

use std::env;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::converters::{convert_country, convert_organization};
use crate::error::{Error, Result};
use crate::models::{Country, Organization};
use crate::record::{record_from_value, RawRecord};
use crate::validation::ValidationError;

/// Public TGS API host.
pub const DEFAULT_ENDPOINT: &str = "https://public.totalglobalsports.com";
/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub const COUNTRIES_RESOURCE: &str = "/api/Association/get-all-countries";
pub const ORGANIZATIONS_RESOURCE: &str = "/api/Association/get-current-orgs-list";
pub const COUNTRY_BY_ID_RESOURCE: &str = "/api/Association/get-country-by-id";

const ENDPOINT_ENV: &str = "TGS_API_ENDPOINT";
const TIMEOUT_ENV: &str = "TGS_HTTP_TIMEOUT_SECS";

/// Connection settings for [`TgsClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL that resource paths are joined onto.
    pub endpoint: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Read `TGS_API_ENDPOINT` and `TGS_HTTP_TIMEOUT_SECS` from the process
    /// environment, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads variables through `lookup`,
    /// so tests do not have to mutate the global environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                config.endpoint = endpoint.to_string();
            }
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    value = %raw,
                    default_secs = DEFAULT_TIMEOUT.as_secs(),
                    "ignoring invalid {}", TIMEOUT_ENV
                ),
            }
        }

        config
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Async HTTP client bound to one TGS API endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TgsClient {
    http: Client,
    endpoint: Url,
}

impl TgsClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] when the endpoint is not an absolute
    /// URL, or [`Error::Http`] when the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| Error::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            message: e.to_string(),
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                message: "endpoint cannot be used as a base URL".to_string(),
            });
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("tgs-lib/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Resolve `resource` against the endpoint. Absolute paths replace any
    /// path already on the endpoint.
    pub fn resource_url(&self, resource: &str) -> Result<Url> {
        self.endpoint
            .join(resource)
            .map_err(|e| Error::InvalidEndpoint {
                endpoint: self.endpoint.to_string(),
                message: format!("cannot join '{}': {}", resource, e),
            })
    }

    /// GET `resource` and parse the body as JSON.
    ///
    /// Only `200 OK` is accepted; any other status is an error even if it is
    /// in the 2xx range.
    pub async fn fetch_data(&self, resource: &str) -> Result<Value> {
        let url = self.resource_url(resource)?;
        debug!(url = %url, "fetching data from TGS API");

        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "HTTP request failed");
                Error::Http(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(url = %url, status = status.as_u16(), "unexpected status code");
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            error!(url = %url, error = %e, "failed to read response body");
            Error::Http(e)
        })?;

        serde_json::from_slice(&body).map_err(|source| {
            error!(url = %url, error = %source, "error decoding JSON data");
            Error::InvalidJson {
                url: url.to_string(),
                source,
            }
        })
    }

    /// Retrieve every country known to the API.
    pub async fn get_countries(&self) -> Result<Vec<Country>> {
        let json = self.fetch_data(COUNTRIES_RESOURCE).await?;
        let countries = countries_from_response(&json)?;
        info!(count = countries.len(), "countries retrieved");
        Ok(countries)
    }

    /// Retrieve the organizations with a current season.
    pub async fn get_organizations(&self) -> Result<Vec<Organization>> {
        let json = self.fetch_data(ORGANIZATIONS_RESOURCE).await?;
        let organizations = organizations_from_response(&json)?;
        info!(count = organizations.len(), "organizations retrieved");
        Ok(organizations)
    }

    /// Retrieve a single country by its TGS identifier.
    pub async fn get_country_by_id(&self, country_id: i64) -> Result<Country> {
        let resource = format!("{}/{}", COUNTRY_BY_ID_RESOURCE, country_id);
        let json = self.fetch_data(&resource).await?;
        country_from_response(&json)
    }
}

/// Return the `data` property of a TGS response envelope.
///
/// # Errors
///
/// [`Error::MissingPayload`] when the whole body is `null`, and
/// [`Error::MissingData`] when `data` is absent or `null`.
pub fn extract_data(json: &Value) -> Result<&Value> {
    if json.is_null() {
        return Err(Error::MissingPayload);
    }

    match json.get("data") {
        None | Some(Value::Null) => Err(Error::MissingData),
        Some(data) => Ok(data),
    }
}

/// Convert a list response into countries, failing on the first bad record.
pub fn countries_from_response(json: &Value) -> Result<Vec<Country>> {
    convert_all(json, "Country", convert_country)
}

/// Convert a list response into organizations, failing on the first bad record.
pub fn organizations_from_response(json: &Value) -> Result<Vec<Organization>> {
    convert_all(json, "Organization", convert_organization)
}

/// Convert a single-record response into a country.
pub fn country_from_response(json: &Value) -> Result<Country> {
    let data = extract_data(json)?;
    record_from_value(data)
        .and_then(convert_country)
        .map_err(|err| {
            error!(error = %err, "error converting data to Country");
            Error::from(err)
        })
}

fn convert_all<T>(
    json: &Value,
    entity: &'static str,
    convert: fn(Option<&RawRecord>) -> std::result::Result<T, ValidationError>,
) -> Result<Vec<T>> {
    let items = extract_data(json)?.as_array().ok_or(Error::DataNotArray)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            record_from_value(item).and_then(convert).map_err(|err| {
                error!(index, entity, error = %err, "error converting data to entity");
                Error::from(err)
            })
        })
        .collect()
}
