//! HTTP client for the query-generation backend.
//!
//! The backend exposes one endpoint: `POST /data` with the serialized form as
//! the JSON body, answering with generated queries and related job titles.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::form::JobForm;

const DATA_ENDPOINT: &str = "/data";

/// Connection parameters resolved from configuration.
#[derive(Debug, Clone)]
pub(crate) struct BackendSettings {
    pub(crate) origin: Url,
    pub(crate) timeout: Duration,
}

/// Response body of `POST /data`. Both lists keep wire order; absent fields
/// deserialize to empty lists so a sparse response renders as "no items".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct Suggestions {
    #[serde(default)]
    pub(crate) data: Vec<String>,
    #[serde(default)]
    pub(crate) additional_job_titles: Vec<String>,
}

#[derive(Debug, Error)]
pub(crate) enum BackendError {
    #[error("failed to construct HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("invalid backend endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("backend returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to parse backend response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Seam between the UI and the network so that tests can substitute a stub.
pub(crate) trait SuggestService {
    fn suggest(&self, form: &JobForm) -> Result<Suggestions, BackendError>;
}

pub(crate) struct BackendClient {
    client: reqwest::blocking::Client,
    origin: Url,
}

impl BackendClient {
    pub(crate) fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(BackendError::Client)?;

        Ok(Self {
            client,
            origin: settings.origin,
        })
    }

    fn endpoint(&self) -> Result<Url, BackendError> {
        Ok(self.origin.join(DATA_ENDPOINT)?)
    }
}

impl SuggestService for BackendClient {
    fn suggest(&self, form: &JobForm) -> Result<Suggestions, BackendError> {
        let url = self.endpoint()?;
        debug!(%url, "posting suggestion request");

        let response = self
            .client
            .post(url.clone())
            .json(form)
            .send()
            .map_err(|source| BackendError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| BackendError::Request {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(BackendError::Status { status, body });
        }

        debug!(%status, bytes = body.len(), "suggestion response received");
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_response_fields_become_empty_lists() {
        let suggestions: Suggestions = serde_json::from_str("{}").expect("parse");
        assert!(suggestions.data.is_empty());
        assert!(suggestions.additional_job_titles.is_empty());
    }

    #[test]
    fn response_lists_keep_wire_order() {
        let raw = r#"{
            "message": "Form received successfully!",
            "data": ["q1", "q2"],
            "additional_job_titles": ["Title A"]
        }"#;
        let suggestions: Suggestions = serde_json::from_str(raw).expect("parse");
        assert_eq!(suggestions.data, vec!["q1", "q2"]);
        assert_eq!(suggestions.additional_job_titles, vec!["Title A"]);
    }

    #[test]
    fn endpoint_joins_origin_and_path() {
        let settings = BackendSettings {
            origin: Url::parse("http://127.0.0.1:8000").expect("origin"),
            timeout: Duration::from_secs(30),
        };
        let client = BackendClient::new(settings).expect("client");
        assert_eq!(
            client.endpoint().expect("endpoint").as_str(),
            "http://127.0.0.1:8000/data"
        );
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = serde_json::from_str::<Suggestions>("not json").expect_err("fails");
        let err = BackendError::from(err);
        assert!(err.to_string().contains("parse"));
    }
}
