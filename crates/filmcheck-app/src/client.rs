// Rust guideline compliant 2026-02-09

//! Blocking HTTP client for the suggestion and detail endpoints.

use crate::error::Result;
use crate::graphql::{self, GraphqlRequest};
use crate::sources::{DetailSource, SuggestionSource};
use crate::suggestion::{parse_suggestions, suggestion_url};
use filmcheck_core::{Candidate, Config, Error, PersonDetail, TitleDetail};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("film-ch/", env!("CARGO_PKG_VERSION"));

/// HTTP client for one lookup run.
///
/// Construct it once per run and drop it when done; pooled connections
/// are closed on drop.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    graphql_url: String,
    suggestion_url: String,
    suggestion_bucket: String,
    credit_limit: u32,
}

impl ApiClient {
    /// Creates a client from configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoints, timeout and credit limit
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            graphql_url: config.graphql_url.clone(),
            suggestion_url: config.suggestion_url.clone(),
            suggestion_bucket: config.suggestion_bucket.clone(),
            credit_limit: config.credit_limit,
        })
    }

    fn post_graphql(&self, request: &GraphqlRequest<'_>) -> Result<String> {
        debug!(url = %self.graphql_url, variables = %request.variables, "graphql request");
        let response = self.http.post(&self.graphql_url).json(request).send()?;
        read_body(response, "detail")
    }
}

fn read_body(response: Response, origin: &'static str) -> Result<String> {
    let status = response.status();
    debug!(origin, status = status.as_u16(), "response received");
    check_status(status, origin)?;
    Ok(response.text()?)
}

/// Maps a non-success status to `SourceUnavailable`. No retry is attempted.
fn check_status(status: StatusCode, origin: &'static str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    Err(Error::SourceUnavailable {
        origin,
        status: status.as_u16(),
    }
    .into())
}

impl SuggestionSource for ApiClient {
    fn suggest(&self, text: &str) -> Result<Vec<Candidate>> {
        let url = suggestion_url(&self.suggestion_url, &self.suggestion_bucket, text);
        debug!(%url, "suggestion request");

        let response = self.http.get(&url).send()?;
        let body = read_body(response, "suggestion")?;
        let candidates = parse_suggestions(&body)?;

        info!(query = text, count = candidates.len(), "suggestions received");
        Ok(candidates)
    }
}

impl DetailSource for ApiClient {
    fn title(&self, id: &str) -> Result<TitleDetail> {
        let body = self.post_graphql(&GraphqlRequest::title(id, self.credit_limit))?;
        Ok(graphql::parse_title(&body, id)?)
    }

    fn person(&self, id: &str) -> Result<PersonDetail> {
        let body = self.post_graphql(&GraphqlRequest::person(id))?;
        Ok(graphql::parse_person(&body, id)?)
    }
}
