//! Execution engine module
//!
//! The cursor-following request loop.
//!
//! # Overview
//!
//! A [`Pagination`] run owns everything that changes between requests: the
//! parameter map, the token queue and the run state. Each call to
//! [`Pagination::next_page`] performs exactly one GET and returns one
//! [`PageEnvelope`], so at most one request is ever in flight. After each
//! page the run decides whether to continue:
//!
//! - the page's `data` list must be non-empty,
//! - the extractor must find a cursor,
//! - that cursor must differ from the one currently in the parameters.
//!
//! When it continues, the token goes back to the end of the queue, the
//! cursor parameter is updated and `limit` (if present) is ramped up.

mod types;

pub use types::{RunState, RunStats};

use crate::error::{Error, Result};
use crate::http::Transport;
use crate::pagination::{has_data, CredentialRotator, CursorExtractor, PageEnvelope, RampUp};
use crate::types::{Credential, JsonValue, Parameters, ACCESS_TOKEN_PARAM, LIMIT_PARAM};
use futures::stream::{self, Stream};
use serde_json::json;
use tracing::{debug, warn};

/// A single pagination run over one endpoint
pub struct Pagination<'a, T: Transport + ?Sized> {
    /// Transport used for requests
    transport: &'a T,
    /// Fixed endpoint URL
    endpoint: String,
    /// Parameters for the next request
    params: Parameters,
    /// Access tokens for this run
    rotator: CredentialRotator,
    /// Cursor extraction strategy
    extractor: CursorExtractor,
    /// Page size policy
    ramp_up: RampUp,
    /// Query parameter that carries the token
    token_param: String,
    /// Current state
    state: RunState,
    /// Requests completed so far
    pages_fetched: usize,
}

impl<'a, T: Transport + ?Sized> Pagination<'a, T> {
    /// Create a new run
    ///
    /// Fails with [`Error::CredentialsExhausted`] if no credentials are given.
    pub fn new<I, S>(
        transport: &'a T,
        endpoint: impl Into<String>,
        parameters: Parameters,
        credentials: I,
        extractor: CursorExtractor,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Credential>,
    {
        let rotator = CredentialRotator::new(credentials);
        if rotator.is_empty() {
            return Err(Error::CredentialsExhausted);
        }

        Ok(Self {
            transport,
            endpoint: endpoint.into(),
            params: parameters,
            rotator,
            extractor,
            ramp_up: RampUp::default(),
            token_param: ACCESS_TOKEN_PARAM.to_string(),
            state: RunState::Requesting,
            pages_fetched: 0,
        })
    }

    /// Set the page size policy
    #[must_use]
    pub fn with_ramp_up(mut self, ramp_up: RampUp) -> Self {
        self.ramp_up = ramp_up;
        self
    }

    /// Set the query parameter used for the access token
    #[must_use]
    pub fn with_token_param(mut self, name: impl Into<String>) -> Self {
        self.token_param = name.into();
        self
    }

    /// Endpoint URL of this run
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Number of requests completed
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Whether the run has finished
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// Fetch the next page
    ///
    /// Returns `None` once the run is done. An error is returned once and
    /// ends the run.
    pub async fn next_page(&mut self) -> Option<Result<PageEnvelope>> {
        if self.state.is_done() {
            return None;
        }

        match self.fetch().await {
            Ok(page) => Some(Ok(page)),
            Err(e) => {
                self.state = RunState::Done;
                Some(Err(e))
            }
        }
    }

    /// Turn the run into a stream of pages
    pub fn into_stream(self) -> impl Stream<Item = Result<PageEnvelope>> + 'a {
        stream::unfold(self, |mut run| async move {
            let item = run.next_page().await?;
            Some((item, run))
        })
    }

    async fn fetch(&mut self) -> Result<PageEnvelope> {
        let credential = self.rotator.pop()?;
        self.params.set(self.token_param.clone(), credential.clone());

        debug!(
            endpoint = %self.endpoint,
            page = self.pages_fetched + 1,
            cursor = ?self.params.get_string(self.extractor.cursor_param()),
            limit = ?self.params.get_u64(LIMIT_PARAM),
            "Requesting page"
        );

        let response = self
            .transport
            .get(&self.endpoint, &self.params.to_query())
            .await?;
        self.pages_fetched += 1;

        let page = PageEnvelope {
            content: parse_body(&response.body),
            status: response.status,
            endpoint: self.endpoint.clone(),
            parameters: self.params.clone(),
        };

        self.advance(&page.content, credential);
        Ok(page)
    }

    /// Decide whether another page follows and prepare its parameters
    fn advance(&mut self, content: &JsonValue, credential: Credential) {
        let cursor_param = self.extractor.cursor_param();

        let next = self.extractor.extract(content).filter(|cursor| {
            has_data(content)
                && self.params.get_string(cursor_param).as_deref() != Some(cursor.as_str())
        });

        let Some(cursor) = next else {
            debug!(endpoint = %self.endpoint, pages = self.pages_fetched, "Pagination done");
            self.state = RunState::Done;
            return;
        };

        self.rotator.push_back(credential);
        self.params.set(cursor_param, cursor);
        if let Some(limit) = self.params.get_u64(LIMIT_PARAM) {
            self.params.set(LIMIT_PARAM, self.ramp_up.apply(limit));
        }
        self.state = RunState::Requesting;
    }
}

/// Decode a response body, wrapping non-JSON text as `{"error": text}`
pub fn parse_body(body: &str) -> JsonValue {
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Response body is not JSON");
            json!({ "error": body })
        }
    }
}

#[cfg(test)]
mod tests;
