//! Blocking HTTP client for the TuneIn directory.
//!
//! Two hosts are involved:
//!
//! 1. `api.radiotime.com` serves `/profiles` (favorites listing) and
//!    `/profiles/{id}/contents` (episodes of a podcast). Both require the
//!    bearer token.
//! 2. `opml.radiotime.com` serves `/Tune.ashx`, which turns a guide id into
//!    playable stream candidates.
//!
//! Every request carries the browser user agent and, when a token is
//! configured, an `Authorization: Bearer ...` header. Non-2xx statuses are
//! mapped to [`TuneinError::Http`](crate::TuneinError::Http).

use crate::auth::Session;
use crate::config::ClientConfig;
use crate::error::Result;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};

/// Blocking HTTP client for the TuneIn directory.
///
/// Holds a [`reqwest::blocking::Client`], a [`Session`] (bearer token) and
/// the [`ClientConfig`]. API methods are implemented in separate modules
/// (`favorites`, `tune`, `contents`) as `impl TuneinClient` blocks.
pub struct TuneinClient {
    http: Client,
    session: Session,
    config: ClientConfig,
}

impl TuneinClient {
    /// Create a client with an explicit [`Session`] and [`ClientConfig`]
    /// (alternate hosts for testing, strict TLS, custom device profile).
    pub fn with_config(session: Session, config: ClientConfig) -> Result<Self> {
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled");
        }
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self {
            http,
            session,
            config,
        })
    }

    /// Return a reference to the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Return a reference to the active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a GET request and parse the JSON body.
    ///
    /// `url` is absolute; `params` are appended as the query string.
    /// Fails on transport errors, non-2xx statuses, or a non-JSON body.
    pub fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        debug!(url, params = params.len(), "GET");
        let resp = self.authorized(self.http.get(url)).query(params).send()?;
        let resp = resp.error_for_status()?;
        let json: Value = resp.json()?;
        Ok(json)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.authorization_header() {
            Some(value) => req.header("Authorization", value),
            None => req,
        }
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base)
    }

    pub(crate) fn opml_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.opml_base)
    }
}
