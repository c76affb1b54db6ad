use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::{CommitGuardError, Result};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("commit-guard/", env!("CARGO_PKG_VERSION"));

/// Status code and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// HTTP client abstraction for dependency injection.
///
/// Transport failures (connect, timeout) are errors; any completed exchange,
/// including 4xx/5xx, is returned as an [`HttpResponse`].
pub trait HttpClient {
    /// Perform a GET request.
    ///
    /// # Errors
    /// Returns an error if the request could not be completed.
    fn get(&self, url: &str) -> Result<HttpResponse>;

    /// POST a JSON body.
    ///
    /// # Errors
    /// Returns an error if the request could not be completed.
    fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse>;
}

/// Production HTTP client using reqwest, authenticated with a GitHub token.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// # Errors
    /// Returns a configuration error if the token is not a valid header value
    /// or the client cannot be built.
    pub fn with_token(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("token {token}")).map_err(|_| {
            CommitGuardError::Config("github token contains invalid characters".to_string())
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| CommitGuardError::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    fn finish(
        url: &str,
        result: reqwest::Result<reqwest::blocking::Response>,
    ) -> Result<HttpResponse> {
        let response = result.map_err(|e| {
            if e.is_timeout() {
                CommitGuardError::Fetch(format!("Request timeout: {url}"))
            } else if e.is_connect() {
                CommitGuardError::Fetch(format!("Failed to connect to {url}"))
            } else {
                CommitGuardError::Fetch(format!("Request to {url} failed: {e}"))
            }
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| CommitGuardError::Fetch(format!("Failed to read response from {url}: {e}")))?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        log::debug!("GET {url}");
        Self::finish(url, self.client.get(url).send())
    }

    fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse> {
        log::debug!("POST {url}");
        Self::finish(
            url,
            self.client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string())
                .send(),
        )
    }
}
