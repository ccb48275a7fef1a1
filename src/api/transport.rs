use std::time::Duration;

use crate::consts::{BASE_URL, USER_AGENT};
use crate::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and body of a completed request
#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

/// Authenticated GET against the API host
pub(crate) trait Transport {
    /// `path` is relative to the base URL; `params` become the query string
    fn get(&self, path: &str, params: &[(&str, String)]) -> Result<HttpResponse, ApiError>;
}

pub(crate) struct UreqTransport {
    agent: ureq::Agent,
    base_url: String,
    session: String,
}

impl UreqTransport {
    pub(crate) fn new(session: &str) -> Self {
        Self::with_base_url(session, BASE_URL)
    }

    pub(crate) fn with_base_url(session: &str, base_url: &str) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.to_string(),
            session: session.to_string(),
        }
    }
}

impl Transport for UreqTransport {
    fn get(&self, path: &str, params: &[(&str, String)]) -> Result<HttpResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .agent
            .get(url.as_str())
            .header("user-agent", USER_AGENT)
            .header("referer", BASE_URL)
            .header("cookie", format!("session={}", self.session));
        for (key, value) in params {
            request = request.query(*key, value);
        }

        let mut response = request.call()?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        Ok(HttpResponse { status, body })
    }
}
