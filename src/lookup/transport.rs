// Thu Aug 27 2026 - Alex

use std::time::Duration;

use crate::lookup::error::LookupError;

pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking HTTP seam. Production uses reqwest; tests inject a
/// scripted transport so no lookup test touches the network.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, LookupError>;
}

pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, LookupError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
