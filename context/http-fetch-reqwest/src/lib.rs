use bytes::Bytes;
use mwsign_core::{Error, HttpFetch, Result};
use reqwest::blocking::Client;

/// HttpFetch implementation backed by a blocking reqwest client.
#[derive(Debug, Default)]
pub struct ReqwestHttpFetch {
    client: Client,
}

impl ReqwestHttpFetch {
    /// Create a new ReqwestHttpFetch with a reqwest::blocking::Client.
    ///
    /// Timeouts and TLS settings belong to the supplied client; none are
    /// imposed here.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl HttpFetch for ReqwestHttpFetch {
    fn http_fetch(&self, url: &str) -> Result<http::Response<Bytes>> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::unexpected("http request failed").with_source(e))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        // bytes() drains the body; the connection is released whether the
        // read succeeds or fails.
        let body = resp
            .bytes()
            .map_err(|e| Error::unexpected("reading response body failed").with_source(e))?;

        let mut response = http::Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}
