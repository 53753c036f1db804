use std::collections::HashMap;

use bytes::Bytes;
use log::debug;
use mwsign_core::{Context, Result};

use crate::{Credential, Signer};

/// Client that builds, signs and dispatches marketplace requests over the
/// context's transport.
///
/// Each call constructs a fresh signed URL, issues a single blocking GET
/// and returns the raw response body. Nothing is cached or retried; the
/// client holds no mutable state and is safe to share across threads.
#[derive(Debug)]
pub struct Client {
    ctx: Context,
    signer: Signer,
}

impl Client {
    /// Create a new client from a context and a credential.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            ctx,
            signer: Signer::new(credential),
        }
    }

    /// Fetch the raw response body for the given action.
    ///
    /// The response status is not inspected; callers receive the body of
    /// error responses as-is.
    pub fn fetch(
        &self,
        action: &str,
        action_path: &str,
        parameters: &HashMap<String, String>,
    ) -> Result<Bytes> {
        let mut req = self.signer.build(action, action_path, parameters)?;
        self.signer.stamp(&mut req);
        let url = self.signer.sign(&req)?;

        debug!("dispatching {action} to {}", req.authority);
        let resp = self.ctx.http_fetch(&url)?;
        debug!("{action} returned {}", resp.status());

        Ok(resp.into_body())
    }

    /// Fetch the response body for the given action as a string.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn fetch_string(
        &self,
        action: &str,
        action_path: &str,
        parameters: &HashMap<String, String>,
    ) -> Result<String> {
        let body = self.fetch(action, action_path, parameters)?;
        Ok(String::from_utf8_lossy(&body).to_string())
    }
}
