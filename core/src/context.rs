// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{Error, Result};
use bytes::Bytes;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the runtime capabilities used while dispatching
/// signed requests.
///
/// ## Important
///
/// mwsign provides NO default transport. Any unconfigured context uses a
/// no-op implementation that returns errors when called.
///
/// ## Example
///
/// ```ignore
/// use mwsign_core::Context;
/// use mwsign_http_fetch_reqwest::ReqwestHttpFetch;
///
/// let ctx = Context::new().with_http_fetch(ReqwestHttpFetch::default());
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpFetch>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").field("http", &self.http).finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with a no-op transport.
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpFetch),
        }
    }

    /// Replace the HTTP transport implementation.
    pub fn with_http_fetch(mut self, http: impl HttpFetch) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Issue a blocking GET to the given URL and return the full response.
    #[inline]
    pub fn http_fetch(&self, url: &str) -> Result<http::Response<Bytes>> {
        self.http.http_fetch(url)
    }
}

/// HttpFetch is used to perform the HTTP GET a signed URL is dispatched
/// through.
///
/// Implementations read the entire response body into memory and release
/// the underlying connection on every exit path. The call blocks the
/// calling thread for the duration of the request; implementations that
/// need bounded latency should carry their own deadline. Response status
/// codes are returned as-is and never treated as errors.
pub trait HttpFetch: Debug + Send + Sync + 'static {
    /// Issue a blocking GET and return the response with its full body.
    fn http_fetch(&self, url: &str) -> Result<http::Response<Bytes>>;
}

/// NoopHttpFetch is a no-op implementation that always returns an error.
///
/// This is used when no HTTP transport is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpFetch;

impl HttpFetch for NoopHttpFetch {
    fn http_fetch(&self, _url: &str) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected(
            "HTTP fetching not supported: no HTTP transport configured",
        ))
    }
}
