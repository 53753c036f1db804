//! Core components for signing Marketplace Web Service requests.
//!
//! This crate provides the foundational types for the mwsign ecosystem:
//!
//! - **Context**: a container holding the HTTP transport used to dispatch
//!   signed requests
//! - **SigningRequest**: the structured form of an unsigned request URL,
//!   mutated by the service signer before being finalized into a string
//! - **Error**: the structured error type shared by all mwsign crates
//!
//! Service crates (such as `mwsign-marketplace`) build on these types to
//! implement the vendor-specific parameter set and signature algorithm.
//! Transport crates (such as `mwsign-http-fetch-reqwest`) plug a concrete
//! HTTP client into the [`Context`].
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA256 and base64 helpers
//! - [`time`]: UTC timestamp helpers
//! - [`utils`]: secret redaction for `Debug` output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::HttpFetch;
pub use context::NoopHttpFetch;

mod error;
pub use error::{Error, ErrorKind, Result};

mod request;
pub use request::SigningRequest;
