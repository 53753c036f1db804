//! Marketplace Web Service signer
//!
//! Builds signed query-string URLs for marketplace API actions and
//! dispatches them over a [`mwsign_core::Context`] transport.

mod client;
pub use client::Client;

mod credential;
pub use credential::Credential;

mod signer;
pub use signer::Signer;

mod constants;
