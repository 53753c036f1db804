use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use mwsign_core::{Context, HttpFetch, Result};
use mwsign_marketplace::{Client, Credential};
use pretty_assertions::assert_eq;

/// Transport double that records every dispatched URL and replies with a
/// canned body.
#[derive(Debug, Clone, Default)]
struct RecordingHttpFetch {
    urls: Arc<Mutex<Vec<String>>>,
}

impl RecordingHttpFetch {
    fn last_url(&self) -> String {
        self.urls
            .lock()
            .expect("lock must not be poisoned")
            .last()
            .expect("a request must have been dispatched")
            .clone()
    }
}

impl HttpFetch for RecordingHttpFetch {
    fn http_fetch(&self, url: &str) -> Result<http::Response<Bytes>> {
        self.urls
            .lock()
            .expect("lock must not be poisoned")
            .push(url.to_string());
        Ok(http::Response::new(Bytes::from_static(
            b"<ListOrdersResponse/>",
        )))
    }
}

fn test_credential() -> Credential {
    Credential {
        access_key_id: "AKID".to_string(),
        secret_access_key: "secret".to_string(),
        host: "mws.example.com".to_string(),
        marketplace_id: "ATVPDKIKX0DER".to_string(),
        seller_id: "SELLER123".to_string(),
    }
}

#[test]
fn test_fetch_dispatches_signed_url() {
    let _ = env_logger::builder().is_test(true).try_init();

    let transport = RecordingHttpFetch::default();
    let ctx = Context::new().with_http_fetch(transport.clone());
    let client = Client::new(ctx, test_credential());

    let parameters = HashMap::from_iter([(
        "MarketplaceId.Id.1".to_string(),
        "ATVPDKIKX0DER".to_string(),
    )]);
    let body = client
        .fetch("ListOrders", "/Orders/2011-01-01", &parameters)
        .expect("fetch must succeed");
    assert_eq!(body, Bytes::from_static(b"<ListOrdersResponse/>"));

    let url = transport.last_url();
    let (base, query) = url.split_once('?').expect("url must carry a query");
    assert_eq!(base, "https://mws.example.com/Orders/2011-01-01");

    let fragments: Vec<&str> = query.split('&').collect();
    assert!(fragments.iter().any(|f| f.starts_with("Timestamp=")));
    assert!(fragments.iter().any(|f| f.starts_with("Signature=")));
    assert!(fragments.contains(&"SellerId=SELLER123"));
    assert!(fragments.contains(&"Version=2011-01-01"));
    assert!(fragments.contains(&"MarketplaceId.Id.1=ATVPDKIKX0DER"));

    // The signature comes last; everything before it is sorted.
    assert!(fragments
        .last()
        .expect("query must not be empty")
        .starts_with("Signature="));
    let canonical = &fragments[..fragments.len() - 1];
    let mut sorted = canonical.to_vec();
    sorted.sort_unstable();
    assert_eq!(canonical, &sorted[..]);
}

#[test]
fn test_fetch_pathless_action_uses_merchant() {
    let transport = RecordingHttpFetch::default();
    let ctx = Context::new().with_http_fetch(transport.clone());
    let client = Client::new(ctx, test_credential());

    client
        .fetch("GetReport", "", &HashMap::new())
        .expect("fetch must succeed");

    let url = transport.last_url();
    let (base, query) = url.split_once('?').expect("url must carry a query");
    assert_eq!(base, "https://mws.example.com");

    let fragments: Vec<&str> = query.split('&').collect();
    assert!(fragments.contains(&"Merchant=SELLER123"));
    assert!(fragments.contains(&"Version=2009-01-01"));
    assert!(!fragments.iter().any(|f| f.starts_with("SellerId=")));
}

#[test]
fn test_fetch_string_returns_body() {
    let transport = RecordingHttpFetch::default();
    let ctx = Context::new().with_http_fetch(transport);
    let client = Client::new(ctx, test_credential());

    let body = client
        .fetch_string("ListOrders", "/Orders/2011-01-01", &HashMap::new())
        .expect("fetch must succeed");
    assert_eq!(body, "<ListOrdersResponse/>");
}

#[test]
fn test_fetch_without_transport_fails() {
    let client = Client::new(Context::new(), test_credential());

    let res = client.fetch("ListOrders", "/Orders/2011-01-01", &HashMap::new());
    assert!(res.is_err());
}
