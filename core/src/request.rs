use std::str::FromStr;

use http::uri::Authority;
use http::uri::Scheme;

use crate::{Error, Result};

/// Structured form of an unsigned request URL.
///
/// The query is held as decoded pairs until a canonical string is needed,
/// so stamping and caller overrides never re-parse an encoded string.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// URL scheme.
    pub scheme: Scheme,
    /// Host (and optional port) the request is addressed to.
    pub authority: Authority,
    /// Request path, stored verbatim.
    pub path: String,
    /// Query parameters as decoded pairs.
    pub query: Vec<(String, String)>,
}

impl SigningRequest {
    /// Build a signing request for the given scheme, host and path.
    ///
    /// Fails with [`ErrorKind::RequestInvalid`](crate::ErrorKind) if the
    /// host does not parse as a URL authority.
    pub fn new(scheme: Scheme, host: &str, path: &str) -> Result<Self> {
        let authority = Authority::from_str(host)
            .map_err(|e| Error::request_invalid(format!("failed to parse host: {e}")))?;

        Ok(SigningRequest {
            scheme,
            authority,
            path: path.to_string(),
            query: Vec::new(),
        })
    }

    /// Set a query pair, replacing any existing pair with the same key.
    pub fn query_set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.query.push((key, value)),
        }
    }

    /// Get a query value by key.
    pub fn query_get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize the query in application/x-www-form-urlencoded form,
    /// sorted by key.
    ///
    /// Spaces encode as `+` and reserved bytes as `%XX`. Sorting makes the
    /// output independent of insertion order.
    pub fn encoded_query(&self) -> String {
        let mut pairs: Vec<&(String, String)> = self.query.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }

    /// Assemble the full URL string around the given encoded query.
    pub fn url_with_query(&self, query: &str) -> String {
        if query.is_empty() {
            format!("{}://{}{}", self.scheme, self.authority, self.path)
        } else {
            format!("{}://{}{}?{}", self.scheme, self.authority, self.path, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_rejects_invalid_host() {
        let res = SigningRequest::new(Scheme::HTTPS, "not a host", "/");
        assert!(res.is_err());
    }

    #[test]
    fn test_query_set_replaces_existing_key() {
        let mut req = SigningRequest::new(Scheme::HTTPS, "mws.example.com", "/").unwrap();
        req.query_set("Version", "2009-01-01");
        req.query_set("Action", "GetReport");
        req.query_set("Version", "2011-01-01");

        assert_eq!(req.query_get("Version"), Some("2011-01-01"));
        assert_eq!(req.query.len(), 2);
    }

    #[test]
    fn test_encoded_query_sorts_by_key() {
        let mut req = SigningRequest::new(Scheme::HTTPS, "mws.example.com", "/").unwrap();
        req.query_set("b", "2");
        req.query_set("a", "1");
        req.query_set("c", "3");

        assert_eq!(req.encoded_query(), "a=1&b=2&c=3");
    }

    #[test]
    fn test_encoded_query_escapes_reserved_bytes() {
        let mut req = SigningRequest::new(Scheme::HTTPS, "mws.example.com", "/").unwrap();
        req.query_set("Timestamp", "2011-01-01T07:20:04Z");
        req.query_set("Title", "a,b c");

        assert_eq!(
            req.encoded_query(),
            "Timestamp=2011-01-01T07%3A20%3A04Z&Title=a%2Cb+c"
        );
    }

    #[test]
    fn test_url_with_query() {
        let req = SigningRequest::new(Scheme::HTTPS, "mws.example.com", "/Orders/2011-01-01")
            .expect("host must parse");

        assert_eq!(
            req.url_with_query("a=1&b=2"),
            "https://mws.example.com/Orders/2011-01-01?a=1&b=2"
        );
        assert_eq!(
            req.url_with_query(""),
            "https://mws.example.com/Orders/2011-01-01"
        );
    }

    #[test]
    fn test_url_with_query_empty_path() {
        let req = SigningRequest::new(Scheme::HTTPS, "mws.example.com", "").unwrap();

        assert_eq!(req.url_with_query("a=1"), "https://mws.example.com?a=1");
    }
}
