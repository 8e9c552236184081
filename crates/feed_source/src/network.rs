use std::collections::BTreeSet;

use feed_logging::feed_warn;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRequest {
    pub path: String,
    pub method: String,
    pub body: Option<String>,
}

impl NetworkRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: "GET".to_string(),
            body: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkResponse {
    pub code: u16,
    pub body: Option<String>,
}

pub trait NetworkClient {
    fn execute(&self, request: &NetworkRequest) -> NetworkResponse;
}

/// Answers requests from a fixed route table without touching the network.
#[derive(Debug, Clone)]
pub struct StubNetworkClient {
    base: Url,
    routes: BTreeSet<String>,
}

impl StubNetworkClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            routes: BTreeSet::new(),
        }
    }

    /// Registers a path, resolved against the base URL, that answers 200.
    ///
    /// A path that cannot be resolved is logged and skipped.
    #[must_use]
    pub fn with_route(mut self, path: &str) -> Self {
        match self.base.join(path) {
            Ok(resolved) => {
                self.routes.insert(resolved.path().to_string());
            }
            Err(err) => feed_warn!("Skipping stub route {:?}: {}", path, err),
        }
        self
    }
}

impl Default for StubNetworkClient {
    fn default() -> Self {
        let base = Url::parse("http://localhost/").expect("static base url is valid");
        Self::new(base).with_route("/health")
    }
}

impl NetworkClient for StubNetworkClient {
    fn execute(&self, request: &NetworkRequest) -> NetworkResponse {
        let resolved = match self.base.join(&request.path) {
            Ok(url) => url,
            Err(err) => {
                return NetworkResponse {
                    code: 400,
                    body: Some(err.to_string()),
                }
            }
        };

        if self.routes.contains(resolved.path()) {
            NetworkResponse {
                code: 200,
                body: None,
            }
        } else {
            NetworkResponse {
                code: 404,
                body: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolvable_route_is_skipped() {
        let client = StubNetworkClient::new(Url::parse("http://stub.local/").unwrap())
            .with_route("http://[::1")
            .with_route("users");

        assert_eq!(client.routes.len(), 1);
        assert_eq!(client.execute(&NetworkRequest::get("users")).code, 200);
    }
}
