mod error;
mod route;
mod stations;

pub use error::ApiError;

use crate::constants::FALLBACK_PAGE_BASE;
use crate::models::{RouteResponse, Station};
use crate::pipeline::RouteRequest;
use reqwest::Url;

/// Anything that can produce the full station directory
#[allow(async_fn_in_trait)]
pub trait StationSource {
    /// Fetch every station record
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success,
    /// or the body is not a JSON array of stations.
    async fn fetch_stations(&self) -> Result<Vec<Station>, ApiError>;
}

/// Anything that can compute a route for a request
#[allow(async_fn_in_trait)]
pub trait RouteService {
    /// Submit a route request and decode the reply body
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    /// Error replies from the service are not errors here; they decode into
    /// a [`RouteResponse`] with its `error` field set.
    async fn find_route(&self, request: &RouteRequest) -> Result<RouteResponse, ApiError>;
}

/// HTTP client for the station directory and routing endpoints
///
/// Endpoint paths are resolved relative to the page the app is served from.
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base: Url,
}

impl HttpApi {
    /// Create a client rooted at the current page URL
    ///
    /// # Errors
    ///
    /// Returns an error if the page URL cannot be parsed.
    pub fn from_page() -> Result<Self, ApiError> {
        Self::with_base(&page_base())
    }

    /// Create a client rooted at an explicit base URL
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not an absolute URL.
    pub fn with_base(base: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base).map_err(|_| ApiError::InvalidUrl { url: base.to_string() })?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|_| ApiError::InvalidUrl { url: path.to_string() })
    }
}

#[cfg(target_arch = "wasm32")]
fn page_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(|| FALLBACK_PAGE_BASE.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_base() -> String {
    FALLBACK_PAGE_BASE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIND_ROUTE_ENDPOINT, STATIONS_ENDPOINT};

    #[test]
    fn test_endpoints_resolve_relative_to_page() {
        let api = HttpApi::with_base("https://example.org/planner/index.html").expect("valid base");
        assert_eq!(
            api.endpoint(STATIONS_ENDPOINT).expect("valid endpoint").as_str(),
            "https://example.org/planner/api/stations"
        );
        assert_eq!(
            api.endpoint(FIND_ROUTE_ENDPOINT).expect("valid endpoint").as_str(),
            "https://example.org/planner/api/find_route"
        );
    }

    #[test]
    fn test_native_page_base() {
        let api = HttpApi::from_page().expect("fallback base parses");
        assert_eq!(
            api.endpoint(STATIONS_ENDPOINT).expect("valid endpoint").as_str(),
            "http://localhost:5001/api/stations"
        );
    }

    #[test]
    fn test_relative_base_is_rejected() {
        let result = HttpApi::with_base("planner/");
        assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
    }
}
