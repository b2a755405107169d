//! REST helpers for the public car catalog.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `CatalogError::Unavailable` since the
//! catalog is only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed fetch degrades
//! the page to an empty / not-found state. There is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Car, CarId};

/// Public catalog endpoint used when no build-time override is set.
pub const DEFAULT_CATALOG_URL: &str = "https://www.freetestapi.com/api/v1";

/// Failure to obtain catalog data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Transport, HTTP status, or decoding failure.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    /// The requested id does not exist in the catalog.
    #[error("car {0} not found")]
    NotFound(CarId),
}

/// Catalog base URL, overridable at build time with `CARFINDR_CATALOG_URL`.
pub fn catalog_base_url() -> &'static str {
    option_env!("CARFINDR_CATALOG_URL")
        .unwrap_or(DEFAULT_CATALOG_URL)
        .trim_end_matches('/')
}

/// URL of the full car collection.
pub fn cars_url(base: &str) -> String {
    format!("{}/cars", base.trim_end_matches('/'))
}

/// URL of a single car record.
pub fn car_url(base: &str, id: CarId) -> String {
    format!("{}/{id}", cars_url(base))
}

/// Parse a `/car/{id}` route segment.
pub fn parse_car_id(raw: &str) -> Option<CarId> {
    raw.trim().parse().ok()
}

/// Whether a finished fetch for `fetched` still belongs to the routed id.
///
/// Route changes start a new fetch without cancelling the old one, so a late
/// response for a previous id must be dropped.
pub fn is_current_fetch(route_id: Option<CarId>, fetched: CarId) -> bool {
    route_id == Some(fetched)
}

/// Map a non-success HTTP status to a catalog error.
pub fn status_error(status: u16, id: Option<CarId>) -> CatalogError {
    match (status, id) {
        (404, Some(id)) => CatalogError::NotFound(id),
        _ => CatalogError::Unavailable(format!("request failed: {status}")),
    }
}

/// Fetch the full catalog via `GET /cars`.
///
/// # Errors
///
/// Returns `CatalogError::Unavailable` if the request or decoding fails.
pub async fn fetch_cars() -> Result<Vec<Car>, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let url = cars_url(catalog_base_url());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status(), None));
        }
        resp.json::<Vec<Car>>()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(CatalogError::Unavailable("not available on server".to_owned()))
    }
}

/// Fetch a single car via `GET /cars/{id}`.
///
/// # Errors
///
/// Returns `CatalogError::NotFound` on a 404 and `CatalogError::Unavailable`
/// for any other failure.
pub async fn fetch_car(id: CarId) -> Result<Car, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let url = car_url(catalog_base_url(), id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status(), Some(id)));
        }
        // Unknown ids come back as an empty object on some catalog deployments.
        resp.json::<Car>().await.map_err(|_| CatalogError::NotFound(id))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(CatalogError::Unavailable("not available on server".to_owned()))
    }
}
