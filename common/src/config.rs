//! API location handed explicitly to every data-access call.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the vehicles API.
///
/// An empty base means same-origin, so endpoints come out as relative paths
/// (`/cars`). Trailing slashes are trimmed once at construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// `GET` target for the whole collection.
    pub fn cars_url(&self) -> String {
        format!("{}/cars", self.base_url)
    }

    /// `PUT` target for one vehicle. The backend expects the trailing slash.
    pub fn car_url(&self, id: u64) -> String {
        format!("{}/cars/{}/", self.base_url, id)
    }
}
