//! Build-time API location.
//!
//! `API_URL` is baked in when `trunk build` compiles the crate, the same way a
//! bundler inlines its environment. It is read here only and then passed
//! down as an `ApiConfig` value.

use common::config::ApiConfig;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Configuration the app starts with.
pub fn api_config() -> ApiConfig {
    config_from(option_env!("API_URL"))
}

fn config_from(base_url: Option<&str>) -> ApiConfig {
    base_url.map(ApiConfig::new).unwrap_or_default()
}
