//! REST calls against the vehicles backend.
//!
//! Both calls take the `ApiConfig` explicitly. Any non-2xx answer is an
//! error; the body of a successful `PUT` is ignored.

use common::config::ApiConfig;
use common::model::vehicle::Vehicle;
use common::requests::UpdateVehicleRequest;
use gloo_net::http::Request;
use thiserror::Error;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("could not encode request body: {0}")]
    Serialize(String),
    #[error("could not decode response body: {0}")]
    Decode(String),
    #[error("vehicle has no id")]
    MissingId,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// `GET {base}/cars`.
pub async fn fetch_vehicles(config: &ApiConfig) -> Result<Vec<Vehicle>, ApiError> {
    let response = Request::get(&config.cars_url()).send().await?;
    check_status(response.status())?;
    Ok(response.json::<Vec<Vehicle>>().await?)
}

/// `PUT {base}/cars/{id}/`.
pub async fn update_vehicle(
    config: &ApiConfig,
    id: Option<u64>,
    body: &UpdateVehicleRequest,
) -> Result<(), ApiError> {
    let id = id.ok_or(ApiError::MissingId)?;
    let request = Request::put(&config.car_url(id))
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    let response = request.send().await?;
    check_status(response.status())
}
