use common::config::ApiConfig;
use common::model::vehicle::Vehicle;
use yew::prelude::*;

/// Properties for the `VehicleCardComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct VehicleCardProps {
    /// The vehicle as last fetched from the backend.
    pub vehicle: Vehicle,
    /// Where update requests go.
    pub config: ApiConfig,
    /// Fired after a successful update so the list can re-fetch.
    pub on_updated: Callback<()>,
}
