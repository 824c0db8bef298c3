use serde::{Deserialize, Deserializer, Serialize};

#[cfg(test)]
#[path = "vehicle_test.rs"]
mod vehicle_test;

/// Placeholder shown for any missing date or mileage.
pub const NOT_AVAILABLE: &str = "N/A";

/// A car tracked by the dashboard, exactly as `GET /cars` returns it.
///
/// Only `id` is used for addressing updates; every other field is display
/// data. Fields the backend may omit or send as `null` decode to their
/// defaults so one incomplete record never drops the whole list.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Vehicle {
    /// Backend identifier. Used as the card key and as the `PUT` target.
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub make: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    /// Free text, shown as the maintenance note.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub km: Option<f64>,
    /// Primary picture URL. A broken URL is swapped for a placeholder once.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    /// Free-form completion date, displayed as-is.
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimatedate: String,
    #[serde(default, rename = "inMaintenance", deserialize_with = "null_as_default")]
    pub in_maintenance: bool,
    #[serde(default)]
    pub person: Option<String>,
}

impl Vehicle {
    /// Stable key for list rendering: the id when present, else the position.
    pub fn card_key(&self, index: usize) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => format!("idx-{index}"),
        }
    }

    /// The assigned person, only while the vehicle is in maintenance.
    pub fn visible_person(&self) -> Option<&str> {
        if !self.in_maintenance {
            return None;
        }
        self.person.as_deref().filter(|p| !p.is_empty())
    }

    pub fn estimate_label(&self) -> &str {
        if self.estimatedate.is_empty() {
            NOT_AVAILABLE
        } else {
            &self.estimatedate
        }
    }

    /// Mileage worth displaying. Zero, negative and non-finite readings are
    /// treated as missing.
    pub fn displayable_km(&self) -> Option<u64> {
        self.km
            .filter(|km| km.is_finite() && *km > 0.0)
            .map(|km| km.round() as u64)
    }

    /// `"make | model"`, the card title.
    pub fn title(&self) -> String {
        format!("{} | {}", self.make, self.model)
    }
}

/// `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Card keys for a fetched list, in render order.
pub fn card_keys(vehicles: &[Vehicle]) -> Vec<String> {
    vehicles
        .iter()
        .enumerate()
        .map(|(index, vehicle)| vehicle.card_key(index))
        .collect()
}
