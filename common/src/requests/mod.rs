use serde::Serialize;

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

/// Body of `PUT /cars/{id}/`.
///
/// Field names are fixed by the existing backend, including the
/// `estimadatedDate` spelling.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UpdateVehicleRequest {
    #[serde(rename = "personName")]
    pub person_name: String,
    #[serde(rename = "estimadatedDate")]
    pub estimadated_date: String,
    #[serde(rename = "inMaintenance")]
    pub in_maintenance: bool,
}

impl UpdateVehicleRequest {
    pub fn start_maintenance(
        person_name: impl Into<String>,
        estimated_date: impl Into<String>,
    ) -> Self {
        Self {
            person_name: person_name.into(),
            estimadated_date: estimated_date.into(),
            in_maintenance: true,
        }
    }

    /// Clears the assignment along with the flag.
    pub fn end_maintenance() -> Self {
        Self {
            person_name: String::new(),
            estimadated_date: String::new(),
            in_maintenance: false,
        }
    }
}
