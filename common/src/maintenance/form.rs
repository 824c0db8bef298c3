//! Per-card maintenance form as a two-state machine.
//!
//! Error text and field values only exist while the form is open, so an
//! error on a closed dialog cannot be represented.

use chrono::NaiveDate;

use crate::requests::UpdateVehicleRequest;

use super::validation::{FormError, validate_assignment};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MaintenanceForm {
    #[default]
    Closed,
    Open(OpenForm),
}

/// Fields being edited in an open dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenForm {
    pub person_name: String,
    pub estimated_date: String,
    pub error: Option<FormError>,
}

impl MaintenanceForm {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Opens with blank fields. Already open forms keep what was typed.
    pub fn open(&mut self) {
        if let Self::Closed = self {
            *self = Self::Open(OpenForm::default());
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn set_person_name(&mut self, value: String) {
        if let Self::Open(form) = self {
            form.person_name = value;
        }
    }

    pub fn set_estimated_date(&mut self, value: String) {
        if let Self::Open(form) = self {
            form.estimated_date = value;
        }
    }

    pub fn error(&self) -> Option<FormError> {
        match self {
            Self::Open(form) => form.error,
            Self::Closed => None,
        }
    }

    /// Validates the open form against `today`.
    ///
    /// On failure the first failing rule is stored and `None` is returned. On
    /// success any previous error is cleared and the update body is returned;
    /// the form stays open until the caller sees the request succeed.
    pub fn submit(&mut self, today: NaiveDate) -> Option<UpdateVehicleRequest> {
        let Self::Open(form) = self else {
            return None;
        };
        match validate_assignment(&form.person_name, &form.estimated_date, today) {
            Ok(_) => {
                form.error = None;
                Some(UpdateVehicleRequest::start_maintenance(
                    form.person_name.clone(),
                    form.estimated_date.clone(),
                ))
            }
            Err(err) => {
                form.error = Some(err);
                None
            }
        }
    }

    /// Keeps the dialog open and editable with the generic server message.
    pub fn fail_with_server_error(&mut self) {
        if let Self::Open(form) = self {
            form.error = Some(FormError::Server);
        }
    }
}
