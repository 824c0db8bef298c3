use crate::model::vehicle::Vehicle;

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

/// The single primary action a vehicle card offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaintenanceAction {
    /// Opens the assignment form; nothing is sent until it validates.
    StartMaintenance,
    /// Sends the clearing update straight away, no dialog and no checks.
    EndMaintenance,
}

impl MaintenanceAction {
    pub fn for_vehicle(vehicle: &Vehicle) -> Self {
        if vehicle.in_maintenance {
            Self::EndMaintenance
        } else {
            Self::StartMaintenance
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StartMaintenance => "Poner en Mantenimiento",
            Self::EndMaintenance => "Quitar de Mantenimiento",
        }
    }

    pub fn opens_dialog(self) -> bool {
        matches!(self, Self::StartMaintenance)
    }
}
