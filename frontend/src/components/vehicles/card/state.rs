use common::maintenance::form::MaintenanceForm;
use common::maintenance::image::CardImage;
use common::model::vehicle::Vehicle;

/// Local, per-card interaction state. Nothing here outlives a re-fetch of
/// the vehicle it was built from.
pub struct VehicleCardComponent {
    /// Maintenance dialog; closed until the operator asks to start maintenance.
    pub form: MaintenanceForm,

    /// Picture source with its one-shot fallback.
    pub image: CardImage,
}

impl VehicleCardComponent {
    pub fn new(vehicle: &Vehicle) -> Self {
        Self {
            form: MaintenanceForm::default(),
            image: CardImage::new(vehicle.image.clone()),
        }
    }
}
