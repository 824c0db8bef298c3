use super::*;

#[test]
fn vehicle_in_maintenance_gets_direct_removal() {
    let vehicle = Vehicle {
        id: Some(3),
        in_maintenance: true,
        ..Vehicle::default()
    };
    let action = MaintenanceAction::for_vehicle(&vehicle);
    assert_eq!(action, MaintenanceAction::EndMaintenance);
    assert!(!action.opens_dialog());
    assert_eq!(action.label(), "Quitar de Mantenimiento");
}

#[test]
fn available_vehicle_opens_form() {
    let vehicle = Vehicle {
        id: Some(7),
        ..Vehicle::default()
    };
    let action = MaintenanceAction::for_vehicle(&vehicle);
    assert_eq!(action, MaintenanceAction::StartMaintenance);
    assert!(action.opens_dialog());
    assert_eq!(action.label(), "Poner en Mantenimiento");
}
