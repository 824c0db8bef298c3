use super::*;

#[test]
fn start_maintenance_serializes_backend_field_names() {
    let body = UpdateVehicleRequest::start_maintenance("Ana", "2999/01/01");
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "personName": "Ana",
            "estimadatedDate": "2999/01/01",
            "inMaintenance": true
        })
    );
}

#[test]
fn end_maintenance_clears_assignment() {
    let body = UpdateVehicleRequest::end_maintenance();
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "personName": "",
            "estimadatedDate": "",
            "inMaintenance": false
        })
    );
}
