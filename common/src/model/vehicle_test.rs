use super::*;

fn sample() -> Vehicle {
    Vehicle {
        id: Some(7),
        make: "Toyota".to_owned(),
        model: "Hilux".to_owned(),
        description: "Cambio de aceite".to_owned(),
        km: Some(12_000.0),
        image: "https://img.example.com/hilux.png".to_owned(),
        estimatedate: "2999/01/01".to_owned(),
        in_maintenance: false,
        person: Some("Ana".to_owned()),
    }
}

#[test]
fn decodes_backend_record_with_camel_case_flag() {
    let json = r#"{
        "id": 3,
        "make": "Ford",
        "model": "Ranger",
        "description": "Frenos",
        "km": 5400,
        "image": "https://img.example.com/ranger.png",
        "estimatedate": "2024/05/01",
        "inMaintenance": true,
        "person": "Luis"
    }"#;
    let vehicle: Vehicle = serde_json::from_str(json).unwrap();
    assert_eq!(vehicle.id, Some(3));
    assert_eq!(vehicle.km, Some(5400.0));
    assert!(vehicle.in_maintenance);
    assert_eq!(vehicle.person.as_deref(), Some("Luis"));
}

#[test]
fn missing_optional_fields_take_defaults() {
    let json = r#"{ "id": 1, "make": "Kia", "model": "Rio" }"#;
    let vehicle: Vehicle = serde_json::from_str(json).unwrap();
    assert!(!vehicle.in_maintenance);
    assert_eq!(vehicle.km, None);
    assert_eq!(vehicle.person, None);
    assert_eq!(vehicle.estimatedate, "");
}

#[test]
fn null_km_decodes_as_absent() {
    let json = r#"{ "id": 1, "km": null }"#;
    let vehicle: Vehicle = serde_json::from_str(json).unwrap();
    assert_eq!(vehicle.displayable_km(), None);
}

#[test]
fn card_keys_follow_list_length_and_ids() {
    let mut anonymous = sample();
    anonymous.id = None;
    let mut other = sample();
    other.id = Some(42);

    let keys = card_keys(&[sample(), anonymous, other]);
    assert_eq!(keys, vec!["7", "idx-1", "42"]);
}

#[test]
fn card_keys_empty_for_empty_list() {
    assert!(card_keys(&[]).is_empty());
}

#[test]
fn person_hidden_when_not_in_maintenance() {
    let vehicle = sample();
    assert!(vehicle.person.is_some());
    assert_eq!(vehicle.visible_person(), None);
}

#[test]
fn person_shown_when_in_maintenance() {
    let mut vehicle = sample();
    vehicle.in_maintenance = true;
    assert_eq!(vehicle.visible_person(), Some("Ana"));
}

#[test]
fn empty_person_is_not_shown() {
    let mut vehicle = sample();
    vehicle.in_maintenance = true;
    vehicle.person = Some(String::new());
    assert_eq!(vehicle.visible_person(), None);
}

#[test]
fn estimate_label_falls_back_to_not_available() {
    let mut vehicle = sample();
    assert_eq!(vehicle.estimate_label(), "2999/01/01");
    vehicle.estimatedate.clear();
    assert_eq!(vehicle.estimate_label(), NOT_AVAILABLE);
}

#[test]
fn displayable_km_rejects_zero_and_negative() {
    let mut vehicle = sample();
    assert_eq!(vehicle.displayable_km(), Some(12_000));
    vehicle.km = Some(0.0);
    assert_eq!(vehicle.displayable_km(), None);
    vehicle.km = Some(-5.0);
    assert_eq!(vehicle.displayable_km(), None);
    vehicle.km = Some(f64::NAN);
    assert_eq!(vehicle.displayable_km(), None);
}

#[test]
fn title_joins_make_and_model() {
    assert_eq!(sample().title(), "Toyota | Hilux");
}

#[test]
fn null_fields_do_not_drop_the_list() {
    let json = r#"[
        { "id": 1, "make": "Kia", "model": "Rio", "estimatedate": null },
        { "id": 2, "make": "Ford", "model": "Ka", "inMaintenance": null, "person": null },
        { "id": 3, "make": null, "model": "Hilux", "description": null, "image": null }
    ]"#;
    let vehicles: Vec<Vehicle> = serde_json::from_str(json).unwrap();
    assert_eq!(vehicles.len(), 3);
    assert_eq!(vehicles[0].estimate_label(), NOT_AVAILABLE);
    assert!(!vehicles[1].in_maintenance);
    assert_eq!(vehicles[1].visible_person(), None);
    assert_eq!(vehicles[2].make, "");
    assert_eq!(vehicles[2].description, "");
    assert_eq!(vehicles[2].image, "");
    assert_eq!(card_keys(&vehicles), vec!["1", "2", "3"]);
}
