use super::*;

#[test]
fn unset_api_url_means_same_origin() {
    assert_eq!(config_from(None).cars_url(), "/cars");
}

#[test]
fn api_url_is_used_as_base() {
    let config = config_from(Some("http://localhost:3000/"));
    assert_eq!(config.cars_url(), "http://localhost:3000/cars");
}
