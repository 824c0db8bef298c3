use super::*;

#[test]
fn cars_url_appends_collection_path() {
    let config = ApiConfig::new("http://localhost:3000");
    assert_eq!(config.cars_url(), "http://localhost:3000/cars");
}

#[test]
fn car_url_keeps_trailing_slash() {
    let config = ApiConfig::new("http://localhost:3000");
    assert_eq!(config.car_url(7), "http://localhost:3000/cars/7/");
}

#[test]
fn trailing_slashes_on_base_are_trimmed() {
    let config = ApiConfig::new("https://api.example.com//");
    assert_eq!(config.car_url(1), "https://api.example.com/cars/1/");
    assert_eq!(config.cars_url(), "https://api.example.com/cars");
}

#[test]
fn empty_base_yields_relative_paths() {
    let config = ApiConfig::default();
    assert_eq!(config.cars_url(), "/cars");
    assert_eq!(config.car_url(12), "/cars/12/");
}
