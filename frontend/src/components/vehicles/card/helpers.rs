//! Small formatting and browser helpers for the vehicle card.

use chrono::NaiveDate;
use common::model::vehicle::{Vehicle, NOT_AVAILABLE};
use num_format::{Locale, ToFormattedString};

#[cfg(test)]
#[path = "helpers_test.rs"]
mod helpers_test;

/// Mileage with thousands grouping, or `N/A`.
pub fn km_label(vehicle: &Vehicle) -> String {
    match vehicle.displayable_km() {
        Some(km) => km.to_formatted_string(&Locale::en),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn card_class(in_maintenance: bool) -> &'static str {
    if in_maintenance {
        "car-card col s12 m4 l4 in-maintenance"
    } else {
        "car-card col s12 m4 l4"
    }
}

/// Local calendar date according to the browser clock.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or(NaiveDate::MIN)
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}
