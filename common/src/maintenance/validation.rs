use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// `chrono` pattern for the estimated completion date.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

// chrono alone accepts unpadded fields such as `2024/1/5`.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}/[0-9]{2}/[0-9]{2}$").expect("date shape pattern"));

/// Everything the maintenance form can show under its fields.
///
/// The `Display` text is what the operator reads.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Debe llenar todos los campos")]
    EmptyFields,
    #[error("Formato de fecha incorrecta (YYYY/MM/DD)")]
    InvalidDate,
    #[error("La fecha debe ser mayor a la fecha actual")]
    DateBeforeToday,
    #[error("Ups! Ocurrió un error en el servidor, inténtelo más tarde")]
    Server,
}

/// Strict `YYYY/MM/DD` parse: zero-padded ASCII digits and a real calendar day.
pub fn parse_estimated_date(input: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE.is_match(input) {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

/// Checks the two form fields in a fixed order; the first failing rule wins.
///
/// 1. either field empty
/// 2. date not strictly `YYYY/MM/DD`
/// 3. date before `today` (today itself passes)
pub fn validate_assignment(
    person_name: &str,
    estimated_date: &str,
    today: NaiveDate,
) -> Result<NaiveDate, FormError> {
    if person_name.is_empty() || estimated_date.is_empty() {
        return Err(FormError::EmptyFields);
    }
    let date = parse_estimated_date(estimated_date).ok_or(FormError::InvalidDate)?;
    if date < today {
        return Err(FormError::DateBeforeToday);
    }
    Ok(date)
}
