//! Maintenance toggle logic: which action a card offers, the form that
//! gathers the assignment, its validation, and the card image fallback.

pub mod action;
pub mod form;
pub mod image;
pub mod validation;
