//! Shared model and decision logic for the fleet maintenance dashboard.
//!
//! Nothing in this crate touches the browser: the frontend feeds it values
//! (fetched vehicles, typed fields, today's date) and renders what it returns.

pub mod config;
pub mod maintenance;
pub mod model;
pub mod requests;
