pub mod maintenance_dialog;
pub mod vehicles;
