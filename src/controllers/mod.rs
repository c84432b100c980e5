pub mod dashboard_controller;
pub mod preferencias_controller;
