pub mod dashboard_routes;
pub mod navegacion_routes;
pub mod preferencias_routes;
