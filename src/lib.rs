//! Gestión RTM - Dashboard de Flota
//!
//! Backend del dashboard de vehículos: vista filtrada/ordenada/paginada
//! sobre el snapshot vigente de la fuente de registros, preferencia del
//! menú lateral persistida en Redis y notificaciones de navegación.

pub mod cache;
pub mod config;
pub mod controllers;
pub mod dashboard;
pub mod dto;
pub mod fuente;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
