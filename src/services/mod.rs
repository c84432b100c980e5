//! Servicios del sistema

pub mod navegacion_service;
