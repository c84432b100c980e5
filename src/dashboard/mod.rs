//! Lógica de la tabla de flota
//!
//! Transformación de presentación sobre el snapshot de vehículos:
//! filtro de texto libre, orden estable por columna, clasificación de
//! alertas por vencimiento y paginación con proyección formateada.

pub mod alertas;
pub mod filtro;
pub mod orden;
pub mod paginacion;
pub mod vista;
