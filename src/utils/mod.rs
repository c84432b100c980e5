//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y formato de fechas.

pub mod errors;
pub mod fecha;
pub mod validation;
