//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! a los documentos de la fuente de registros externa.

pub mod vehiculo;
