//! Acceso key-value externo
//!
//! Cliente Redis y store de preferencias de usuario.

pub mod preferencias;
pub mod redis_client;
