//! Fuente externa de registros de vehículos
//!
//! Interfaz de suscripción push: la fuente entrega el set completo de
//! registros en cada cambio y el cliente pagina localmente.

pub mod http_fuente;
pub mod suscripcion;
