//! Clasificación de alertas de vencimiento RTM
//!
//! El flag "crítico" se deriva localmente contra el reloj de pared al
//! momento de renderizar; es distinto de `tiene_alerta_roja`, que viene
//! precalculado por la fuente y gobierna el ícono de la celda de placa.

use chrono::{DateTime, Utc};

use crate::models::vehiculo::Vehiculo;

/// Umbral de criticidad del RTM en días
pub const DIAS_ALERTA_RTM: i64 = 10;

/// Determinar si el RTM del vehículo está en estado crítico.
///
/// Crítico = el vencimiento existe y faltan menos de 10 días. La diferencia
/// se trunca a días completos, así que 9 días y 23 horas cuenta como 9 días
/// (crítico) y exactamente 10 días no lo es. Un vencimiento ausente nunca
/// es crítico.
pub fn rtm_critico(vehiculo: &Vehiculo, ahora: DateTime<Utc>) -> bool {
    match vehiculo.vence_rtm {
        Some(vence) => (vence - ahora).num_days() < DIAS_ALERTA_RTM,
        None => false,
    }
}
