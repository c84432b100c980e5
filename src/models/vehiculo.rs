//! Modelo de Vehículo
//!
//! Este módulo contiene el struct Vehiculo tal como lo entrega la fuente
//! de registros hospedada, y el estado del snapshot en curso.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vehículo de la flota - mapea exactamente al documento de la fuente externa.
///
/// Los registros son de solo lectura para este servicio: no se crean, mutan
/// ni destruyen aquí. `placa` se trata como única a efectos de presentación
/// pero la unicidad nunca se verifica (se confía en la fuente).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehiculo {
    pub placa: String,
    pub empresa: String,
    pub tipo: String,
    #[serde(rename = "venceRTM")]
    pub vence_rtm: Option<DateTime<Utc>>,
    #[serde(rename = "venceSOAT")]
    pub vence_soat: Option<DateTime<Utc>>,
    /// Alerta precalculada por la fuente; independiente del flag "crítico"
    /// que se deriva localmente sobre el vencimiento RTM.
    #[serde(rename = "tieneAlertaRoja", default)]
    pub tiene_alerta_roja: bool,
}

/// Estado del snapshot entregado por la fuente de registros.
///
/// La fuente empuja snapshots completos; cada entrega reemplaza a la
/// anterior y la vista se recalcula desde cero (sin diffing incremental).
#[derive(Debug, Clone, PartialEq)]
pub enum EstadoFuente {
    /// La suscripción todavía no entregó el primer snapshot.
    Cargando,
    /// La fuente falló; se degrada a un estado fijo de error.
    Error(String),
    /// Snapshot completo y vigente de la colección.
    Datos(Vec<Vehiculo>),
}

impl EstadoFuente {
    /// Mensaje fijo de error de carga (sin distinción transitorio/fatal)
    pub fn error_de_carga() -> Self {
        EstadoFuente::Error("Error al cargar datos".to_string())
    }
}
