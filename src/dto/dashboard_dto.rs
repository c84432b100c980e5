use serde::{Deserialize, Serialize};

use crate::dashboard::orden::OrdenSpec;

// Proyección formateada de una fila de la tabla.
// Las fechas ya vienen en formato YYYY-MM-DD (o "---" si no existen).
// `rtm_critico` resalta la celda de vencimiento; `tiene_alerta_roja`
// gobierna el ícono de advertencia de la celda de placa.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilaVehiculo {
    pub placa: String,
    pub empresa: String,
    pub tipo: String,
    pub vence_rtm: String,
    pub vence_soat: String,
    pub rtm_critico: bool,
    pub tiene_alerta_roja: bool,
}

// Request para fijar la consulta de búsqueda
#[derive(Debug, Deserialize)]
pub struct ConsultaRequest {
    pub consulta: String,
}

// Request para fijar columna y dirección de orden
#[derive(Debug, Deserialize)]
pub struct OrdenRequest {
    pub columna: usize,
    pub ascendente: bool,
}

// Request para cambiar de página y/o tamaño de página
#[derive(Debug, Deserialize)]
pub struct PaginaRequest {
    pub pagina: Option<usize>,
    pub tamano_pagina: Option<usize>,
}

// Página renderizable de la tabla
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaginaDashboard {
    pub filas: Vec<FilaVehiculo>,
    pub total_filas: usize,
    pub filas_seleccionadas: usize,
    pub pagina: usize,
    pub tamano_pagina: usize,
    pub consulta: String,
    pub orden: OrdenSpec,
}

// Response del estado de la preferencia del menú
#[derive(Debug, Serialize)]
pub struct PreferenciaMenuResponse {
    pub menu_fijado: bool,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

