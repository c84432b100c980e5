use chrono::Utc;

use crate::dashboard::filtro::filtrar;
use crate::dashboard::orden::{ordenar, OrdenSpec};
use crate::dashboard::paginacion::{tamano_pagina_valido, VehiculosDataSource, TAMANOS_PAGINA};
use crate::dashboard::vista::{construir_vista, VistaDashboard};
use crate::dto::dashboard_dto::{FilaVehiculo, OrdenRequest, PaginaRequest};
use crate::models::vehiculo::EstadoFuente;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

/// Controller del dashboard: aplica las transiciones de estado y arma la
/// vista contra el snapshot vigente. Cada render recalcula todo el
/// pipeline filtro -> orden -> paginación.
pub struct DashboardController {
    state: AppState,
}

impl DashboardController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Vista actual (cargando / error / página de datos)
    pub async fn vista(&self) -> VistaDashboard {
        let snapshot = self.state.snapshot_actual();
        let estado = self.state.dashboard.read().await.clone();
        construir_vista(&snapshot, &estado, Utc::now())
    }

    /// Proyección de una fila por índice absoluto sobre la secuencia
    /// filtrada y ordenada vigente.
    pub async fn fila(&self, indice: usize) -> AppResult<FilaVehiculo> {
        let snapshot = self.state.snapshot_actual();
        let estado = self.state.dashboard.read().await.clone();

        let vehiculos = match &snapshot {
            EstadoFuente::Datos(vehiculos) => vehiculos,
            EstadoFuente::Cargando => {
                return Err(AppError::ServiceUnavailable(
                    "La fuente de vehículos todavía está cargando".to_string(),
                ))
            }
            EstadoFuente::Error(mensaje) => {
                return Err(AppError::ServiceUnavailable(mensaje.clone()))
            }
        };

        let mut filtrados = filtrar(vehiculos, &estado.consulta);
        ordenar(&mut filtrados, &estado.orden);

        let source = VehiculosDataSource::new(filtrados, Utc::now());
        source
            .fila(indice)
            .ok_or_else(|| AppError::NotFound(format!("No existe la fila {}", indice)))
    }

    /// Transición set-consulta; devuelve la vista recalculada
    pub async fn establecer_consulta(&self, consulta: &str) -> VistaDashboard {
        {
            let mut estado = self.state.dashboard.write().await;
            *estado = estado.clone().con_consulta(consulta);
        }
        self.vista().await
    }

    /// Transición set-orden. Una columna fuera de rango se acepta: el
    /// comparador cae a placa (default defensivo, no es un error).
    pub async fn establecer_orden(&self, request: OrdenRequest) -> VistaDashboard {
        {
            let mut estado = self.state.dashboard.write().await;
            *estado = estado.clone().con_orden(OrdenSpec {
                columna: request.columna,
                ascendente: request.ascendente,
            });
        }
        self.vista().await
    }

    /// Transición set-pagina; el tamaño debe pertenecer al conjunto permitido
    pub async fn establecer_pagina(&self, request: PaginaRequest) -> AppResult<VistaDashboard> {
        if let Some(tamano) = request.tamano_pagina {
            if !tamano_pagina_valido(tamano) {
                return Err(AppError::BadRequest(format!(
                    "Tamaño de página inválido: {} (permitidos: {:?})",
                    tamano, TAMANOS_PAGINA
                )));
            }
        }

        {
            let mut estado = self.state.dashboard.write().await;
            *estado = estado
                .clone()
                .con_pagina(request.pagina, request.tamano_pagina);
        }
        Ok(self.vista().await)
    }
}
