//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Hay un único holder reactivo: el receptor
//! del canal de snapshots más el estado de UI del dashboard.

use std::sync::Arc;

use tokio::sync::{watch, RwLock};

use crate::cache::preferencias::{PreferenciasStore, CLAVE_MENU_FIJADO};
use crate::config::environment::EnvironmentConfig;
use crate::dashboard::vista::DashboardEstado;
use crate::models::vehiculo::EstadoFuente;
use crate::services::navegacion_service::Navegacion;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    /// Último snapshot entregado por la fuente de registros
    pub fuente: watch::Receiver<EstadoFuente>,
    /// Estado de UI del dashboard (consulta, orden, paginación, menú)
    pub dashboard: Arc<RwLock<DashboardEstado>>,
    pub preferencias: Arc<dyn PreferenciasStore>,
    pub navegacion: Arc<dyn Navegacion>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        fuente: watch::Receiver<EstadoFuente>,
        preferencias: Arc<dyn PreferenciasStore>,
        navegacion: Arc<dyn Navegacion>,
    ) -> Self {
        Self {
            config,
            fuente,
            dashboard: Arc::new(RwLock::new(DashboardEstado::default())),
            preferencias,
            navegacion,
        }
    }

    /// Leer la preferencia del menú al arranque y sembrar el estado de UI.
    /// Si el store no responde se queda el defecto (menú libre).
    pub async fn cargar_preferencias(&self) {
        let fijado = self
            .preferencias
            .obtener_o_defecto(CLAVE_MENU_FIJADO, false)
            .await;

        log::info!("📌 Preferencia de menú al arranque: fijado={}", fijado);

        let mut estado = self.dashboard.write().await;
        estado.menu_fijado = fijado;
    }

    /// Snapshot vigente de la fuente (clonado para renderizar sin lock)
    pub fn snapshot_actual(&self) -> EstadoFuente {
        self.fuente.borrow().clone()
    }
}
