//! Frontera de navegación
//!
//! Colaborador externo que recibe la petición de abrir la pantalla de
//! registro y las notificaciones efímeras de una línea. Este servicio no
//! consume ningún valor de retorno de la frontera.

use anyhow::Result;
use tracing::info;

/// Operaciones de la frontera de navegación
#[async_trait::async_trait]
pub trait Navegacion: Send + Sync {
    /// Pedir que se abra la pantalla "Registrar Vehículo"
    async fn abrir_registro(&self) -> Result<()>;

    /// Mostrar una notificación efímera de estado de una línea
    async fn notificar(&self, mensaje: &str) -> Result<()>;
}

/// Implementación por defecto: registra la intención en el log.
/// La pantalla real vive fuera de este sistema.
#[derive(Clone, Default)]
pub struct NavegacionLog;

impl NavegacionLog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Navegacion for NavegacionLog {
    async fn abrir_registro(&self) -> Result<()> {
        info!("🧭 Navegando a la pantalla de registro de vehículo");
        Ok(())
    }

    async fn notificar(&self, mensaje: &str) -> Result<()> {
        info!("💬 {}", mensaje);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_navegacion_log_no_falla() {
        let nav = NavegacionLog::new();
        assert!(nav.abrir_registro().await.is_ok());
        assert!(nav.notificar("Navegando a detalle: /vehicle/ABC-123").await.is_ok());
    }
}
