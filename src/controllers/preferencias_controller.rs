use tracing::warn;

use crate::cache::preferencias::CLAVE_MENU_FIJADO;
use crate::dto::dashboard_dto::PreferenciaMenuResponse;
use crate::state::AppState;

/// Controller de la preferencia "menú fijado".
///
/// Máquina de dos estados (fijado / libre): el toggle invierte el flag en
/// memoria y persiste el nuevo valor. Hay un único escritor, así que el
/// orden entre flag y persistencia no es observable desde afuera.
pub struct PreferenciasController {
    state: AppState,
}

impl PreferenciasController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Estado actual del menú
    pub async fn obtener_menu(&self) -> PreferenciaMenuResponse {
        let estado = self.state.dashboard.read().await;
        PreferenciaMenuResponse {
            menu_fijado: estado.menu_fijado,
        }
    }

    /// Alternar el menú y persistir el nuevo valor. La escritura es
    /// fire-and-forget: si el store falla se registra y se sigue (sin
    /// reintento), igual que el resto de fallos de este servicio.
    pub async fn alternar_menu(&self) -> PreferenciaMenuResponse {
        let fijado = {
            let mut estado = self.state.dashboard.write().await;
            *estado = estado.clone().alternar_menu();
            estado.menu_fijado
        };

        if let Err(e) = self
            .state
            .preferencias
            .guardar(CLAVE_MENU_FIJADO, fijado)
            .await
        {
            warn!("⚠️ No se pudo persistir la preferencia del menú: {}", e);
        }

        PreferenciaMenuResponse {
            menu_fijado: fijado,
        }
    }
}
