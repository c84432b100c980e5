//! Store de preferencias de usuario
//!
//! Booleano persistido bajo una clave fija, con semántica get-or-default.
//! El store real vive fuera de este servicio; acá sólo hay un lector al
//! arranque y una escritura por toggle (fire-and-forget, sin reintentos).

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::redis_client::RedisClient;

/// Clave fija de la preferencia "menú lateral fijado"
pub const CLAVE_MENU_FIJADO: &str = "isDrawerPinned";

/// Operaciones del store de preferencias
#[async_trait::async_trait]
pub trait PreferenciasStore: Send + Sync {
    /// Leer la preferencia, o el valor por defecto si no existe o el
    /// store no responde.
    async fn obtener_o_defecto(&self, clave: &str, defecto: bool) -> bool;

    /// Persistir el nuevo valor de la preferencia
    async fn guardar(&self, clave: &str, valor: bool) -> Result<()>;
}

/// Preferencias persistidas en Redis
#[derive(Clone)]
pub struct PreferenciasRedis {
    redis: RedisClient,
}

impl PreferenciasRedis {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait::async_trait]
impl PreferenciasStore for PreferenciasRedis {
    async fn obtener_o_defecto(&self, clave: &str, defecto: bool) -> bool {
        let key = RedisClient::pref_key(clave);

        match self.redis.get::<bool>(&key).await {
            Ok(Some(valor)) => {
                debug!("📥 Preferencia '{}' leída: {}", clave, valor);
                valor
            }
            Ok(None) => {
                debug!("❌ Preferencia '{}' ausente, usando defecto: {}", clave, defecto);
                defecto
            }
            Err(e) => {
                warn!("⚠️ Error leyendo preferencia '{}': {} (usando defecto)", clave, e);
                defecto
            }
        }
    }

    async fn guardar(&self, clave: &str, valor: bool) -> Result<()> {
        let key = RedisClient::pref_key(clave);

        info!("💾 Guardando preferencia '{}' = {}", clave, valor);
        self.redis.set_persistente(&key, &valor).await?;

        Ok(())
    }
}

/// Preferencias en memoria: fallback degradado cuando Redis no está
/// disponible al arranque, y store de los tests.
#[derive(Clone, Default)]
pub struct PreferenciasMemoria {
    valores: Arc<RwLock<HashMap<String, bool>>>,
}

impl PreferenciasMemoria {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PreferenciasStore for PreferenciasMemoria {
    async fn obtener_o_defecto(&self, clave: &str, defecto: bool) -> bool {
        let valores = self.valores.read().await;
        valores.get(clave).copied().unwrap_or(defecto)
    }

    async fn guardar(&self, clave: &str, valor: bool) -> Result<()> {
        let mut valores = self.valores.write().await;
        valores.insert(clave.to_string(), valor);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defecto_cuando_no_existe() {
        let store = PreferenciasMemoria::new();
        assert!(!store.obtener_o_defecto(CLAVE_MENU_FIJADO, false).await);
        assert!(store.obtener_o_defecto(CLAVE_MENU_FIJADO, true).await);
    }

    #[tokio::test]
    async fn test_guardar_y_releer() {
        // El toggle persiste el nuevo booleano y la próxima lectura lo refleja
        let store = PreferenciasMemoria::new();
        store.guardar(CLAVE_MENU_FIJADO, true).await.unwrap();
        assert!(store.obtener_o_defecto(CLAVE_MENU_FIJADO, false).await);

        store.guardar(CLAVE_MENU_FIJADO, false).await.unwrap();
        assert!(!store.obtener_o_defecto(CLAVE_MENU_FIJADO, true).await);
    }
}
