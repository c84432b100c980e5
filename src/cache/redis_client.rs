use anyhow::Result;
use redis::{aio::ConnectionManager, AsyncCommands, RedisResult};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, info, warn};

/// Cliente Redis con connection pooling y operaciones async.
///
/// La superficie es la que necesita el store de preferencias: lectura
/// opcional y escritura sin expiración.
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// Crear nuevo cliente Redis
    pub async fn new(redis_url: String) -> Result<Self> {
        info!("🔗 Conectando a Redis: {}", redis_url);

        let client = redis::Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        // Test de conexión usando un comando simple
        let mut conn = manager.clone();
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");

        Ok(Self { manager })
    }

    /// Generar clave de preferencia de usuario con el prefijo del servicio
    pub fn pref_key(nombre: &str) -> String {
        format!("gestion_rtm:pref:{}", nombre)
    }

    /// Leer un valor serializado; un fallo de lectura degrada a `None`
    pub async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>> {
        let mut conn = self.manager.clone();

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(value)) => {
                debug!("📥 GET para clave: {}", key);
                let deserialized: T = serde_json::from_str(&value)?;
                Ok(Some(deserialized))
            }
            Ok(None) => {
                debug!("❌ Clave ausente: {}", key);
                Ok(None)
            }
            Err(e) => {
                warn!("⚠️ Error leyendo clave {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Guardar un valor sin expiración (preferencias persistidas)
    pub async fn set_persistente<T: Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<()> {
        let mut conn = self.manager.clone();

        let serialized = serde_json::to_string(value)?;

        let result: RedisResult<()> = conn.set(key, serialized).await;

        match result {
            Ok(()) => {
                debug!("💾 SET persistente para clave: {}", key);
                Ok(())
            }
            Err(e) => {
                error!("❌ Error guardando clave {}: {}", key, e);
                Err(anyhow::anyhow!("Error de Redis: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pref_key_lleva_el_prefijo_del_servicio() {
        assert_eq!(
            RedisClient::pref_key("isDrawerPinned"),
            "gestion_rtm:pref:isDrawerPinned"
        );
    }
}
