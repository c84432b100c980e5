//! Poller HTTP de la colección hospedada de vehículos
//!
//! La colección remota se trata como opaca: en cada ciclo se trae el set
//! completo de registros y se publica como snapshot. Un fallo degrada al
//! estado fijo de error; el ciclo siguiente puede recuperarse solo si la
//! fuente vuelve a responder.

use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use super::suscripcion::CanalFuente;
use crate::models::vehiculo::{EstadoFuente, Vehiculo};

/// Fuente de vehículos respaldada por un endpoint HTTP
pub struct FuenteHttp {
    client: Client,
    url: String,
    intervalo: Duration,
}

impl FuenteHttp {
    pub fn new(url: String, intervalo_segundos: u64) -> Self {
        Self {
            client: Client::new(),
            url,
            intervalo: Duration::from_secs(intervalo_segundos),
        }
    }

    /// Lanzar el loop de polling en background. Cada ciclo publica un
    /// snapshot completo en el canal; los renders en curso simplemente
    /// quedan supersedidos por el siguiente.
    pub fn iniciar(self, canal: CanalFuente) {
        info!(
            "📡 Fuente de vehículos: {} (cada {}s)",
            self.url,
            self.intervalo.as_secs()
        );

        tokio::spawn(async move {
            let mut tick = tokio::time::interval(self.intervalo);
            loop {
                tick.tick().await;

                match self.traer_snapshot().await {
                    Ok(vehiculos) => {
                        canal.publicar(EstadoFuente::Datos(vehiculos));
                    }
                    Err(e) => {
                        warn!("⚠️ Error consultando la fuente de vehículos: {}", e);
                        canal.publicar(EstadoFuente::error_de_carga());
                    }
                }
            }
        });
    }

    /// Traer el set completo de registros de la colección remota
    async fn traer_snapshot(&self) -> anyhow::Result<Vec<Vehiculo>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;

        let vehiculos: Vec<Vehiculo> = response.json().await?;
        Ok(vehiculos)
    }
}
