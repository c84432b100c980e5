//! Canal de suscripción a la fuente de registros
//!
//! La fuente empuja snapshots completos; un canal `watch` conserva sólo el
//! último, así que cada entrega nueva supersede a la anterior sin
//! cancelación explícita. Los suscriptores leen el valor vigente al
//! momento de renderizar.

use tokio::sync::watch;
use tracing::debug;

use crate::models::vehiculo::EstadoFuente;

/// Lado emisor de la suscripción de vehículos
pub struct CanalFuente {
    tx: watch::Sender<EstadoFuente>,
}

impl CanalFuente {
    /// Crear el canal; el valor inicial es `Cargando` hasta que la fuente
    /// entregue el primer snapshot.
    pub fn nuevo() -> (Self, watch::Receiver<EstadoFuente>) {
        let (tx, rx) = watch::channel(EstadoFuente::Cargando);
        (Self { tx }, rx)
    }

    /// Publicar un snapshot completo (reemplaza al vigente)
    pub fn publicar(&self, snapshot: EstadoFuente) {
        if let EstadoFuente::Datos(vehiculos) = &snapshot {
            debug!("📡 Snapshot publicado: {} vehículos", vehiculos.len());
        }
        // send sólo falla sin receptores; un snapshot sin lectores se descarta
        let _ = self.tx.send(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehiculo::Vehiculo;

    fn vehiculo(placa: &str) -> Vehiculo {
        Vehiculo {
            placa: placa.to_string(),
            empresa: "Transportes Andinos".to_string(),
            tipo: "Carro".to_string(),
            vence_rtm: None,
            vence_soat: None,
            tiene_alerta_roja: false,
        }
    }

    #[tokio::test]
    async fn test_estado_inicial_es_cargando() {
        let (_canal, rx) = CanalFuente::nuevo();
        assert_eq!(*rx.borrow(), EstadoFuente::Cargando);
    }

    #[tokio::test]
    async fn test_snapshot_nuevo_supersede_al_anterior() {
        let (canal, rx) = CanalFuente::nuevo();

        canal.publicar(EstadoFuente::Datos(vec![vehiculo("ABC-123")]));
        canal.publicar(EstadoFuente::Datos(vec![
            vehiculo("ABC-123"),
            vehiculo("XYZ-999"),
        ]));

        // Sólo el último snapshot es visible
        match &*rx.borrow() {
            EstadoFuente::Datos(vehiculos) => assert_eq!(vehiculos.len(), 2),
            otro => panic!("se esperaba Datos, llegó {:?}", otro),
        };
    }

    #[tokio::test]
    async fn test_error_degrada_a_estado_fijo() {
        let (canal, rx) = CanalFuente::nuevo();
        canal.publicar(EstadoFuente::error_de_carga());

        assert_eq!(
            *rx.borrow(),
            EstadoFuente::Error("Error al cargar datos".to_string())
        );
    }
}
