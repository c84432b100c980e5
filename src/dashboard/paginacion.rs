//! Fuente de datos paginada de la tabla de vehículos
//!
//! Abstracción sobre la secuencia ya filtrada y ordenada: conteo exacto de
//! filas, lookup por índice absoluto con proyección formateada, y corte de
//! página de tamaño fijo. La selección de filas no está implementada, por
//! eso el conteo de seleccionadas es siempre cero.

use chrono::{DateTime, Utc};

use crate::dashboard::alertas::rtm_critico;
use crate::dto::dashboard_dto::FilaVehiculo;
use crate::models::vehiculo::Vehiculo;
use crate::utils::fecha::formatear_fecha;

/// Tamaños de página disponibles
pub const TAMANOS_PAGINA: [usize; 3] = [5, 10, 20];

/// Tamaño de página por defecto
pub const TAMANO_PAGINA_DEFECTO: usize = 10;

/// Verificar que un tamaño de página esté en el conjunto permitido
pub fn tamano_pagina_valido(tamano: usize) -> bool {
    TAMANOS_PAGINA.contains(&tamano)
}

/// Data source sobre la secuencia filtrada/ordenada.
///
/// `ahora` se fija al construirse para que todas las filas de un mismo
/// render evalúen la criticidad contra el mismo instante.
pub struct VehiculosDataSource {
    vehiculos: Vec<Vehiculo>,
    ahora: DateTime<Utc>,
}

impl VehiculosDataSource {
    pub fn new(vehiculos: Vec<Vehiculo>, ahora: DateTime<Utc>) -> Self {
        Self { vehiculos, ahora }
    }

    /// Conteo exacto de filas (no estimado)
    pub fn total_filas(&self) -> usize {
        self.vehiculos.len()
    }

    /// La selección no está implementada
    pub fn filas_seleccionadas(&self) -> usize {
        0
    }

    /// Proyección formateada de la fila en el índice absoluto dado,
    /// o `None` si el índice queda fuera de la secuencia.
    pub fn fila(&self, indice: usize) -> Option<FilaVehiculo> {
        let vehiculo = self.vehiculos.get(indice)?;

        Some(FilaVehiculo {
            placa: vehiculo.placa.clone(),
            empresa: vehiculo.empresa.clone(),
            tipo: vehiculo.tipo.clone(),
            vence_rtm: formatear_fecha(vehiculo.vence_rtm.as_ref()),
            vence_soat: formatear_fecha(vehiculo.vence_soat.as_ref()),
            rtm_critico: rtm_critico(vehiculo, self.ahora),
            tiene_alerta_roja: vehiculo.tiene_alerta_roja,
        })
    }

    /// Corte de una página: filas proyectadas desde `pagina * tamano`.
    /// Una página más allá del final devuelve un corte vacío.
    pub fn pagina(&self, pagina: usize, tamano: usize) -> Vec<FilaVehiculo> {
        let inicio = pagina.saturating_mul(tamano);
        (inicio..inicio.saturating_add(tamano))
            .map_while(|i| self.fila(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn vehiculo(placa: &str, vence_rtm: Option<DateTime<Utc>>) -> Vehiculo {
        Vehiculo {
            placa: placa.to_string(),
            empresa: "Transportes Andinos".to_string(),
            tipo: "Carro".to_string(),
            vence_rtm,
            vence_soat: None,
            tiene_alerta_roja: false,
        }
    }

    #[test]
    fn test_conteo_exacto_y_seleccion_cero() {
        let ahora = Utc::now();
        let source = VehiculosDataSource::new(
            vec![vehiculo("ABC-123", None), vehiculo("XYZ-999", None)],
            ahora,
        );
        assert_eq!(source.total_filas(), 2);
        assert_eq!(source.filas_seleccionadas(), 0);
    }

    #[test]
    fn test_fila_fuera_de_rango_devuelve_none() {
        let ahora = Utc::now();
        let source = VehiculosDataSource::new(vec![vehiculo("ABC-123", None)], ahora);

        assert!(source.fila(0).is_some());
        assert!(source.fila(1).is_none());
        assert!(source.fila(100).is_none());
    }

    #[test]
    fn test_proyeccion_formatea_fechas_y_flags() {
        let ahora = Utc::now();
        let mut v = vehiculo("ABC-123", Some(ahora + Duration::days(5)));
        v.tiene_alerta_roja = true;
        let source = VehiculosDataSource::new(vec![v], ahora);

        let fila = source.fila(0).unwrap();
        assert_eq!(fila.placa, "ABC-123");
        assert!(fila.rtm_critico);
        assert!(fila.tiene_alerta_roja);
        assert_eq!(fila.vence_soat, "---");
        // YYYY-MM-DD
        assert_eq!(fila.vence_rtm.len(), 10);
    }

    #[test]
    fn test_corte_de_pagina() {
        let ahora = Utc::now();
        let flota: Vec<Vehiculo> = (0..23)
            .map(|i| vehiculo(&format!("PLC-{:03}", i), None))
            .collect();
        let source = VehiculosDataSource::new(flota, ahora);

        assert_eq!(source.pagina(0, 10).len(), 10);
        assert_eq!(source.pagina(1, 10).len(), 10);
        // Última página parcial
        assert_eq!(source.pagina(2, 10).len(), 3);
        // Más allá del final: vacía
        assert!(source.pagina(3, 10).is_empty());

        // Cambiar el tamaño de página cambia el corte
        assert_eq!(source.pagina(0, 5).len(), 5);
        assert_eq!(source.pagina(1, 5)[0].placa, "PLC-005");
        assert_eq!(source.pagina(0, 20).len(), 20);
    }

    #[test]
    fn test_tamanos_de_pagina_permitidos() {
        assert!(tamano_pagina_valido(5));
        assert!(tamano_pagina_valido(10));
        assert!(tamano_pagina_valido(20));
        assert!(!tamano_pagina_valido(0));
        assert!(!tamano_pagina_valido(15));
    }
}
