//! Ordenamiento de la tabla de flota
//!
//! Comparadores por columna con manejo explícito de fechas ausentes.
//! El sort es estable: filas con clave igual conservan su orden relativo,
//! lo que hace reproducible la paginación.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::vehiculo::Vehiculo;

/// Columnas ordenables de la tabla (índices 0-4)
pub const COLUMNA_PLACA: usize = 0;
pub const COLUMNA_EMPRESA: usize = 1;
pub const COLUMNA_TIPO: usize = 2;
pub const COLUMNA_VENCE_RTM: usize = 3;
pub const COLUMNA_VENCE_SOAT: usize = 4;

/// Especificación de orden seleccionada por el usuario.
/// Se serializa dentro de la página renderizada; los cambios de orden
/// llegan por `OrdenRequest`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct OrdenSpec {
    pub columna: usize,
    pub ascendente: bool,
}

impl Default for OrdenSpec {
    fn default() -> Self {
        Self {
            columna: COLUMNA_PLACA,
            ascendente: true,
        }
    }
}

/// Comparar fechas opcionales: una fecha ausente ordena antes que cualquier
/// fecha presente; dos ausentes comparan iguales.
fn comparar_fechas(a: &Option<DateTime<Utc>>, b: &Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(fa), Some(fb)) => fa.cmp(fb),
    }
}

/// Comparador para una columna; índice fuera de rango cae al comparador
/// de placa (default defensivo, no es un error).
fn comparar(a: &Vehiculo, b: &Vehiculo, columna: usize) -> Ordering {
    match columna {
        COLUMNA_PLACA => a.placa.cmp(&b.placa),
        COLUMNA_EMPRESA => a.empresa.cmp(&b.empresa),
        COLUMNA_TIPO => a.tipo.cmp(&b.tipo),
        COLUMNA_VENCE_RTM => comparar_fechas(&a.vence_rtm, &b.vence_rtm),
        COLUMNA_VENCE_SOAT => comparar_fechas(&a.vence_soat, &b.vence_soat),
        _ => a.placa.cmp(&b.placa),
    }
}

/// Ordenar la lista filtrada según la especificación seleccionada.
///
/// La dirección invierte el signo del comparador; no cambia la regla de
/// fechas ausentes. `sort_by` es estable, así que los empates conservan
/// el orden previo en ambas direcciones.
pub fn ordenar(vehiculos: &mut [Vehiculo], orden: &OrdenSpec) {
    let OrdenSpec { columna, ascendente } = *orden;
    vehiculos.sort_by(|a, b| {
        let cmp = comparar(a, b, columna);
        if ascendente {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn vehiculo(placa: &str, empresa: &str, vence_rtm: Option<DateTime<Utc>>) -> Vehiculo {
        Vehiculo {
            placa: placa.to_string(),
            empresa: empresa.to_string(),
            tipo: "Carro".to_string(),
            vence_rtm,
            vence_soat: None,
            tiene_alerta_roja: false,
        }
    }

    fn placas(vehiculos: &[Vehiculo]) -> Vec<&str> {
        vehiculos.iter().map(|v| v.placa.as_str()).collect()
    }

    #[test]
    fn test_orden_por_placa_ascendente() {
        let mut flota = vec![
            vehiculo("XYZ-999", "B", None),
            vehiculo("ABC-123", "A", None),
            vehiculo("DEF-456", "C", None),
        ];
        ordenar(&mut flota, &OrdenSpec { columna: COLUMNA_PLACA, ascendente: true });
        assert_eq!(placas(&flota), vec!["ABC-123", "DEF-456", "XYZ-999"]);
    }

    #[test]
    fn test_fecha_ausente_ordena_primero_ascendente() {
        // Escenario de referencia: [ABC-123 +5d, XYZ-999 null, DEF-456 +30d]
        let ahora = Utc::now();
        let mut flota = vec![
            vehiculo("ABC-123", "A", Some(ahora + Duration::days(5))),
            vehiculo("XYZ-999", "B", None),
            vehiculo("DEF-456", "C", Some(ahora + Duration::days(30))),
        ];
        ordenar(&mut flota, &OrdenSpec { columna: COLUMNA_VENCE_RTM, ascendente: true });
        assert_eq!(placas(&flota), vec!["XYZ-999", "ABC-123", "DEF-456"]);
    }

    #[test]
    fn test_descendente_invierte_el_signo() {
        let ahora = Utc::now();
        let mut flota = vec![
            vehiculo("ABC-123", "A", Some(ahora + Duration::days(5))),
            vehiculo("XYZ-999", "B", None),
            vehiculo("DEF-456", "C", Some(ahora + Duration::days(30))),
        ];
        ordenar(&mut flota, &OrdenSpec { columna: COLUMNA_VENCE_RTM, ascendente: false });
        // Reverso exacto del caso ascendente (no hay empates)
        assert_eq!(placas(&flota), vec!["DEF-456", "ABC-123", "XYZ-999"]);
    }

    #[test]
    fn test_sort_estable_con_claves_iguales() {
        let mut flota = vec![
            vehiculo("CCC-333", "Misma", None),
            vehiculo("AAA-111", "Misma", None),
            vehiculo("BBB-222", "Misma", None),
        ];
        // Todas empatan por empresa: el orden relativo previo se conserva
        ordenar(&mut flota, &OrdenSpec { columna: COLUMNA_EMPRESA, ascendente: true });
        assert_eq!(placas(&flota), vec!["CCC-333", "AAA-111", "BBB-222"]);

        ordenar(&mut flota, &OrdenSpec { columna: COLUMNA_EMPRESA, ascendente: false });
        assert_eq!(placas(&flota), vec!["CCC-333", "AAA-111", "BBB-222"]);
    }

    #[test]
    fn test_dos_fechas_ausentes_comparan_iguales() {
        let mut flota = vec![
            vehiculo("BBB-222", "B", None),
            vehiculo("AAA-111", "A", None),
        ];
        ordenar(&mut flota, &OrdenSpec { columna: COLUMNA_VENCE_RTM, ascendente: true });
        // Empate de claves: estabilidad mantiene el orden original
        assert_eq!(placas(&flota), vec!["BBB-222", "AAA-111"]);
    }

    #[test]
    fn test_columna_fuera_de_rango_cae_a_placa() {
        let mut flota = vec![
            vehiculo("XYZ-999", "B", None),
            vehiculo("ABC-123", "A", None),
        ];
        ordenar(&mut flota, &OrdenSpec { columna: 7, ascendente: true });
        assert_eq!(placas(&flota), vec!["ABC-123", "XYZ-999"]);
    }
}
