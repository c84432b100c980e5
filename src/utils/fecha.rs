//! Utilidades de formato de fechas
//!
//! Formato fijo YYYY-MM-DD para las celdas de vencimiento; sin manejo
//! de locale más allá del patrón.

use chrono::{DateTime, Utc};

/// Token fijo para fechas ausentes
pub const FECHA_AUSENTE: &str = "---";

/// Formatear una fecha opcional como `YYYY-MM-DD`, o `---` si no existe
pub fn formatear_fecha(fecha: Option<&DateTime<Utc>>) -> String {
    match fecha {
        Some(f) => f.format("%Y-%m-%d").to_string(),
        None => FECHA_AUSENTE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_formatear_fecha_presente() {
        let fecha = Utc.with_ymd_and_hms(2026, 3, 7, 14, 30, 0).unwrap();
        assert_eq!(formatear_fecha(Some(&fecha)), "2026-03-07");
    }

    #[test]
    fn test_formatear_fecha_ausente() {
        assert_eq!(formatear_fecha(None), "---");
    }
}
