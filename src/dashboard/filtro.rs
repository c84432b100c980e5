//! Filtro de búsqueda libre sobre la flota
//!
//! Contención de substring (case-insensitive) contra placa, empresa o tipo.
//! Sin tokenización ni ranking.

use crate::models::vehiculo::Vehiculo;

/// Filtrar el snapshot completo por una consulta de texto libre.
///
/// La consulta llega ya en minúsculas (la pliega la transición set-consulta).
/// Consulta vacía devuelve el snapshot tal cual. Un vehículo se retiene si
/// la consulta aparece como substring en placa, empresa O tipo.
pub fn filtrar(vehiculos: &[Vehiculo], consulta: &str) -> Vec<Vehiculo> {
    if consulta.is_empty() {
        return vehiculos.to_vec();
    }

    vehiculos
        .iter()
        .filter(|v| {
            v.placa.to_lowercase().contains(consulta)
                || v.empresa.to_lowercase().contains(consulta)
                || v.tipo.to_lowercase().contains(consulta)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehiculo(placa: &str, empresa: &str, tipo: &str) -> Vehiculo {
        Vehiculo {
            placa: placa.to_string(),
            empresa: empresa.to_string(),
            tipo: tipo.to_string(),
            vence_rtm: None,
            vence_soat: None,
            tiene_alerta_roja: false,
        }
    }

    #[test]
    fn test_consulta_vacia_es_identidad() {
        let flota = vec![
            vehiculo("ABC-123", "Transportes Andinos", "Carro"),
            vehiculo("XYZ-999", "Logística Norte", "Moto"),
        ];
        assert_eq!(filtrar(&flota, ""), flota);
    }

    #[test]
    fn test_filtra_por_tipo_case_insensitive() {
        // Escenario del sistema original: consulta "carro" contra tipos Carro/Moto
        let flota = vec![
            vehiculo("ABC-123", "Transportes Andinos", "Carro"),
            vehiculo("XYZ-999", "Logística Norte", "Moto"),
        ];
        let resultado = filtrar(&flota, "carro");
        assert_eq!(resultado.len(), 1);
        assert_eq!(resultado[0].placa, "ABC-123");
    }

    #[test]
    fn test_filtra_por_placa_y_empresa() {
        let flota = vec![
            vehiculo("ABC-123", "Transportes Andinos", "Carro"),
            vehiculo("XYZ-999", "Logística Norte", "Moto"),
            vehiculo("DEF-456", "Andina Express", "Carro"),
        ];

        let por_placa = filtrar(&flota, "xyz");
        assert_eq!(por_placa.len(), 1);
        assert_eq!(por_placa[0].placa, "XYZ-999");

        // OR entre campos: "andin" aparece en dos empresas distintas
        let por_empresa = filtrar(&flota, "andin");
        assert_eq!(por_empresa.len(), 2);
    }

    #[test]
    fn test_excluidos_no_contienen_la_consulta() {
        let flota = vec![
            vehiculo("ABC-123", "Transportes Andinos", "Carro"),
            vehiculo("XYZ-999", "Logística Norte", "Moto"),
        ];
        let resultado = filtrar(&flota, "zzz");
        assert!(resultado.is_empty());
    }
}
