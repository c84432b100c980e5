//! Utilidades de validación
//!
//! Funciones helper para validar los datos que llegan por la API.

use validator::ValidationError;

/// Validar formato de placa de vehículo
pub fn validate_placa(value: &str) -> Result<(), ValidationError> {
    // Formato básico: ABC-123 o similar
    let limpia = value.replace([' ', '-', '_'], "");
    if limpia.len() < 5 || limpia.len() > 10 {
        let mut error = ValidationError::new("placa");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_placa() {
        assert!(validate_placa("ABC-123").is_ok());
        assert!(validate_placa("XYZ-999").is_ok());
        assert!(validate_placa("A").is_err());
        assert!(validate_placa("ABCDEFGHIJK").is_err());
    }

}
