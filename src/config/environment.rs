//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    // Fuente de registros de vehículos (colección hospedada, opaca)
    pub fuente_url: String,
    pub fuente_poll_segundos: u64,
    // Store de preferencias
    pub redis_url: String,
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno con defaults de desarrollo
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            fuente_url: env::var("FUENTE_VEHICULOS_URL")
                .unwrap_or_else(|_| "http://localhost:8080/vehiculos".to_string()),
            fuente_poll_segundos: env::var("FUENTE_POLL_SEGUNDOS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .expect("FUENTE_POLL_SEGUNDOS must be a valid number"),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
