//! Generador de la pantalla del dashboard
//!
//! Escritor one-shot: vuelca la plantilla embebida tal cual a la ruta
//! destino, pisando cualquier contenido previo. Sin parámetros, sin
//! validación del payload y sin protección contra escrituras parciales.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::info;

/// Plantilla embebida de la pantalla (payload opaco para este binario)
const PLANTILLA_DASHBOARD: &str = include_str!("../../templates/dashboard_page.dart");

/// Ruta destino por defecto
const RUTA_DEFECTO: &str = "lib/pages/dashboard_page.dart";

fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let ruta: PathBuf = env::var("DASHBOARD_OUTPUT_PATH")
        .unwrap_or_else(|_| RUTA_DEFECTO.to_string())
        .into();

    if let Some(directorio) = ruta.parent() {
        fs::create_dir_all(directorio)
            .with_context(|| format!("creando el directorio {}", directorio.display()))?;
    }

    fs::write(&ruta, PLANTILLA_DASHBOARD)
        .with_context(|| format!("escribiendo la plantilla en {}", ruta.display()))?;

    info!(
        "✅ Plantilla del dashboard escrita en {} ({} bytes)",
        ruta.display(),
        PLANTILLA_DASHBOARD.len()
    );

    Ok(())
}
