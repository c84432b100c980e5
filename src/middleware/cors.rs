//! CORS del dashboard de flota
//!
//! El frontend de la tabla corre en otro origen (Flutter web servido
//! aparte), así que la API necesita CORS tanto en desarrollo como con la
//! lista de orígenes del despliegue.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Capa permisiva para desarrollo local: acepta cualquier origen para que
/// el dashboard pueda apuntar a la API sin configurar nada.
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Capa restringida a los orígenes de `CORS_ORIGINS`. Un origen que no
/// parsea como header se ignora en vez de tumbar el arranque.
pub fn cors_middleware_with_origins(origins: Vec<String>) -> CorsLayer {
    let mut cors = CorsLayer::new();

    for origin in origins {
        if let Ok(header_value) = HeaderValue::from_str(&origin) {
            cors = cors.allow_origin(header_value);
        }
    }

    // La API sólo expone GET y POST, más el preflight
    cors.allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}
