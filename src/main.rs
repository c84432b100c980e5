use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use gestion_rtm::cache::preferencias::{PreferenciasMemoria, PreferenciasRedis, PreferenciasStore};
use gestion_rtm::cache::redis_client::RedisClient;
use gestion_rtm::config::environment::EnvironmentConfig;
use gestion_rtm::fuente::http_fuente::FuenteHttp;
use gestion_rtm::fuente::suscripcion::CanalFuente;
use gestion_rtm::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use gestion_rtm::routes;
use gestion_rtm::services::navegacion_service::NavegacionLog;
use gestion_rtm::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env();

    // Configurar logging
    let nivel = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(nivel).init();

    info!("🚗 Gestión RTM - Dashboard de Flota");
    info!("===================================");

    // Store de preferencias: Redis si responde, memoria como degradación
    // (la preferencia arranca en su valor por defecto)
    let preferencias: Arc<dyn PreferenciasStore> =
        match RedisClient::new(config.redis_url.clone()).await {
            Ok(client) => Arc::new(PreferenciasRedis::new(client)),
            Err(e) => {
                warn!("⚠️ Redis no disponible ({}), preferencias en memoria", e);
                Arc::new(PreferenciasMemoria::new())
            }
        };

    // Suscripción a la fuente de registros: snapshots completos por polling
    let (canal, receptor) = CanalFuente::nuevo();
    FuenteHttp::new(config.fuente_url.clone(), config.fuente_poll_segundos).iniciar(canal);

    // Estado compartido y preferencia inicial del menú
    let app_state = AppState::new(
        config.clone(),
        receptor,
        preferencias,
        Arc::new(NavegacionLog::new()),
    );
    app_state.cargar_preferencias().await;

    // CORS: orígenes explícitos en producción, permisivo en desarrollo
    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    // Crear router de la API
    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .nest("/api/preferencias", routes::preferencias_routes::create_preferencias_router())
        .nest("/api/navegacion", routes::navegacion_routes::create_navegacion_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Puerto del servidor
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📋 Endpoints - Dashboard:");
    info!("   GET  /api/dashboard - Vista actual (filtrada/ordenada/paginada)");
    info!("   GET  /api/dashboard/fila/:indice - Fila por índice absoluto");
    info!("   POST /api/dashboard/consulta - Fijar búsqueda");
    info!("   POST /api/dashboard/orden - Fijar columna y dirección");
    info!("   POST /api/dashboard/pagina - Cambiar página / tamaño de página");
    info!("📌 Endpoints - Preferencias:");
    info!("   GET  /api/preferencias/menu - Estado del menú");
    info!("   POST /api/preferencias/menu/toggle - Fijar/liberar menú");
    info!("🧭 Endpoints - Navegación:");
    info!("   POST /api/navegacion/registro - Abrir registro de vehículo");
    info!("   POST /api/navegacion/detalle/:placa - Notificar detalle");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "gestion-rtm",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
