use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};

use crate::dto::dashboard_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::validate_placa;

pub fn create_navegacion_router() -> Router<AppState> {
    Router::new()
        .route("/registro", post(abrir_registro))
        .route("/detalle/:placa", post(notificar_detalle))
}

/// Pedir a la frontera de navegación que abra la pantalla de registro
async fn abrir_registro(State(state): State<AppState>) -> AppResult<Json<ApiResponse<()>>> {
    state
        .navegacion
        .abrir_registro()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(ApiResponse::success_with_message(
        (),
        "Pantalla de registro solicitada".to_string(),
    )))
}

/// Notificación efímera de navegación al detalle de un vehículo
async fn notificar_detalle(
    State(state): State<AppState>,
    Path(placa): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    validate_placa(&placa).map_err(|e| validation_error("placa", e))?;

    let mensaje = format!("Navegando a detalle: /vehicle/{}", placa);
    state
        .navegacion
        .notificar(&mensaje)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(ApiResponse::success_with_message((), mensaje)))
}
