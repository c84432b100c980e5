use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::preferencias_controller::PreferenciasController;
use crate::dto::dashboard_dto::{ApiResponse, PreferenciaMenuResponse};
use crate::state::AppState;

pub fn create_preferencias_router() -> Router<AppState> {
    Router::new()
        .route("/menu", get(obtener_menu))
        .route("/menu/toggle", post(alternar_menu))
}

async fn obtener_menu(State(state): State<AppState>) -> Json<ApiResponse<PreferenciaMenuResponse>> {
    let controller = PreferenciasController::new(state);
    Json(ApiResponse::success(controller.obtener_menu().await))
}

async fn alternar_menu(
    State(state): State<AppState>,
) -> Json<ApiResponse<PreferenciaMenuResponse>> {
    let controller = PreferenciasController::new(state);
    let respuesta = controller.alternar_menu().await;
    Json(ApiResponse::success_with_message(
        respuesta,
        "Preferencia de menú actualizada".to_string(),
    ))
}
