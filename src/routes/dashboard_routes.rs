use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dashboard::vista::VistaDashboard;
use crate::dto::dashboard_dto::{ConsultaRequest, FilaVehiculo, OrdenRequest, PaginaRequest};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(obtener_vista))
        .route("/fila/:indice", get(obtener_fila))
        .route("/consulta", post(establecer_consulta))
        .route("/orden", post(establecer_orden))
        .route("/pagina", post(establecer_pagina))
}

async fn obtener_vista(State(state): State<AppState>) -> Json<VistaDashboard> {
    let controller = DashboardController::new(state);
    Json(controller.vista().await)
}

async fn obtener_fila(
    State(state): State<AppState>,
    Path(indice): Path<usize>,
) -> AppResult<Json<FilaVehiculo>> {
    let controller = DashboardController::new(state);
    let fila = controller.fila(indice).await?;
    Ok(Json(fila))
}

async fn establecer_consulta(
    State(state): State<AppState>,
    Json(request): Json<ConsultaRequest>,
) -> Json<VistaDashboard> {
    let controller = DashboardController::new(state);
    Json(controller.establecer_consulta(&request.consulta).await)
}

async fn establecer_orden(
    State(state): State<AppState>,
    Json(request): Json<OrdenRequest>,
) -> Json<VistaDashboard> {
    let controller = DashboardController::new(state);
    Json(controller.establecer_orden(request).await)
}

async fn establecer_pagina(
    State(state): State<AppState>,
    Json(request): Json<PaginaRequest>,
) -> AppResult<Json<VistaDashboard>> {
    let controller = DashboardController::new(state);
    let vista = controller.establecer_pagina(request).await?;
    Ok(Json(vista))
}
