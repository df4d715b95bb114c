// src/handlers/dashboard.rs

use axum::{extract::State, response::IntoResponse, Json};

use crate::{common::error::AppError, config::AppState, models::dashboard::DashboardResumo};

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Contadores e atividades recentes", body = DashboardResumo),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_resumo(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let resumo = app_state.dashboard_service.get_resumo().await?;
    Ok(Json(resumo))
}
