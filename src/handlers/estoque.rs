// src/handlers/estoque.rs

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        comum::MensagemResposta,
        estoque::{EstoqueMovimento, EstoqueMovimentoPayload, SaldoProduto},
    },
};

// GET /api/estoque
#[utoipa::path(
    get,
    path = "/api/estoque",
    tag = "Estoque",
    responses(
        (status = 200, description = "Histórico de entradas e saídas", body = Vec<EstoqueMovimento>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_movimentos(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let movimentos = app_state.estoque_repo.list_movimentos().await?;
    Ok(Json(movimentos))
}

// GET /api/estoque/saldo
#[utoipa::path(
    get,
    path = "/api/estoque/saldo",
    tag = "Estoque",
    responses(
        (status = 200, description = "Saldo consolidado por produto", body = Vec<SaldoProduto>)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_saldo(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let saldo = app_state.estoque_service.saldo().await?;
    Ok(Json(saldo))
}

// POST /api/estoque
#[utoipa::path(
    post,
    path = "/api/estoque",
    tag = "Estoque",
    request_body = EstoqueMovimentoPayload,
    responses(
        (status = 200, description = "Movimento registrado", body = EstoqueMovimento)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_movimento(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<EstoqueMovimentoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let movimento = app_state.estoque_repo.create_movimento(&payload).await?;
    Ok(Json(movimento))
}

// PUT /api/estoque/{id}
#[utoipa::path(
    put,
    path = "/api/estoque/{id}",
    tag = "Estoque",
    request_body = EstoqueMovimentoPayload,
    params(("id" = i32, Path, description = "ID do movimento")),
    responses(
        (status = 200, description = "Movimento atualizado", body = EstoqueMovimento),
        (status = 404, description = "Registro de estoque não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_movimento(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<EstoqueMovimentoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let movimento = app_state
        .estoque_repo
        .update_movimento(id, &payload)
        .await?
        .ok_or(AppError::NaoEncontrado("Registro de estoque não encontrado"))?;
    Ok(Json(movimento))
}

// DELETE /api/estoque/{id}
#[utoipa::path(
    delete,
    path = "/api/estoque/{id}",
    tag = "Estoque",
    params(("id" = i32, Path, description = "ID do movimento")),
    responses(
        (status = 200, description = "Registro de estoque deletado", body = MensagemResposta)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_movimento(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.estoque_repo.delete_movimento(id).await?;
    Ok(Json(MensagemResposta::new("Registro de estoque deletado")))
}
