// src/handlers/operacoes.rs

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
        operacoes::{Pedido, PedidoPayload, Producao, ProducaoPayload},
    },
};

// =============================================================================
//  PEDIDOS
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/pedidos",
    tag = "Pedidos",
    responses(
        (status = 200, description = "Pedidos, mais recentes primeiro", body = Vec<Pedido>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_pedidos(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pedidos = app_state.operacoes_repo.list_pedidos().await?;
    Ok(Json(pedidos))
}

#[utoipa::path(
    post,
    path = "/api/pedidos",
    tag = "Pedidos",
    request_body = PedidoPayload,
    responses(
        (status = 200, description = "Pedido criado", body = Pedido)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_pedido(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<PedidoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let pedido = app_state.operacoes_repo.create_pedido(&payload).await?;
    Ok(Json(pedido))
}

#[utoipa::path(
    put,
    path = "/api/pedidos/{id}",
    tag = "Pedidos",
    request_body = PedidoPayload,
    params(("id" = i32, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido atualizado", body = Pedido),
        (status = 404, description = "Pedido não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_pedido(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<PedidoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let pedido = app_state
        .operacoes_repo
        .update_pedido(id, &payload)
        .await?
        .ok_or(AppError::NaoEncontrado("Pedido não encontrado"))?;
    Ok(Json(pedido))
}

#[utoipa::path(
    delete,
    path = "/api/pedidos/{id}",
    tag = "Pedidos",
    params(("id" = i32, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido deletado", body = MensagemResposta)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_pedido(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.operacoes_repo.delete_pedido(id).await?;
    Ok(Json(MensagemResposta::new("Pedido deletado")))
}

// =============================================================================
//  PRODUÇÃO
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/producao",
    tag = "Produção",
    responses(
        (status = 200, description = "Ordens de produção, prazo mais próximo primeiro", body = Vec<Producao>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_producao(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ordens = app_state.operacoes_repo.list_producao().await?;
    Ok(Json(ordens))
}

#[utoipa::path(
    post,
    path = "/api/producao",
    tag = "Produção",
    request_body = ProducaoPayload,
    responses(
        (status = 200, description = "Ordem de produção criada", body = Producao)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_producao(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ProducaoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let ordem = app_state.operacoes_repo.create_producao(&payload).await?;
    Ok(Json(ordem))
}

#[utoipa::path(
    put,
    path = "/api/producao/{id}",
    tag = "Produção",
    request_body = ProducaoPayload,
    params(("id" = i32, Path, description = "ID da ordem de produção")),
    responses(
        (status = 200, description = "Ordem de produção atualizada", body = Producao),
        (status = 404, description = "Produção não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_producao(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<ProducaoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let ordem = app_state
        .operacoes_repo
        .update_producao(id, &payload)
        .await?
        .ok_or(AppError::NaoEncontrado("Produção não encontrada"))?;
    Ok(Json(ordem))
}

#[utoipa::path(
    delete,
    path = "/api/producao/{id}",
    tag = "Produção",
    params(("id" = i32, Path, description = "ID da ordem de produção")),
    responses(
        (status = 200, description = "Produção deletada", body = MensagemResposta)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_producao(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.operacoes_repo.delete_producao(id).await?;
    Ok(Json(MensagemResposta::new("Produção deletada")))
}
