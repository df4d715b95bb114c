// src/handlers/catalogo.rs

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
        catalogo::{Produto, ProdutoPayload},
        comum::MensagemResposta,
    },
};

// GET /api/produtos
#[utoipa::path(
    get,
    path = "/api/produtos",
    tag = "Produtos",
    responses(
        (status = 200, description = "Catálogo de produtos", body = Vec<Produto>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_produtos(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let produtos = app_state.catalogo_repo.list_produtos().await?;
    Ok(Json(produtos))
}

// POST /api/produtos
#[utoipa::path(
    post,
    path = "/api/produtos",
    tag = "Produtos",
    request_body = ProdutoPayload,
    responses(
        (status = 200, description = "Produto criado", body = Produto)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_produto(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ProdutoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let produto = app_state.catalogo_repo.create_produto(&payload).await?;
    Ok(Json(produto))
}

// PUT /api/produtos/{id}
#[utoipa::path(
    put,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    request_body = ProdutoPayload,
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto atualizado", body = Produto),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_produto(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<ProdutoPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let produto = app_state
        .catalogo_repo
        .update_produto(id, &payload)
        .await?
        .ok_or(AppError::NaoEncontrado("Produto não encontrado"))?;
    Ok(Json(produto))
}

// DELETE /api/produtos/{id}
#[utoipa::path(
    delete,
    path = "/api/produtos/{id}",
    tag = "Produtos",
    params(("id" = i32, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto deletado", body = MensagemResposta)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_produto(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalogo_repo.delete_produto(id).await?;
    Ok(Json(MensagemResposta::new("Produto deletado")))
}
