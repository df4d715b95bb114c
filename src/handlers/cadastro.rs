// src/handlers/cadastro.rs

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        cadastro::{Cliente, ClientePayload, Fornecedor, FornecedorPayload},
        comum::MensagemResposta,
    },
};

// =============================================================================
//  CLIENTES
// =============================================================================

// GET /api/clientes
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Clientes, mais recentes primeiro", body = Vec<Cliente>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_clientes(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clientes = app_state.cadastro_service.list_clientes().await?;
    Ok(Json(clientes))
}

// POST /api/clientes
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Clientes",
    request_body = ClientePayload,
    responses(
        (status = 200, description = "Cliente criado", body = Cliente),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_cliente(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ClientePayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let cliente = app_state.cadastro_service.create_cliente(payload).await?;
    Ok(Json(cliente))
}

// PUT /api/clientes/{id}
#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    request_body = ClientePayload,
    params(("id" = i32, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente atualizado", body = Cliente),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_cliente(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<ClientePayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let cliente = app_state.cadastro_service.update_cliente(id, payload).await?;
    Ok(Json(cliente))
}

// DELETE /api/clientes/{id}
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = i32, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente deletado", body = MensagemResposta)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_cliente(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cadastro_service.delete_cliente(id).await?;
    Ok(Json(MensagemResposta::new("Cliente deletado")))
}

// =============================================================================
//  FORNECEDORES
// =============================================================================

// GET /api/fornecedores
#[utoipa::path(
    get,
    path = "/api/fornecedores",
    tag = "Fornecedores",
    responses(
        (status = 200, description = "Fornecedores", body = Vec<Fornecedor>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_fornecedores(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let fornecedores = app_state.cadastro_service.list_fornecedores().await?;
    Ok(Json(fornecedores))
}

// POST /api/fornecedores
#[utoipa::path(
    post,
    path = "/api/fornecedores",
    tag = "Fornecedores",
    request_body = FornecedorPayload,
    responses(
        (status = 200, description = "Fornecedor criado", body = Fornecedor),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_fornecedor(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<FornecedorPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let fornecedor = app_state.cadastro_service.create_fornecedor(payload).await?;
    Ok(Json(fornecedor))
}

// PUT /api/fornecedores/{id}
#[utoipa::path(
    put,
    path = "/api/fornecedores/{id}",
    tag = "Fornecedores",
    request_body = FornecedorPayload,
    params(("id" = i32, Path, description = "ID do fornecedor")),
    responses(
        (status = 200, description = "Fornecedor atualizado", body = Fornecedor),
        (status = 404, description = "Fornecedor não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_fornecedor(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<FornecedorPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let fornecedor = app_state.cadastro_service.update_fornecedor(id, payload).await?;
    Ok(Json(fornecedor))
}

// DELETE /api/fornecedores/{id}
#[utoipa::path(
    delete,
    path = "/api/fornecedores/{id}",
    tag = "Fornecedores",
    params(("id" = i32, Path, description = "ID do fornecedor")),
    responses(
        (status = 200, description = "Fornecedor deletado", body = MensagemResposta)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_fornecedor(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cadastro_service.delete_fornecedor(id).await?;
    Ok(Json(MensagemResposta::new("Fornecedor deletado")))
}
