use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{AuthResponse, Claims, LoginUserPayload, RegisterUserPayload},
};

fn obrigatorio<'a>(valor: &'a Option<String>, campo: &'static str) -> Result<&'a str, AppError> {
    valor.as_deref().ok_or(AppError::CampoObrigatorio(campo))
}

// Handler de registro
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterUserPayload,
    responses(
        (status = 200, description = "Usuário registrado", body = AuthResponse),
        (status = 400, description = "E-mail já cadastrado ou dados inválidos")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<RegisterUserPayload>, AppError>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let nome = obrigatorio(&payload.nome, "nome")?;
    let email = obrigatorio(&payload.email, "email")?;
    let senha = obrigatorio(&payload.senha, "senha")?;

    let resposta = app_state
        .auth_service
        .register_user(nome, email, senha, payload.papel.as_deref())
        .await?;

    Ok(Json(resposta))
}

// Handler de login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "Login realizado", body = AuthResponse),
        (status = 400, description = "Email ou senha incorretos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<LoginUserPayload>, AppError>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let email = obrigatorio(&payload.email, "email")?;
    let senha = obrigatorio(&payload.senha, "senha")?;

    let resposta = app_state.auth_service.login_user(email, senha).await?;

    Ok(Json(resposta))
}

// Handler da rota protegida /me
#[utoipa::path(
    get,
    path = "/api/usuarios/me",
    tag = "Users",
    responses(
        (status = 200, description = "Claims do token atual", body = Claims),
        (status = 401, description = "Não autenticado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(claims): AuthenticatedUser) -> Json<Claims> {
    Json(claims)
}
