// src/models/auth.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Usuario {
    pub id: i32,
    pub nome: String,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub senha: String,

    pub papel: String,
    pub criado_em: NaiveDateTime,
}

// Campos públicos devolvidos junto com o token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsuarioPublico {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub papel: String,
}

impl From<Usuario> for UsuarioPublico {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nome: u.nome,
            email: u.email,
            papel: u.papel,
        }
    }
}

// Dados para registro de um novo usuário
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserPayload {
    #[validate(required(message = "O nome é obrigatório."))]
    #[schema(example = "Admin")]
    pub nome: Option<String>,

    #[validate(
        required(message = "O e-mail é obrigatório."),
        email(message = "O e-mail fornecido é inválido.")
    )]
    #[schema(example = "admin@email.com")]
    pub email: Option<String>,

    #[validate(required(message = "A senha é obrigatória."))]
    #[schema(example = "abc123")]
    pub senha: Option<String>,

    #[schema(example = "admin")]
    pub papel: Option<String>,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(required(message = "O e-mail é obrigatório."))]
    #[schema(example = "admin@email.com")]
    pub email: Option<String>,

    #[validate(required(message = "A senha é obrigatória."))]
    #[schema(example = "abc123")]
    pub senha: Option<String>,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UsuarioPublico,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub id: i32,
    pub email: String,
    pub papel: String,
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}
