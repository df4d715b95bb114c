// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{AuthResponse, Claims, Usuario, UsuarioPublico},
};

pub const PAPEL_PADRAO: &str = "usuario";

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    expiracao: Duration,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String, expiracao: Duration) -> Self {
        Self {
            user_repo,
            jwt_secret,
            expiracao,
        }
    }

    pub async fn register_user(
        &self,
        nome: &str,
        email: &str,
        senha: &str,
        papel: Option<&str>,
    ) -> Result<AuthResponse, AppError> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::EmailAlreadyExists);
        }

        // Hashing é CPU-bound: fora do executor assíncrono
        let senha_clone = senha.to_owned();
        let hashed_password = tokio::task::spawn_blocking(move || hash(&senha_clone, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let papel = papel.filter(|p| !p.trim().is_empty()).unwrap_or(PAPEL_PADRAO);
        let novo_usuario = self
            .user_repo
            .create_user(nome, email, &hashed_password, papel)
            .await?;

        tracing::info!("👤 Usuário {} registrado (papel: {})", novo_usuario.email, novo_usuario.papel);

        let token = self.create_token(&novo_usuario)?;
        Ok(AuthResponse {
            token,
            user: novo_usuario.into(),
        })
    }

    pub async fn login_user(&self, email: &str, senha: &str) -> Result<AuthResponse, AppError> {
        let usuario = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let senha_clone = senha.to_owned();
        let hash_clone = usuario.senha.clone();

        // Executa a verificação em um thread separado
        let senha_valida = tokio::task::spawn_blocking(move || verify(&senha_clone, &hash_clone))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !senha_valida {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.create_token(&usuario)?;
        Ok(AuthResponse {
            token,
            user: UsuarioPublico::from(usuario),
        })
    }

    /// Cria o usuário administrador inicial se o e-mail ainda não existir.
    pub async fn ensure_admin(&self, nome: &str, email: &str, senha: &str) -> Result<(), AppError> {
        match self.register_user(nome, email, senha, Some("admin")).await {
            Ok(resposta) => {
                tracing::info!("✅ Administrador inicial criado (id {})", resposta.user.id);
                Ok(())
            }
            Err(AppError::EmailAlreadyExists) => {
                tracing::info!("Administrador {} já existe, nada a fazer.", email);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }

    fn create_token(&self, usuario: &Usuario) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + self.expiracao;

        let claims = Claims {
            id: usuario.id,
            email: usuario.email.clone(),
            papel: usuario.papel.clone(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
