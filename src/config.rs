// src/config.rs

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, fmt, str::FromStr, time::Duration};

use crate::{
    db::{CadastroRepository, CatalogoRepository, EstoqueRepository, OperacoesRepository, UserRepository},
    services::{auth::AuthService, CadastroService, DashboardService, EstoqueService},
};

/// Usuário criado na inicialização quando `ADMIN_EMAIL` e `ADMIN_SENHA` estão definidos.
#[derive(Clone)]
pub struct AdminInicial {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

impl fmt::Debug for AdminInicial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminInicial")
            .field("nome", &self.nome)
            .field("email", &self.email)
            .field("senha", &OCULTO)
            .finish()
    }
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_addr: String,
    pub db_max_connections: u32,
    pub jwt_expiracao_horas: i64,
    pub admin: Option<AdminInicial>,
}

const OCULTO: &str = "***";

// A URL do banco pode carregar senha, então também fica de fora.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &OCULTO)
            .field("jwt_secret", &OCULTO)
            .field("server_addr", &self.server_addr)
            .field("db_max_connections", &self.db_max_connections)
            .field("jwt_expiracao_horas", &self.jwt_expiracao_horas)
            .field("admin", &self.admin)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|nome| env::var(nome).ok())
    }

    /// Monta a configuração a partir de qualquer fonte de variáveis.
    pub fn from_lookup<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin = match (var("ADMIN_EMAIL"), var("ADMIN_SENHA")) {
            (Some(email), Some(senha)) => Some(AdminInicial {
                nome: var("ADMIN_NOME").unwrap_or_else(|| "Admin".to_string()),
                email,
                senha,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: var("DATABASE_URL").context("DATABASE_URL deve ser definida")?,
            jwt_secret: var("JWT_SECRET").context("JWT_SECRET deve ser definido")?,
            server_addr: var("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            db_max_connections: var_numerica(&var, "DB_MAX_CONNECTIONS", 5)?,
            jwt_expiracao_horas: var_numerica(&var, "JWT_EXPIRACAO_HORAS", 24)?,
            admin,
        })
    }
}

fn var_numerica<F, T>(var: &F, nome: &str, padrao: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(nome) {
        Some(valor) => valor
            .parse()
            .with_context(|| format!("{} deve ser numérico (recebido '{}')", nome, valor)),
        None => Ok(padrao),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Config,
    pub auth_service: AuthService,
    pub cadastro_service: CadastroService,
    pub catalogo_repo: CatalogoRepository,
    pub operacoes_repo: OperacoesRepository,
    pub estoque_repo: EstoqueRepository,
    pub estoque_service: EstoqueService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool, config))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: PgPool, config: Config) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let cadastro_repo = CadastroRepository::new(db_pool.clone());
        let catalogo_repo = CatalogoRepository::new(db_pool.clone());
        let operacoes_repo = OperacoesRepository::new(db_pool.clone());
        let estoque_repo = EstoqueRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo,
            config.jwt_secret.clone(),
            chrono::Duration::hours(config.jwt_expiracao_horas),
        );
        let cadastro_service = CadastroService::new(cadastro_repo.clone());
        let estoque_service = EstoqueService::new(estoque_repo.clone(), catalogo_repo.clone());
        let dashboard_service = DashboardService::new(
            cadastro_repo,
            catalogo_repo.clone(),
            operacoes_repo.clone(),
        );

        Self {
            db_pool,
            config,
            auth_service,
            cadastro_service,
            catalogo_repo,
            operacoes_repo,
            estoque_repo,
            estoque_service,
            dashboard_service,
        }
    }
}
