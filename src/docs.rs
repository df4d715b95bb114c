// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,

        // --- Clientes ---
        handlers::cadastro::list_clientes,
        handlers::cadastro::create_cliente,
        handlers::cadastro::update_cliente,
        handlers::cadastro::delete_cliente,

        // --- Fornecedores ---
        handlers::cadastro::list_fornecedores,
        handlers::cadastro::create_fornecedor,
        handlers::cadastro::update_fornecedor,
        handlers::cadastro::delete_fornecedor,

        // --- Produtos ---
        handlers::catalogo::list_produtos,
        handlers::catalogo::create_produto,
        handlers::catalogo::update_produto,
        handlers::catalogo::delete_produto,

        // --- Pedidos ---
        handlers::operacoes::list_pedidos,
        handlers::operacoes::create_pedido,
        handlers::operacoes::update_pedido,
        handlers::operacoes::delete_pedido,

        // --- Produção ---
        handlers::operacoes::list_producao,
        handlers::operacoes::create_producao,
        handlers::operacoes::update_producao,
        handlers::operacoes::delete_producao,

        // --- Estoque ---
        handlers::estoque::list_movimentos,
        handlers::estoque::get_saldo,
        handlers::estoque::create_movimento,
        handlers::estoque::update_movimento,
        handlers::estoque::delete_movimento,

        // --- Dashboard ---
        handlers::dashboard::get_resumo,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Usuario,
            models::auth::UsuarioPublico,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,
            models::auth::Claims,

            // --- Cadastros ---
            models::cadastro::TipoPessoa,
            models::cadastro::Cliente,
            models::cadastro::ClientePayload,
            models::cadastro::Fornecedor,
            models::cadastro::FornecedorPayload,

            // --- Catálogo ---
            models::catalogo::Produto,
            models::catalogo::ProdutoPayload,

            // --- Operações ---
            models::operacoes::Pedido,
            models::operacoes::PedidoPayload,
            models::operacoes::Producao,
            models::operacoes::ProducaoPayload,

            // --- Estoque ---
            models::estoque::TipoMovimento,
            models::estoque::EstoqueMovimento,
            models::estoque::EstoqueMovimentoPayload,
            models::estoque::SaldoProduto,

            // --- Dashboard ---
            models::dashboard::DashboardResumo,
            models::dashboard::TipoAtividade,
            models::dashboard::Atividade,

            models::comum::MensagemResposta,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário"),
        (name = "Clientes", description = "Cadastro de Clientes (PF/PJ)"),
        (name = "Fornecedores", description = "Cadastro de Fornecedores (PF/PJ)"),
        (name = "Produtos", description = "Catálogo de Produtos"),
        (name = "Pedidos", description = "Pedidos de Clientes"),
        (name = "Produção", description = "Ordens de Produção"),
        (name = "Estoque", description = "Entradas, Saídas e Saldo"),
        (name = "Dashboard", description = "Indicadores Gerenciais")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
