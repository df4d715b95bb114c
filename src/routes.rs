// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

pub const BANNER: &str = "Backend do sistema de management está rodando!";

pub fn build_app(app_state: AppState) -> Router {
    // Define as rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let cliente_routes = Router::new()
        .route(
            "/",
            get(handlers::cadastro::list_clientes).post(handlers::cadastro::create_cliente),
        )
        .route(
            "/{id}",
            put(handlers::cadastro::update_cliente).delete(handlers::cadastro::delete_cliente),
        );

    let fornecedor_routes = Router::new()
        .route(
            "/",
            get(handlers::cadastro::list_fornecedores).post(handlers::cadastro::create_fornecedor),
        )
        .route(
            "/{id}",
            put(handlers::cadastro::update_fornecedor).delete(handlers::cadastro::delete_fornecedor),
        );

    let produto_routes = Router::new()
        .route(
            "/",
            get(handlers::catalogo::list_produtos).post(handlers::catalogo::create_produto),
        )
        .route(
            "/{id}",
            put(handlers::catalogo::update_produto).delete(handlers::catalogo::delete_produto),
        );

    let pedido_routes = Router::new()
        .route(
            "/",
            get(handlers::operacoes::list_pedidos).post(handlers::operacoes::create_pedido),
        )
        .route(
            "/{id}",
            put(handlers::operacoes::update_pedido).delete(handlers::operacoes::delete_pedido),
        );

    let producao_routes = Router::new()
        .route(
            "/",
            get(handlers::operacoes::list_producao).post(handlers::operacoes::create_producao),
        )
        .route(
            "/{id}",
            put(handlers::operacoes::update_producao).delete(handlers::operacoes::delete_producao),
        );

    let estoque_routes = Router::new()
        .route(
            "/",
            get(handlers::estoque::list_movimentos).post(handlers::estoque::create_movimento),
        )
        .route("/saldo", get(handlers::estoque::get_saldo))
        .route(
            "/{id}",
            put(handlers::estoque::update_movimento).delete(handlers::estoque::delete_movimento),
        );

    // Tudo aqui dentro exige Bearer válido
    let protected = Router::new()
        .route("/usuarios/me", get(handlers::auth::get_me))
        .route("/dashboard", get(handlers::dashboard::get_resumo))
        .nest("/clientes", cliente_routes)
        .nest("/fornecedores", fornecedor_routes)
        .nest("/produtos", produto_routes)
        .nest("/pedidos", pedido_routes)
        .nest("/producao", producao_routes)
        .nest("/estoque", estoque_routes)
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    Router::new()
        .route("/", get(|| async { BANNER }))
        .route("/api/health", get(|| async { "OK" }))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/auth", auth_routes)
        .nest("/api", protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
