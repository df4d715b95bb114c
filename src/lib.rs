//! Backend do ManufacManager: clientes, fornecedores, produtos, pedidos,
//! produção e estoque atrás de uma API REST autenticada por JWT.

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::{AppState, Config};
pub use routes::build_app;
