pub mod auth;
pub mod cadastro;
pub mod catalogo;
pub mod dashboard;
pub mod estoque;
pub mod operacoes;
