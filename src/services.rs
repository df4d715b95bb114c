pub mod auth;
pub mod cadastro_service;
pub mod dashboard_service;
pub mod estoque_service;

pub use cadastro_service::CadastroService;
pub use dashboard_service::DashboardService;
pub use estoque_service::EstoqueService;
