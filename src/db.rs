pub mod user_repo;
pub use user_repo::UserRepository;
pub mod cadastro_repo;
pub use cadastro_repo::CadastroRepository;
pub mod catalogo_repo;
pub use catalogo_repo::CatalogoRepository;
pub mod operacoes_repo;
pub use operacoes_repo::OperacoesRepository;
pub mod estoque_repo;
pub use estoque_repo::EstoqueRepository;
