// src/services/cadastro_service.rs

use crate::{
    common::error::AppError,
    db::CadastroRepository,
    models::cadastro::{Cliente, ClientePayload, DadosCadastro, Fornecedor, FornecedorPayload},
};

/// Clientes e fornecedores passam por aqui para que a regra PF/PJ
/// (só o documento do tipo escolhido é gravado) valha nos dois cadastros.
#[derive(Clone)]
pub struct CadastroService {
    repo: CadastroRepository,
}

impl CadastroService {
    pub fn new(repo: CadastroRepository) -> Self {
        Self { repo }
    }

    pub async fn list_clientes(&self) -> Result<Vec<Cliente>, AppError> {
        self.repo.list_clientes().await
    }

    pub async fn create_cliente(&self, payload: ClientePayload) -> Result<Cliente, AppError> {
        let dados = DadosCadastro::from(payload);
        self.repo.create_cliente(&dados).await
    }

    pub async fn update_cliente(&self, id: i32, payload: ClientePayload) -> Result<Cliente, AppError> {
        let dados = DadosCadastro::from(payload);
        self.repo
            .update_cliente(id, &dados)
            .await?
            .ok_or(AppError::NaoEncontrado("Cliente não encontrado"))
    }

    pub async fn delete_cliente(&self, id: i32) -> Result<(), AppError> {
        self.repo.delete_cliente(id).await
    }

    pub async fn list_fornecedores(&self) -> Result<Vec<Fornecedor>, AppError> {
        self.repo.list_fornecedores().await
    }

    pub async fn create_fornecedor(&self, payload: FornecedorPayload) -> Result<Fornecedor, AppError> {
        let dados = DadosCadastro::from(payload);
        self.repo.create_fornecedor(&dados).await
    }

    pub async fn update_fornecedor(
        &self,
        id: i32,
        payload: FornecedorPayload,
    ) -> Result<Fornecedor, AppError> {
        let dados = DadosCadastro::from(payload);
        self.repo
            .update_fornecedor(id, &dados)
            .await?
            .ok_or(AppError::NaoEncontrado("Fornecedor não encontrado"))
    }

    pub async fn delete_fornecedor(&self, id: i32) -> Result<(), AppError> {
        self.repo.delete_fornecedor(id).await
    }
}
