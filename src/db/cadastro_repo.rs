// src/db/cadastro_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::cadastro::{Cliente, DadosCadastro, Fornecedor},
};

#[derive(Clone)]
pub struct CadastroRepository {
    pool: PgPool,
}

impl CadastroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CLIENTES
    // =========================================================================

    pub async fn list_clientes(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes =
            sqlx::query_as::<_, Cliente>("SELECT * FROM clientes ORDER BY criado_em DESC, id DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(clientes)
    }

    pub async fn create_cliente(&self, dados: &DadosCadastro) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (
                nome, email, telefone, endereco, cidade, estado,
                tipo, cpf, cnpj, observacoes, ativo, criado_em
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW())
            RETURNING *
            "#,
        )
        .bind(&dados.nome)
        .bind(&dados.email)
        .bind(&dados.telefone)
        .bind(&dados.endereco)
        .bind(&dados.cidade)
        .bind(&dados.estado)
        .bind(dados.tipo)
        .bind(&dados.cpf)
        .bind(&dados.cnpj)
        .bind(&dados.observacoes)
        .bind(dados.ativo)
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn update_cliente(
        &self,
        id: i32,
        dados: &DadosCadastro,
    ) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes SET
                nome = $1,
                email = $2,
                telefone = $3,
                endereco = $4,
                cidade = $5,
                estado = $6,
                tipo = $7,
                cpf = $8,
                cnpj = $9,
                observacoes = $10,
                ativo = $11,
                atualizado_em = NOW()
            WHERE id = $12
            RETURNING *
            "#,
        )
        .bind(&dados.nome)
        .bind(&dados.email)
        .bind(&dados.telefone)
        .bind(&dados.endereco)
        .bind(&dados.cidade)
        .bind(&dados.estado)
        .bind(dados.tipo)
        .bind(&dados.cpf)
        .bind(&dados.cnpj)
        .bind(&dados.observacoes)
        .bind(dados.ativo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn delete_cliente(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // =========================================================================
    //  FORNECEDORES
    // =========================================================================

    pub async fn list_fornecedores(&self) -> Result<Vec<Fornecedor>, AppError> {
        let fornecedores = sqlx::query_as::<_, Fornecedor>("SELECT * FROM fornecedores ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(fornecedores)
    }

    pub async fn create_fornecedor(&self, dados: &DadosCadastro) -> Result<Fornecedor, AppError> {
        let fornecedor = sqlx::query_as::<_, Fornecedor>(
            r#"
            INSERT INTO fornecedores (
                nome, email, telefone, tipo, cpf, cnpj, endereco,
                cidade, estado, contato_responsavel, observacoes, ativo
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&dados.nome)
        .bind(&dados.email)
        .bind(&dados.telefone)
        .bind(dados.tipo)
        .bind(&dados.cpf)
        .bind(&dados.cnpj)
        .bind(&dados.endereco)
        .bind(&dados.cidade)
        .bind(&dados.estado)
        .bind(&dados.contato_responsavel)
        .bind(&dados.observacoes)
        .bind(dados.ativo)
        .fetch_one(&self.pool)
        .await?;

        Ok(fornecedor)
    }

    pub async fn update_fornecedor(
        &self,
        id: i32,
        dados: &DadosCadastro,
    ) -> Result<Option<Fornecedor>, AppError> {
        let fornecedor = sqlx::query_as::<_, Fornecedor>(
            r#"
            UPDATE fornecedores SET
                nome = $1,
                email = $2,
                telefone = $3,
                tipo = $4,
                cpf = $5,
                cnpj = $6,
                endereco = $7,
                cidade = $8,
                estado = $9,
                contato_responsavel = $10,
                observacoes = $11,
                ativo = $12
            WHERE id = $13
            RETURNING *
            "#,
        )
        .bind(&dados.nome)
        .bind(&dados.email)
        .bind(&dados.telefone)
        .bind(dados.tipo)
        .bind(&dados.cpf)
        .bind(&dados.cnpj)
        .bind(&dados.endereco)
        .bind(&dados.cidade)
        .bind(&dados.estado)
        .bind(&dados.contato_responsavel)
        .bind(&dados.observacoes)
        .bind(dados.ativo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(fornecedor)
    }

    pub async fn delete_fornecedor(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM fornecedores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
