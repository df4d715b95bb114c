// src/db/catalogo_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::catalogo::{Produto, ProdutoPayload},
};

#[derive(Clone)]
pub struct CatalogoRepository {
    pool: PgPool,
}

impl CatalogoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_produtos(&self) -> Result<Vec<Produto>, AppError> {
        let produtos = sqlx::query_as::<_, Produto>("SELECT * FROM produtos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(produtos)
    }

    pub async fn count_produtos(&self) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM produtos")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn create_produto(&self, p: &ProdutoPayload) -> Result<Produto, AppError> {
        let produto = sqlx::query_as::<_, Produto>(
            r#"
            INSERT INTO produtos (nome, categoria, tamanho, cor, preco, estoque, fornecedor_id)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7)
            RETURNING *
            "#,
        )
        .bind(&p.nome)
        .bind(&p.categoria)
        .bind(&p.tamanho)
        .bind(&p.cor)
        .bind(p.preco)
        .bind(p.estoque)
        .bind(p.fornecedor_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(produto)
    }

    pub async fn update_produto(
        &self,
        id: i32,
        p: &ProdutoPayload,
    ) -> Result<Option<Produto>, AppError> {
        let produto = sqlx::query_as::<_, Produto>(
            r#"
            UPDATE produtos SET
                nome = $1, categoria = $2, tamanho = $3, cor = $4,
                preco = $5, estoque = COALESCE($6, estoque), fornecedor_id = $7
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&p.nome)
        .bind(&p.categoria)
        .bind(&p.tamanho)
        .bind(&p.cor)
        .bind(p.preco)
        .bind(p.estoque)
        .bind(p.fornecedor_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(produto)
    }

    pub async fn delete_produto(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
