// src/db/estoque_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::estoque::{EstoqueMovimento, EstoqueMovimentoPayload},
};

#[derive(Clone)]
pub struct EstoqueRepository {
    pool: PgPool,
}

impl EstoqueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_movimentos(&self) -> Result<Vec<EstoqueMovimento>, AppError> {
        let movimentos = sqlx::query_as::<_, EstoqueMovimento>(
            "SELECT * FROM entradas_saida_estoque ORDER BY data DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(movimentos)
    }

    pub async fn create_movimento(
        &self,
        p: &EstoqueMovimentoPayload,
    ) -> Result<EstoqueMovimento, AppError> {
        let movimento = sqlx::query_as::<_, EstoqueMovimento>(
            r#"
            INSERT INTO entradas_saida_estoque (produto_id, quantidade, tipo, data)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(p.produto_id)
        .bind(p.quantidade)
        .bind(p.tipo)
        .bind(p.data)
        .fetch_one(&self.pool)
        .await?;
        Ok(movimento)
    }

    pub async fn update_movimento(
        &self,
        id: i32,
        p: &EstoqueMovimentoPayload,
    ) -> Result<Option<EstoqueMovimento>, AppError> {
        let movimento = sqlx::query_as::<_, EstoqueMovimento>(
            r#"
            UPDATE entradas_saida_estoque SET produto_id = $1, quantidade = $2, tipo = $3, data = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(p.produto_id)
        .bind(p.quantidade)
        .bind(p.tipo)
        .bind(p.data)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(movimento)
    }

    pub async fn delete_movimento(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM entradas_saida_estoque WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
