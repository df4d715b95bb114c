// src/db/operacoes_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::operacoes::{Pedido, PedidoPayload, Producao, ProducaoPayload},
};

#[derive(Clone)]
pub struct OperacoesRepository {
    pool: PgPool,
}

impl OperacoesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Pedidos
    // ---

    pub async fn list_pedidos(&self) -> Result<Vec<Pedido>, AppError> {
        let pedidos = sqlx::query_as::<_, Pedido>("SELECT * FROM pedidos ORDER BY data DESC, id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(pedidos)
    }

    pub async fn create_pedido(&self, p: &PedidoPayload) -> Result<Pedido, AppError> {
        let pedido = sqlx::query_as::<_, Pedido>(
            r#"
            INSERT INTO pedidos (cliente_id, status, data, total)
            VALUES ($1, $2, COALESCE($3, NOW()::timestamp), COALESCE($4, 0))
            RETURNING *
            "#,
        )
        .bind(p.cliente_id)
        .bind(&p.status)
        .bind(p.data)
        .bind(p.total)
        .fetch_one(&self.pool)
        .await?;
        Ok(pedido)
    }

    pub async fn update_pedido(
        &self,
        id: i32,
        p: &PedidoPayload,
    ) -> Result<Option<Pedido>, AppError> {
        let pedido = sqlx::query_as::<_, Pedido>(
            r#"
            UPDATE pedidos SET
                cliente_id = $1,
                status = $2,
                data = COALESCE($3, data),
                total = COALESCE($4, total)
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(p.cliente_id)
        .bind(&p.status)
        .bind(p.data)
        .bind(p.total)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(pedido)
    }

    pub async fn delete_pedido(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM pedidos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ---
    // Produção
    // ---

    pub async fn list_producao(&self) -> Result<Vec<Producao>, AppError> {
        let ordens = sqlx::query_as::<_, Producao>("SELECT * FROM producao ORDER BY prazo ASC, id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(ordens)
    }

    pub async fn create_producao(&self, p: &ProducaoPayload) -> Result<Producao, AppError> {
        let ordem = sqlx::query_as::<_, Producao>(
            r#"
            INSERT INTO producao (produto_id, quantidade, status, prazo)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(p.produto_id)
        .bind(p.quantidade)
        .bind(&p.status)
        .bind(p.prazo)
        .fetch_one(&self.pool)
        .await?;
        Ok(ordem)
    }

    pub async fn update_producao(
        &self,
        id: i32,
        p: &ProducaoPayload,
    ) -> Result<Option<Producao>, AppError> {
        let ordem = sqlx::query_as::<_, Producao>(
            r#"
            UPDATE producao SET produto_id = $1, quantidade = $2, status = $3, prazo = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(p.produto_id)
        .bind(p.quantidade)
        .bind(&p.status)
        .bind(p.prazo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(ordem)
    }

    pub async fn delete_producao(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM producao WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
