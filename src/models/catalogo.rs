// src/models/catalogo.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub categoria: Option<String>,
    pub tamanho: Option<String>,
    pub cor: Option<String>,
    #[schema(value_type = f64, example = 89.9)]
    pub preco: Decimal,
    pub estoque: i32,
    // Sem FOREIGN KEY: pode apontar para um fornecedor já excluído.
    pub fornecedor_id: Option<i32>,
    pub criado_em: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProdutoPayload {
    #[schema(example = "Camiseta Básica")]
    pub nome: Option<String>,
    #[schema(example = "Camisetas")]
    pub categoria: Option<String>,
    #[schema(example = "M")]
    pub tamanho: Option<String>,
    #[schema(example = "Azul")]
    pub cor: Option<String>,
    #[schema(value_type = Option<f64>, example = 89.9)]
    pub preco: Option<Decimal>,
    #[schema(example = 25)]
    pub estoque: Option<i32>,
    pub fornecedor_id: Option<i32>,
}
