// src/models/estoque.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::datas;

// Mapeia o CREATE TYPE tipo_movimento do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "tipo_movimento")]
pub enum TipoMovimento {
    Entrada,
    #[sqlx(rename = "Saída")]
    #[serde(rename = "Saída")]
    Saida,
}

// --- MOVIMENTAÇÃO (Histórico) ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EstoqueMovimento {
    pub id: i32,
    pub produto_id: i32,
    pub quantidade: i32,
    pub tipo: TipoMovimento,
    pub data: NaiveDateTime,
}

impl EstoqueMovimento {
    /// Efeito do movimento no saldo: entradas somam, saídas subtraem.
    pub fn delta(&self) -> i64 {
        match self.tipo {
            TipoMovimento::Entrada => i64::from(self.quantidade),
            TipoMovimento::Saida => -i64::from(self.quantidade),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EstoqueMovimentoPayload {
    pub produto_id: Option<i32>,
    #[schema(example = 10)]
    pub quantidade: Option<i32>,
    pub tipo: Option<TipoMovimento>,
    #[serde(default, deserialize_with = "datas::opcional_data_hora")]
    #[schema(value_type = Option<String>, example = "2024-03-10T14:30")]
    pub data: Option<NaiveDateTime>,
}

// --- SALDO POR PRODUTO ---
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SaldoProduto {
    pub produto_id: i32,
    pub produto_nome: String,
    pub quantidade: i64,
}
