// src/models/operacoes.rs

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::datas;

// --- PEDIDOS ---

// `status` é texto livre: "Pendente", "Em andamento", "Finalizado"...
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pedido {
    pub id: i32,
    pub cliente_id: i32,
    pub status: String,
    pub data: NaiveDateTime,
    #[schema(value_type = f64, example = 459.9)]
    pub total: Decimal,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PedidoPayload {
    pub cliente_id: Option<i32>,
    #[schema(example = "Pendente")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "datas::opcional_data_hora")]
    #[schema(value_type = Option<String>, example = "2024-03-10T14:30")]
    pub data: Option<NaiveDateTime>,
    #[schema(value_type = Option<f64>, example = 459.9)]
    pub total: Option<Decimal>,
}

// --- PRODUÇÃO ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Producao {
    pub id: i32,
    pub produto_id: i32,
    pub quantidade: i32,
    pub status: String,
    #[schema(value_type = String, format = Date, example = "2024-12-01")]
    pub prazo: NaiveDate,
    pub criado_em: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProducaoPayload {
    pub produto_id: Option<i32>,
    #[schema(example = 50)]
    pub quantidade: Option<i32>,
    #[schema(example = "Em Andamento")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "datas::opcional_data")]
    #[schema(value_type = Option<String>, format = Date, example = "2024-12-01")]
    pub prazo: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pedido_aceita_data_do_formulario() {
        let p: PedidoPayload = serde_json::from_value(json!({
            "cliente_id": 1,
            "status": "Pendente",
            "data": "2024-03-10T14:30",
            "total": 120.5
        }))
        .unwrap();
        assert_eq!(p.data.unwrap().to_string(), "2024-03-10 14:30:00");
        assert_eq!(p.total.unwrap().to_string(), "120.5");
    }

    #[test]
    fn campos_ausentes_ficam_vazios() {
        let p: ProducaoPayload = serde_json::from_value(json!({ "status": "Pendente" })).unwrap();
        assert!(p.produto_id.is_none());
        assert!(p.prazo.is_none());
    }

    #[test]
    fn prazo_invalido_e_rejeitado() {
        let r: Result<ProducaoPayload, _> = serde_json::from_value(json!({ "prazo": "ontem" }));
        assert!(r.is_err());
    }
}
