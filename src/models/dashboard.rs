// src/models/dashboard.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 1. Contadores (Os Cards do Topo)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResumo {
    pub pedidos: usize,
    pub produtos: usize,
    pub clientes: usize,
    pub producoes_ativas: usize,
    pub atividades: Vec<Atividade>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TipoAtividade {
    Pedido,
    Producao,
    Cliente,
}

// 2. Atividades recentes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Atividade {
    pub id: i32,
    pub tipo: TipoAtividade,
    pub descricao: String,
}
