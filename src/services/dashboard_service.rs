// src/services/dashboard_service.rs

use crate::{
    common::error::AppError,
    db::{CadastroRepository, CatalogoRepository, OperacoesRepository},
    models::{
        cadastro::Cliente,
        dashboard::{Atividade, DashboardResumo, TipoAtividade},
        operacoes::{Pedido, Producao},
    },
};

const STATUS_ATIVOS: [&str; 2] = ["Pendente", "Em Andamento"];
const RECENTES_POR_TIPO: usize = 3;
const MAX_ATIVIDADES: usize = 6;

#[derive(Clone)]
pub struct DashboardService {
    cadastro: CadastroRepository,
    catalogo: CatalogoRepository,
    operacoes: OperacoesRepository,
}

impl DashboardService {
    pub fn new(
        cadastro: CadastroRepository,
        catalogo: CatalogoRepository,
        operacoes: OperacoesRepository,
    ) -> Self {
        Self {
            cadastro,
            catalogo,
            operacoes,
        }
    }

    pub async fn get_resumo(&self) -> Result<DashboardResumo, AppError> {
        let (pedidos, total_produtos, clientes, producao) = tokio::try_join!(
            self.operacoes.list_pedidos(),
            self.catalogo.count_produtos(),
            self.cadastro.list_clientes(),
            self.operacoes.list_producao(),
        )?;

        let total_produtos = usize::try_from(total_produtos).unwrap_or_default();
        Ok(montar_resumo(&pedidos, total_produtos, &clientes, &producao))
    }
}

pub fn montar_resumo(
    pedidos: &[Pedido],
    total_produtos: usize,
    clientes: &[Cliente],
    producao: &[Producao],
) -> DashboardResumo {
    let producoes_ativas = producao
        .iter()
        .filter(|p| STATUS_ATIVOS.contains(&p.status.as_str()))
        .count();

    let mut atividades: Vec<Atividade> = ultimos(pedidos)
        .iter()
        .map(|p| Atividade {
            id: p.id,
            tipo: TipoAtividade::Pedido,
            descricao: format!("📦 Pedido #{} criado", p.id),
        })
        .chain(ultimos(producao).iter().map(|p| Atividade {
            id: p.id,
            tipo: TipoAtividade::Producao,
            descricao: format!("🧵 Produção iniciada para produto {}", p.produto_id),
        }))
        .chain(ultimos(clientes).iter().map(|c| Atividade {
            id: c.id,
            tipo: TipoAtividade::Cliente,
            descricao: format!("👤 Novo cliente cadastrado: {}", c.nome),
        }))
        .collect();

    atividades.reverse();
    atividades.truncate(MAX_ATIVIDADES);

    DashboardResumo {
        pedidos: pedidos.len(),
        produtos: total_produtos,
        clientes: clientes.len(),
        producoes_ativas,
        atividades,
    }
}

fn ultimos<T>(lista: &[T]) -> &[T] {
    &lista[lista.len().saturating_sub(RECENTES_POR_TIPO)..]
}
