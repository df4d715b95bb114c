// src/services/estoque_service.rs

use std::collections::{BTreeMap, HashMap};

use crate::{
    common::error::AppError,
    db::{CatalogoRepository, EstoqueRepository},
    models::{
        catalogo::Produto,
        estoque::{EstoqueMovimento, SaldoProduto},
    },
};

pub const PRODUTO_DESCONHECIDO: &str = "Desconhecido";

#[derive(Clone)]
pub struct EstoqueService {
    repo: EstoqueRepository,
    catalogo: CatalogoRepository,
}

impl EstoqueService {
    pub fn new(repo: EstoqueRepository, catalogo: CatalogoRepository) -> Self {
        Self { repo, catalogo }
    }

    pub async fn saldo(&self) -> Result<Vec<SaldoProduto>, AppError> {
        let (movimentos, produtos) =
            tokio::try_join!(self.repo.list_movimentos(), self.catalogo.list_produtos())?;
        Ok(consolidar_saldo(&movimentos, &produtos))
    }
}

/// Soma as entradas e subtrai as saídas de cada produto, na ordem do `produto_id`.
/// Movimentos de produtos que não existem mais aparecem como "Desconhecido".
pub fn consolidar_saldo(movimentos: &[EstoqueMovimento], produtos: &[Produto]) -> Vec<SaldoProduto> {
    let nomes: HashMap<i32, &str> = produtos.iter().map(|p| (p.id, p.nome.as_str())).collect();

    let mut totais: BTreeMap<i32, i64> = BTreeMap::new();
    for m in movimentos {
        *totais.entry(m.produto_id).or_insert(0) += m.delta();
    }

    totais
        .into_iter()
        .map(|(produto_id, quantidade)| SaldoProduto {
            produto_id,
            produto_nome: nomes
                .get(&produto_id)
                .copied()
                .unwrap_or(PRODUTO_DESCONHECIDO)
                .to_string(),
            quantidade,
        })
        .collect()
}
