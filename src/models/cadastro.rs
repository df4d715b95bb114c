// src/models/cadastro.rs
//
// Clientes e fornecedores compartilham o mesmo perfil PF/PJ.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

// Mapeia o CREATE TYPE tipo_pessoa do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "tipo_pessoa")]
pub enum TipoPessoa {
    PF, // Pessoa Física -> usa CPF
    PJ, // Pessoa Jurídica -> usa CNPJ
}

impl TipoPessoa {
    /// Mantém apenas o documento que corresponde ao tipo.
    /// Documento vazio conta como ausente.
    pub fn documentos(
        self,
        cpf: Option<String>,
        cnpj: Option<String>,
    ) -> (Option<String>, Option<String>) {
        match self {
            TipoPessoa::PF => (vazio_para_none(cpf), None),
            TipoPessoa::PJ => (None, vazio_para_none(cnpj)),
        }
    }
}

pub fn vazio_para_none(valor: Option<String>) -> Option<String> {
    valor.filter(|v| !v.trim().is_empty())
}

// Os formulários mandam "" quando o campo fica em branco
fn email_opcional(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || email.validate_email() {
        return Ok(());
    }
    let mut erro = ValidationError::new("email");
    erro.message = Some("O e-mail fornecido é inválido.".into());
    Err(erro)
}

// --- CLIENTE ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub tipo: TipoPessoa,
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
    pub observacoes: Option<String>,
    pub ativo: bool,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ClientePayload {
    #[schema(example = "Maria da Silva")]
    pub nome: Option<String>,

    #[validate(custom(function = "email_opcional"))]
    #[schema(example = "maria@email.com")]
    pub email: Option<String>,

    #[schema(example = "11999999999")]
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,

    #[validate(length(max = 2, message = "Use a sigla do estado (ex: SP)."))]
    #[schema(example = "SP")]
    pub estado: Option<String>,

    pub tipo: Option<TipoPessoa>,

    #[schema(example = "12345678901")]
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
    pub observacoes: Option<String>,
    pub ativo: Option<bool>,
}

// --- FORNECEDOR ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fornecedor {
    pub id: i32,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub tipo: TipoPessoa,
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
    pub contato_responsavel: Option<String>,
    pub observacoes: Option<String>,
    pub ativo: bool,
    pub criado_em: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FornecedorPayload {
    #[schema(example = "Tecidos Paulista LTDA")]
    pub nome: Option<String>,

    #[validate(custom(function = "email_opcional"))]
    pub email: Option<String>,

    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,

    #[validate(length(max = 2, message = "Use a sigla do estado (ex: SP)."))]
    pub estado: Option<String>,

    pub tipo: Option<TipoPessoa>,
    pub cpf: Option<String>,

    #[schema(example = "12345678000199")]
    pub cnpj: Option<String>,

    #[schema(example = "João Souza")]
    pub contato_responsavel: Option<String>,
    pub observacoes: Option<String>,
    pub ativo: Option<bool>,
}

/// Campos já normalizados, prontos para o INSERT/UPDATE.
/// `contato_responsavel` só existe para fornecedores.
#[derive(Debug, Clone, PartialEq)]
pub struct DadosCadastro {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub tipo: Option<TipoPessoa>,
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
    pub contato_responsavel: Option<String>,
    pub observacoes: Option<String>,
    pub ativo: bool,
}

impl DadosCadastro {
    #[allow(clippy::too_many_arguments)]
    fn montar(
        nome: Option<String>,
        email: Option<String>,
        telefone: Option<String>,
        endereco: Option<String>,
        cidade: Option<String>,
        estado: Option<String>,
        tipo: Option<TipoPessoa>,
        cpf: Option<String>,
        cnpj: Option<String>,
        contato_responsavel: Option<String>,
        observacoes: Option<String>,
        ativo: Option<bool>,
    ) -> Self {
        // Sem tipo não há como escolher o documento; o NOT NULL do banco recusa a linha.
        let (cpf, cnpj) = match tipo {
            Some(t) => t.documentos(cpf, cnpj),
            None => (vazio_para_none(cpf), vazio_para_none(cnpj)),
        };

        Self {
            nome,
            email: vazio_para_none(email),
            telefone,
            endereco,
            cidade: vazio_para_none(cidade),
            estado: vazio_para_none(estado),
            tipo,
            cpf,
            cnpj,
            contato_responsavel,
            observacoes: vazio_para_none(observacoes),
            ativo: ativo.unwrap_or(true),
        }
    }
}

impl From<ClientePayload> for DadosCadastro {
    fn from(p: ClientePayload) -> Self {
        Self::montar(
            p.nome, p.email, p.telefone, p.endereco, p.cidade, p.estado, p.tipo, p.cpf, p.cnpj,
            None, p.observacoes, p.ativo,
        )
    }
}

impl From<FornecedorPayload> for DadosCadastro {
    fn from(p: FornecedorPayload) -> Self {
        Self::montar(
            p.nome,
            p.email,
            p.telefone,
            p.endereco,
            p.cidade,
            p.estado,
            p.tipo,
            p.cpf,
            p.cnpj,
            p.contato_responsavel,
            p.observacoes,
            p.ativo,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente(tipo: Option<TipoPessoa>) -> ClientePayload {
        ClientePayload {
            nome: Some("Cliente Teste".into()),
            email: Some("cliente@teste.com".into()),
            telefone: Some("999999999".into()),
            endereco: Some("Rua A".into()),
            cidade: Some("".into()),
            estado: Some("SP".into()),
            tipo,
            cpf: Some("12345678901".into()),
            cnpj: Some("12345678000199".into()),
            observacoes: None,
            ativo: None,
        }
    }

    #[test]
    fn pf_descarta_cnpj() {
        let dados = DadosCadastro::from(cliente(Some(TipoPessoa::PF)));
        assert_eq!(dados.cpf.as_deref(), Some("12345678901"));
        assert_eq!(dados.cnpj, None);
    }

    #[test]
    fn pj_descarta_cpf() {
        let dados = DadosCadastro::from(cliente(Some(TipoPessoa::PJ)));
        assert_eq!(dados.cpf, None);
        assert_eq!(dados.cnpj.as_deref(), Some("12345678000199"));
    }

    #[test]
    fn ativo_assume_verdadeiro_e_vazios_viram_nulos() {
        let dados = DadosCadastro::from(cliente(Some(TipoPessoa::PF)));
        assert!(dados.ativo);
        assert_eq!(dados.cidade, None);
    }

    #[test]
    fn fornecedor_mantem_contato_responsavel() {
        let payload = FornecedorPayload {
            nome: Some("Fornecedor".into()),
            email: None,
            telefone: None,
            endereco: None,
            cidade: None,
            estado: None,
            tipo: Some(TipoPessoa::PJ),
            cpf: Some("".into()),
            cnpj: Some("12345678000199".into()),
            contato_responsavel: Some("João".into()),
            observacoes: None,
            ativo: Some(false),
        };
        let dados = DadosCadastro::from(payload);
        assert_eq!(dados.contato_responsavel.as_deref(), Some("João"));
        assert!(!dados.ativo);
    }

    #[test]
    fn email_em_branco_passa_e_email_malformado_nao() {
        let mut payload = cliente(Some(TipoPessoa::PF));
        payload.email = Some("".into());
        assert!(payload.validate().is_ok());

        payload.email = Some("sem-arroba".into());
        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("email"));
    }

    #[test]
    fn tipo_serializa_como_sigla() {
        assert_eq!(serde_json::to_string(&TipoPessoa::PJ).unwrap(), "\"PJ\"");
        let t: TipoPessoa = serde_json::from_str("\"PF\"").unwrap();
        assert_eq!(t, TipoPessoa::PF);
    }

    #[test]
    fn estado_com_mais_de_duas_letras_e_recusado() {
        let mut payload = cliente(Some(TipoPessoa::PF));
        payload.estado = Some("São Paulo".into());
        assert!(payload.validate().is_err());
    }
}
