// src/common/datas.rs
//
// Os formulários mandam datas em formatos variados: ISO completo vindo de um
// registro já salvo, `datetime-local` sem segundos, ou só a data.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const FORMATOS_SEM_FUSO: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Interpreta uma data/hora nos formatos aceitos pela API.
pub fn parse_data_hora(valor: &str) -> Option<NaiveDateTime> {
    let valor = valor.trim();

    if let Ok(com_fuso) = DateTime::parse_from_rfc3339(valor) {
        return Some(com_fuso.naive_utc());
    }

    for formato in FORMATOS_SEM_FUSO {
        if let Ok(data) = NaiveDateTime::parse_from_str(valor, formato) {
            return Some(data);
        }
    }

    NaiveDate::parse_from_str(valor, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Interpreta um prazo. Aceita `YYYY-MM-DD` ou qualquer data/hora de `parse_data_hora`.
pub fn parse_data(valor: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(valor.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_data_hora(valor).map(|dt| dt.date()))
}

pub fn opcional_data_hora<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_data_hora(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("data inválida: '{}'", s))),
    }
}

pub fn opcional_data<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_data(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("data inválida: '{}'", s))),
    }
}
