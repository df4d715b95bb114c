// src/models/comum.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Confirmação devolvida pelos DELETEs
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MensagemResposta {
    #[schema(example = "Cliente deletado")]
    pub message: String,
}

impl MensagemResposta {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
