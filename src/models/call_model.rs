//! models/call_model.rs
//! Requests/responses del endpoint /trigger-call y de la colocación de llamadas.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerCallRequest {
    /// Ausente, null y "" se tratan igual: falta el número.
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerCallResponse {
    pub message: String,
    pub call_sid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Lo que se le pide al proveedor de telefonía.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRequest {
    pub to: String,
    pub from: String,
    pub instruction_url: String,
}

/// Respuesta del proveedor al crear la llamada.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCall {
    pub sid: String,
    pub status: Option<String>,
}
