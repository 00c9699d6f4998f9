//! services/reminder_call_service.rs
//! Flujo completo de una llamada de recordatorio:
//! validar -> colocar la llamada -> registrar en call_logs -> responder.

use std::sync::Arc;

use thiserror::Error;

use crate::models::call_log_model::CallLogEntry;
use crate::models::call_model::{CallRequest, TriggerCallResponse};
use crate::services::call_log_service::CallLogStore;
use crate::services::call_placer::CallPlacer;

pub const MSG_CALL_INITIATED: &str = "Call initiated";

/// El `Display` de cada variante es exactamente el mensaje que ve el cliente.
#[derive(Debug, Error)]
pub enum TriggerCallError {
    #[error("Phone number is required")]
    MissingPhoneNumber,

    #[error("{0}")]
    Placement(anyhow::Error),

    /// La llamada YA se colocó; sólo falló el registro. No se compensa.
    #[error("{cause}")]
    Persistence {
        call_sid: String,
        cause: anyhow::Error,
    },
}

impl TriggerCallError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, TriggerCallError::MissingPhoneNumber)
    }
}

#[derive(Clone)]
pub struct ReminderCallService {
    placer: Arc<dyn CallPlacer>,
    store: Arc<dyn CallLogStore>,
    from_number: String,
    instruction_url: String,
}

impl ReminderCallService {
    pub fn new(
        placer: Arc<dyn CallPlacer>,
        store: Arc<dyn CallLogStore>,
        from_number: impl Into<String>,
        instruction_url: impl Into<String>,
    ) -> Self {
        Self {
            placer,
            store,
            from_number: from_number.into(),
            instruction_url: instruction_url.into(),
        }
    }

    pub async fn trigger_call(
        &self,
        phone_number: Option<&str>,
    ) -> Result<TriggerCallResponse, TriggerCallError> {
        let phone_number = match phone_number {
            Some(p) if !p.is_empty() => p,
            _ => {
                log::warn!("(trigger_call) Request sin phoneNumber, se rechaza");
                return Err(TriggerCallError::MissingPhoneNumber);
            }
        };

        let call_req = CallRequest {
            to: phone_number.to_string(),
            from: self.from_number.clone(),
            instruction_url: self.instruction_url.clone(),
        };

        let placed = self.placer.place_call(&call_req).await.map_err(|e| {
            log::error!("(trigger_call) Fallo al colocar llamada a {}: {}", phone_number, e);
            TriggerCallError::Placement(e)
        })?;

        log::info!(
            "(trigger_call) Llamada colocada a {} sid={} status={:?}",
            phone_number,
            placed.sid,
            placed.status
        );

        let entry = CallLogEntry::call_sent(phone_number);
        match self.store.insert(&entry).await {
            Ok(log_id) => {
                log::info!("(trigger_call) call_log {} guardado (sid={})", log_id, placed.sid);
            }
            Err(e) => {
                log::error!(
                    "(trigger_call) Llamada {} colocada pero no se pudo registrar: {}",
                    placed.sid,
                    e
                );
                return Err(TriggerCallError::Persistence {
                    call_sid: placed.sid,
                    cause: e,
                });
            }
        }

        Ok(TriggerCallResponse {
            message: MSG_CALL_INITIATED.to_string(),
            call_sid: placed.sid,
        })
    }
}
