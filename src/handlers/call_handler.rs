//! handlers/call_handler.rs
//! Endpoint para disparar la llamada de recordatorio.

use actix_web::{web, HttpResponse};

use crate::models::call_model::{ErrorResponse, TriggerCallRequest};
use crate::services::reminder_call_service::{ReminderCallService, TriggerCallError};

/// POST /trigger-call
///
/// El body se lee como JSON sin importar el Content-Type; un body vacío
/// equivale a `{}` y termina en "Phone number is required".
pub async fn trigger_call_endpoint(
    call_service: web::Data<ReminderCallService>,
    body: web::Bytes,
) -> HttpResponse {
    let req_data = match parse_trigger_request(&body) {
        Ok(req) => req,
        Err(e) => {
            log::warn!("(trigger_call_endpoint) Body rechazado: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: format!("Json deserialize error: {}", e),
            });
        }
    };

    match call_service
        .trigger_call(req_data.phone_number.as_deref())
        .await
    {
        Ok(resp) => HttpResponse::Ok().json(resp),
        Err(e) => error_response(&e),
    }
}

fn parse_trigger_request(body: &[u8]) -> Result<TriggerCallRequest, serde_json::Error> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(TriggerCallRequest::default());
    }
    serde_json::from_slice(body)
}

fn error_response(e: &TriggerCallError) -> HttpResponse {
    if let TriggerCallError::Persistence { call_sid, .. } = e {
        log::error!(
            "(trigger_call_endpoint) Llamada {} colocada sin call_log, se responde 500",
            call_sid
        );
    }
    let body = ErrorResponse {
        error: e.to_string(),
    };
    if e.is_client_error() {
        HttpResponse::BadRequest().json(body)
    } else {
        HttpResponse::InternalServerError().json(body)
    }
}
