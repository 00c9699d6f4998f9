//! services/call_placer.rs
//! Colocación de llamadas salientes vía la API REST de Twilio.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::app_config::TwilioConfig;
use crate::models::call_model::{CallRequest, PlacedCall};

/// Capacidad de originar una llamada. Devuelve el identificador de la llamada
/// o el error del proveedor.
#[async_trait]
pub trait CallPlacer: Send + Sync {
    async fn place_call(&self, req: &CallRequest) -> Result<PlacedCall>;
}

#[derive(Clone)]
pub struct TwilioCallPlacer {
    config: TwilioConfig,
    http_client: Client,
}

impl TwilioCallPlacer {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    fn calls_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Calls.json",
            self.config.api_base, self.config.account_sid
        )
    }
}

#[async_trait]
impl CallPlacer for TwilioCallPlacer {
    async fn place_call(&self, req: &CallRequest) -> Result<PlacedCall> {
        let url = self.calls_url();
        log::info!("(place_call) POST {} to={} from={}", url, req.to, req.from);

        let form = [
            ("To", req.to.as_str()),
            ("From", req.from.as_str()),
            ("Url", req.instruction_url.as_str()),
        ];

        // Sin .context(): el mensaje del error debe llegar tal cual al cliente.
        let resp = self
            .http_client
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        let body_txt = resp.text().await?;

        if !status.is_success() {
            log::error!(
                "(place_call) Twilio respondió {}: body='{}'",
                status,
                body_txt
            );
            return Err(anyhow!(provider_error_message(status.as_u16(), &body_txt)));
        }

        parse_placed_call(&body_txt)
    }
}

/// Extrae el `message` del JSON de error de Twilio; si no hay, arma uno con
/// el status y el cuerpo crudo.
pub fn provider_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(|m| m.to_string())
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Twilio API error ({}): {}", status, body.trim()))
}

pub fn parse_placed_call(body: &str) -> Result<PlacedCall> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value.get("sid").and_then(|s| s.as_str()) {
        Some(sid) if !sid.is_empty() => Ok(PlacedCall {
            sid: sid.to_string(),
            status: value
                .get("status")
                .and_then(|s| s.as_str())
                .map(|s| s.to_string()),
        }),
        _ => Err(anyhow!("Twilio response did not include a call sid")),
    }
}
