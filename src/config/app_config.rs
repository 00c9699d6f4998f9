//! config/app_config.rs
//! Configuración de la aplicación leída desde variables de entorno (.env).

use anyhow::{anyhow, Context, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/call_logs.db";
pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";
/// Documento TwiML de demo que Twilio reproduce al contestar.
pub const DEFAULT_INSTRUCTION_URL: &str = "http://demo.twilio.com/docs/voice.xml";

/// Credenciales y número de origen para la API de Twilio.
#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub api_base: String,
}

// El auth_token nunca debe terminar en los logs.
impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"***")
            .field("from_number", &self.from_number)
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub instruction_url: String,
    pub twilio: TwilioConfig,
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso.
    /// Se espera que `dotenv().ok()` ya se haya llamado.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construye la configuración a partir de cualquier función de búsqueda.
    /// Los valores vacíos cuentan como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| anyhow!("Falta la variable de entorno requerida {}", key))
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT inválido: '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            instruction_url: get("CALL_INSTRUCTIONS_URL")
                .unwrap_or_else(|| DEFAULT_INSTRUCTION_URL.to_string()),
            twilio: TwilioConfig {
                account_sid: required("TWILIO_ACCOUNT_SID")?,
                auth_token: required("TWILIO_AUTH_TOKEN")?,
                from_number: required("TWILIO_PHONE_NUMBER")?,
                api_base: get("TWILIO_API_BASE")
                    .map(|v| v.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_TWILIO_API_BASE.to_string()),
            },
        })
    }
}
