//! models/call_log_model.rs
//! Registro persistido de cada llamada colocada.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Único estado que produce el flujo actual.
pub const STATUS_CALL_SENT: &str = "Call Sent";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLogEntry {
    pub phone_number: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl CallLogEntry {
    /// Crea la entrada con `timestamp` = ahora.
    pub fn new(phone_number: impl Into<String>, status: impl Into<String>) -> Self {
        Self::with_timestamp(phone_number, status, Utc::now())
    }

    pub fn with_timestamp(
        phone_number: impl Into<String>,
        status: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        CallLogEntry {
            phone_number: phone_number.into(),
            status: status.into(),
            timestamp,
        }
    }

    pub fn call_sent(phone_number: impl Into<String>) -> Self {
        Self::new(phone_number, STATUS_CALL_SENT)
    }
}
