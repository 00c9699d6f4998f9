//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod call_log_service;
pub mod call_placer;
pub mod reminder_call_service;
