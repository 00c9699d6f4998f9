//! config/mod.rs
//! Configuración del proceso, construida una sola vez al arrancar.

pub mod app_config;
