//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod call_log_model;
pub mod call_model;
