//! handlers/mod.rs
pub mod call_handler;
