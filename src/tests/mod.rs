//! tests/mod.rs
//! Pruebas unitarias y de integración HTTP (sólo con `cargo test`).

mod call_tests;
