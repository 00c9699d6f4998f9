//! logger.rs
//! Logger de la app: env_logger, filtrado por RUST_LOG (info si no está).

use env_logger::{Builder, Env};

pub fn init_logger() {
    builder(Env::default()).init();
}

/// `env` decide de qué variable sale el filtro; sin valor, nivel info.
pub fn builder(env: Env) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or("info"));
    builder.format_timestamp_secs().format_module_path(false);
    builder
}
