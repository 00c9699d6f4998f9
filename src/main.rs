use std::str::FromStr;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::call_log_service::CallLogService;
use crate::services::call_placer::TwilioCallPlacer;
use crate::services::reminder_call_service::ReminderCallService;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

async fn setup_database(database_url: &str) -> Result<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("DATABASE_URL inválida: {}", database_url))?
        .create_if_missing(true);

    // Crear la carpeta del archivo (p.ej. "data/") si hace falta
    let filename = options.clone().get_filename().to_path_buf();
    if let Some(dir) = filename.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("No se pudo crear directorio {}", dir.display()))?;
        }
    }

    log::info!("Conectando a SQLite en {}", database_url);

    let db_pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .context("No se pudo conectar a la base de datos SQLite.")?;

    Ok(db_pool)
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = AppConfig::from_env()?;
    log::info!("Configuración cargada: {:?}", config);

    let db_pool = setup_database(&config.database_url).await?;

    let call_log_service = CallLogService::new(db_pool.clone());
    call_log_service.run_migrations().await?;
    log::info!(
        "Migraciones de 'call_logs' aplicadas ({} registros existentes)",
        call_log_service.count().await?
    );

    let call_service = ReminderCallService::new(
        Arc::new(TwilioCallPlacer::new(config.twilio.clone())),
        Arc::new(call_log_service),
        config.twilio.from_number.clone(),
        config.instruction_url.clone(),
    );

    log::info!("Levantando servidor en {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(call_service.clone()))
            .configure(app::init_app)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("No se pudo escuchar en {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
