//! app.rs
use actix_web::web;

use crate::handlers::call_handler;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/trigger-call",
        web::post().to(call_handler::trigger_call_endpoint),
    );
}
