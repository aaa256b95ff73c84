// Route exports
pub mod cocktails;

pub use cocktails::AppState;

use actix_web::web;

use crate::error::{handle_path_error, handle_query_payload_error};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error))
        .configure(cocktails::configure);
}
