pub mod activity;

use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, http::header, web, HttpRequest};
use log::warn;

use crate::errors::AppError;

/// Registers the `/api/activities` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource("/api/activities")
                .route(web::get().to(activity::get_activities))
                .route(web::post().to(activity::create_activity)),
        )
        .service(
            web::resource("/api/activities/{id}")
                .route(web::get().to(activity::get_activity))
                .route(web::put().to(activity::update_activity))
                .route(web::delete().to(activity::delete_activity)),
        );
}

/// Browser access is limited to a single origin.
pub fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600)
}

// Body errors get the same envelope as validation failures.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected JSON body for {} {}: {}", req.method(), req.path(), err);
    AppError::BadRequest(format!("Invalid request body: {}", err)).into()
}
