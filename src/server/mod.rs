pub mod handlers;

use actix_web::web;

/// Mount the API surface. The caller supplies `web::Data<FetchCoordinator>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api").route(web::get().to(handlers::api)))
        .service(web::resource("/health").route(web::get().to(handlers::health)));
}
