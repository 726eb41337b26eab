use super::handlers;
use axum::{routing::get, Router};

/// Creates the companies router with all company routes
pub fn companies_routes() -> Router {
    Router::new()
        .route(
            "/companies",
            get(handlers::get_companies).post(handlers::create_company),
        )
        .route(
            "/companies/:code",
            get(handlers::get_company)
                .patch(handlers::update_company)
                .delete(handlers::delete_company),
        )
}
