//! API routes for staffdesk

pub mod employees;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the application router
///
/// All six routes live under `/v1`. CORS is wide open (local development
/// service, browser frontends connect from arbitrary origins).
pub fn create_router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/add/employees", post(employees::add_employee))
        .route(
            "/update/employees/{column}",
            post(employees::update_employee),
        )
        .route("/get/employees", get(employees::get_employees))
        .route("/get/employees/{column}", post(employees::get_employee))
        .route("/join/employees", get(employees::join_employees))
        .route(
            "/delete/employees/{column}",
            post(employees::delete_employee),
        );

    Router::new()
        .nest("/v1", v1)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
