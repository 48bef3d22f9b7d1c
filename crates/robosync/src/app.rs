use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::livez,
        robots::{
            create_robot, delete_robot, get_robot, update_coordinates, update_name, update_type,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let robot_routes = Router::new()
        .route("/create", post(create_robot))
        .route("/updatecord", put(update_coordinates))
        .route("/updatename", put(update_name))
        .route("/updatetype", put(update_type))
        .route("/delete/{id}", delete(delete_robot))
        .route("/{id}", get(get_robot));

    Router::new()
        .route("/livez", get(livez))
        .nest("/robots", robot_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
