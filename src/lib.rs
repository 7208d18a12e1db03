pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod seed;
pub mod state;
pub mod store;
pub mod ws;

use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use handlers::{shell, users};
use state::AppState;

/// Build the application router.
///
/// Route order mirrors the original server: the users API first (with the
/// identity stamp applied to those routes only), then the API 404 catch-all,
/// then the shell and static assets for everything else.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .route(
            "/api/v1/users",
            get(users::list)
                .post(users::create)
                .delete(users::delete_collection),
        )
        .route(
            "/api/v1/users/:id",
            get(users::get_by_id)
                .patch(users::patch_by_id)
                .delete(users::delete_by_id),
        )
        .route_layer(axum::middleware::from_fn(middleware::stamp_identity))
        .route("/", get(shell::shell))
        .route("/api", any(api_not_found))
        .route("/api/*rest", any(api_not_found));

    if state.enable_sockets {
        router = router.route("/ws", get(ws::upgrade));
    }

    // Non-API paths try the asset directory first and fall back to the
    // server-rendered shell. `fallback` keeps the shell's own 200 status;
    // `not_found_service` would rewrite it to 404.
    let assets = ServeDir::new(&state.static_dir).fallback(shell::shell.into_service());

    // Open CORS, but without exposing all headers: the identity middleware
    // owns the Access-Control-Expose-Headers declaration and it has to name
    // the identity header, not `*`.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unmatched /api paths answer 404 with an empty body.
async fn api_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
