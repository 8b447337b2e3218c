use axum::{Router, extract::State, http::HeaderValue, routing::get};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod error;

pub use error::{ApiError, ErrorBody};

/// Application factory. Wires the shared layers around a caller-provided
/// route tree; the route handlers themselves live with the services that own
/// them, not in this crate. No interactive documentation endpoints are
/// mounted.
pub fn app(state: AppState, routes: Router<AppState>) -> Router {
    let cors = cors_layer(&state.settings.allowed_origins);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Cross-origin policy for the configured allowlist with credentialed
/// requests enabled. The CORS protocol forbids credentials together with a
/// literal `*` origin, so the wildcard entry reflects the caller's origin
/// instead; methods and headers mirror the preflight request, which is how
/// "all methods/headers" combines with credentials.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn healthz(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    state
        .store
        .ping()
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    Ok("ok")
}
