pub mod config;
pub mod db;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use service_core::axum::{
    http::{header, HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
    Router,
};
use service_core::middleware::{
    security_headers::security_headers_middleware, tracing::request_id_middleware,
    REQUEST_ID_HEADER,
};
use std::sync::{atomic::AtomicU64, Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ChirpyConfig;
use crate::services::{ChirpService, JwtService, SessionService, Store, UserService};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ChirpyConfig>,
    pub jwt: JwtService,
    pub sessions: SessionService,
    pub users: UserService,
    pub chirps: ChirpService,
    pub file_server_hits: Arc<AtomicU64>,
}

impl AppState {
    pub fn new<S>(config: ChirpyConfig, store: Arc<S>) -> Self
    where
        S: Store + 'static,
    {
        let jwt = JwtService::new(&config.jwt);
        let sessions = SessionService::new(store.clone(), jwt.clone(), &config.jwt);
        let users = UserService::new(store.clone());
        let chirps = ChirpService::new(store);

        Self {
            config: Arc::new(config),
            jwt,
            sessions,
            users,
            chirps,
            file_server_hits: Arc::new(AtomicU64::new(0)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let require_auth = || from_fn_with_state(state.clone(), middleware::auth_middleware);

    let api_routes = Router::new()
        .route("/api/healthz", get(handlers::health_check))
        .route(
            "/api/users",
            post(handlers::users::create_user)
                .merge(put(handlers::users::update_user).route_layer(require_auth())),
        )
        .route("/api/login", post(handlers::session::login))
        .route("/api/refresh", post(handlers::session::refresh))
        .route("/api/revoke", post(handlers::session::revoke))
        .route(
            "/api/chirps",
            get(handlers::chirps::list_chirps)
                .merge(post(handlers::chirps::create_chirp).route_layer(require_auth())),
        )
        .route(
            "/api/chirps/:chirp_id",
            get(handlers::chirps::get_chirp).merge(
                service_core::axum::routing::delete(handlers::chirps::delete_chirp)
                    .route_layer(require_auth()),
            ),
        )
        .route("/api/validate_chirp", post(handlers::chirps::validate_chirp))
        .route(
            "/api/polka/webhooks",
            post(handlers::webhooks::polka_webhook).route_layer(from_fn_with_state(
                state.clone(),
                middleware::polka_api_key_middleware,
            )),
        );

    let admin_routes = Router::new()
        .route("/admin/metrics", get(handlers::admin::metrics))
        .route("/admin/reset", post(handlers::admin::reset));

    let static_routes = Router::new()
        .nest_service("/app", ServeDir::new(&state.config.fileserver.root))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::file_server_hits_middleware,
        ));

    Router::new()
        .merge(api_routes)
        .merge(admin_routes)
        .merge(static_routes)
        .with_state(state.clone())
        // Add tracing layer
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &service_core::axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            },
        ))
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        // Add security headers middleware
        .layer(from_fn(security_headers_middleware))
        .layer(cors_layer(&state.config))
}

fn cors_layer(config: &ChirpyConfig) -> CorsLayer {
    let allowed = &config.security.allowed_origins;

    // Config validation only lets a wildcard through on the dev platform.
    let allow_origin = if allowed.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_origins(allowed))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(e) => {
                tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                None
            }
        })
        .collect()
}
