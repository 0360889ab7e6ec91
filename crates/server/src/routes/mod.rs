use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::AppState;

pub mod exercise;

mod fallback;
pub use fallback::*;

const ALLOWED_HEADERS: &str = "Content-Type,Authorization,true";
const ALLOWED_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";

/// The whole api with its layers, ready to serve
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            Object::Index.path(),
            get(exercise::index).fallback(method_not_allowed),
        )
        .route(
            Object::NewUser.path(),
            post(exercise::new_user).fallback(method_not_allowed),
        )
        .route(
            Object::Users.path(),
            get(exercise::users).fallback(method_not_allowed),
        )
        .route(
            Object::Add.path(),
            post(exercise::add).fallback(method_not_allowed),
        )
        .route(
            Object::Log.path(),
            get(exercise::log).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION]),
        )
        // Every response advertises the same headers and methods, preflight or not
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
