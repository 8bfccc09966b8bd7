use crate::config::ServerConfig;
use crate::handler::AppModule;
use crate::openapi::ApiDoc;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use self::{book::*, root::*};

mod book;
mod root;

pub fn router(module: AppModule, config: &ServerConfig) -> Router {
    Router::new()
        .route_root(ApiDoc::document(config))
        .route_book()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(module)
}
