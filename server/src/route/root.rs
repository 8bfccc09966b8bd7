use crate::handler::AppModule;
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use utoipa::openapi::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

pub trait RootRouter {
    fn route_root(self, openapi: OpenApi) -> Self;
}

impl RootRouter for Router<AppModule> {
    fn route_root(self, openapi: OpenApi) -> Self {
        self.route(
            "/",
            get(|| async { (StatusCode::FOUND, [(header::LOCATION, DOCS_PATH)]) }),
        )
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, openapi))
    }
}
