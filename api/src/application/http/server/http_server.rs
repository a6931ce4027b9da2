use std::sync::Arc;

use crate::application::http::chat::router::chat_routes;
use crate::application::http::diet::router::diet_routes;
use crate::application::http::health::health_routes;
use crate::application::http::image::router::image_routes;
use crate::application::http::nutrient::router::nutrient_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::index::get_index;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::social::router::social_routes;
use crate::args::Args;

use anyhow::Context;
use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use carnivore_core::{application::create_service, domain::common::CoachConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let coach_config = CoachConfig::try_from(args.as_ref())?;
    let service = create_service(coach_config)?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application, with Prometheus metrics.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let root_path = state.args.server.root_path.clone();
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let router = app_router(state)?
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);
    Ok(router)
}

/// `*` allows any origin. Credentials are only allowed with an explicit list,
/// tower-http rejects the wildcard combined with credentials.
fn cors_layer(origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    if origins.iter().any(|origin| origin.trim() == "*") {
        debug!("Allowed origins: any");
        return Ok(cors.allow_origin(AllowOrigin::any()));
    }

    let allowed_origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .with_context(|| format!("invalid allowed origin '{origin}'"))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    Ok(cors
        .allow_origin(allowed_origins)
        .allow_credentials(true))
}

/// API, docs and health routes. The metrics recorder is process-global, so
/// it is only installed by [`router`].
pub fn app_router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .route(&format!("{}/", root_path), get(get_index))
        .merge(chat_routes(state.clone()))
        .merge(image_routes(state.clone()))
        .merge(nutrient_routes(state.clone()))
        .merge(diet_routes(state.clone()))
        .merge(social_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
