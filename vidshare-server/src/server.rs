use crate::context::ApplicationContext;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

pub mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> std::io::Result<()> {
	let address = application_context.configuration.address;
	axum_server::bind(address)
		.serve(create_router(application_context).into_make_service())
		.await
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	let cors = cors_layer(&application_context.configuration.allowed_origins);
	Router::new()
		.nest("/api", rest_api::rest_api())
		.layer(cors)
		.with_state(application_context)
}

/// The player may be served from a different origin than the API.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
	if allowed_origins.is_empty() {
		return CorsLayer::permissive();
	}

	let origins = allowed_origins
		.iter()
		.filter_map(|origin| match HeaderValue::from_str(origin) {
			Ok(origin) => Some(origin),
			Err(error) => {
				warn!("Ignoring allowed origin '{origin}': {error}");
				None
			}
		})
		.collect::<Vec<_>>();

	CorsLayer::new()
		.allow_origin(AllowOrigin::list(origins))
		.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
		.allow_headers([header::CONTENT_TYPE])
}
