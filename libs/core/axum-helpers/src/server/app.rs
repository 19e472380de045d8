use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{CorsConfig, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Combines the API routes with documentation UIs and cross-cutting layers.
///
/// Sets up:
/// - API routes merged at the root path
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar) backed by
///   `/api-docs/openapi.json`
/// - 404 fallback with the standard error body
/// - Request tracing, security headers, CORS and response compression
///
/// Domain routers should already have their state applied. Health endpoints
/// are merged separately by the app.
///
/// # Example
/// ```ignore
/// use axum_helpers::{CorsConfig, create_router};
///
/// let api_routes = Router::new()
///     .nest("/auth", auth_router(auth_state))
///     .nest("/products", products_router(service, jwt_auth));
///
/// let router = create_router::<ApiDoc>(api_routes, &CorsConfig::permissive());
/// ```
pub fn create_router<T>(apis: Router, cors: &CorsConfig) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    if cors.is_permissive() {
        info!("CORS allows any origin");
    } else {
        info!(origins = ?cors.allowed_origins, "CORS restricted to configured origins");
    }

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors.layer())
        .layer(CompressionLayer::new())
}

/// Binds the configured address and serves until SIGINT/SIGTERM, then runs
/// `cleanup` under `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::create_production_app;
///
/// let cleanup = async move {
///     if let Err(e) = db.close().await {
///         tracing::error!("Failed to close database pool: {}", e);
///     }
/// };
///
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    serve_until_shutdown(
        listener,
        router,
        ShutdownCoordinator::default(),
        shutdown_timeout,
        cleanup,
    )
    .await
}

/// Serves on an already-bound listener until `coordinator` signals shutdown.
///
/// In-flight requests drain first; `cleanup` runs afterwards and is abandoned
/// if it outlives `shutdown_timeout`.
pub async fn serve_until_shutdown<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    let signal = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
