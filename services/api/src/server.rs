use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryHiringRepository};
use crate::routes::with_hiring_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hiring_eval::config::AppConfig;
use hiring_eval::error::AppError;
use hiring_eval::telemetry;
use hiring_eval::workflows::hiring::HiringService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryHiringRepository::default());
    let service = Arc::new(HiringService::new(
        repository,
        config.scoring.evaluation_config(),
    ));

    let app = with_hiring_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        bias_penalty = config.scoring.bias_penalty,
        "hiring evaluation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
