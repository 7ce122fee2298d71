use crate::cli::ServeArgs;
use crate::infra::{allocation_state, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use workalloc::config::AppConfig;
use workalloc::error::AppError;
use workalloc::telemetry;
use workalloc::workflows::allocation::EditingSession;

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let allocation = allocation_state(config.scoring);
    let session = EditingSession::start(
        &allocation.feeds,
        allocation.engine.clone(),
        allocation.store.clone(),
    );

    let app = with_service_routes(allocation)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        weights = ?config.scoring.weights,
        empty_section = ?config.scoring.empty_section,
        "work-allocation scorer ready"
    );

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            readiness_flag.store(false, Ordering::Release);
        })
        .await;

    session.shutdown().await;
    served?;
    Ok(())
}

async fn wait_for_shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
