use crate::cli::ServeArgs;
use crate::infra::{self, AppState};
use crate::routes::with_tracker_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hirepath::config::AppConfig;
use hirepath::error::AppError;
use hirepath::telemetry;
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
    if let Some(data_file) = args.data_file.take() {
        config.storage.data_file = data_file;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let tracker = infra::build_tracker(&config.storage.data_file)?;
    let app = with_tracker_routes(tracker)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        data_file = %config.storage.data_file.display(),
        "hiring tracker ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
