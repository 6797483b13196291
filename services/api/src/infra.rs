use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use hirepath::error::AppError;
use hirepath::workflows::hiring::{Classification, HiringTracker, SharedTracker};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the shared tracker, hydrating it from the data file when one
/// exists. A corrupt file fails startup rather than silently starting an
/// empty roster that would overwrite it on the next save.
pub(crate) fn build_tracker(data_file: &Path) -> Result<SharedTracker, AppError> {
    let mut tracker = HiringTracker::new();
    if data_file.exists() {
        let count = tracker.load_from_file(data_file)?;
        info!(count, path = %data_file.display(), "hydrated roster from data file");
    } else {
        info!(path = %data_file.display(), "no roster data file yet, starting empty");
    }
    Ok(Arc::new(Mutex::new(tracker)))
}

/// clap value parser for `--classification` arguments.
pub(crate) fn parse_classification(raw: &str) -> Result<Classification, String> {
    Classification::parse(raw).map_err(|error| error.to_string())
}
