use metrics_exporter_prometheus::PrometheusHandle;
use seat_predictor::config::SeatMatrixConfig;
use seat_predictor::predictor::{MatrixImportError, SeatMatrix, SeatMatrixImporter};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolve the seat matrix once at startup; it is never reloaded.
pub(crate) fn load_seat_matrix(
    config: &SeatMatrixConfig,
) -> Result<Arc<SeatMatrix>, MatrixImportError> {
    match &config.csv_path {
        Some(path) => Ok(Arc::new(SeatMatrixImporter::from_path(path)?)),
        None => {
            let matrix = SeatMatrix::builtin();
            info!(cycle = matrix.cycle(), "using built-in seat matrix");
            Ok(matrix)
        }
    }
}
