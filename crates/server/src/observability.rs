//! Boundary instrumentation for the phone operations.
//!
//! Handlers wrap each service call in [`observe`], which logs the outcome and
//! records it in the Prometheus default registry.

use std::fmt::Debug;
use std::future::Future;
use std::time::Instant;

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec, TextEncoder};
use service::errors::ServiceError;
use tracing::{error, info};

pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "phone_service_operations_total",
        "Phone service operations by outcome",
        &["operation", "outcome"]
    )
    .expect("register operations_total")
});

pub static OPERATION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "phone_service_operation_duration_seconds",
        "Phone service operation duration in seconds",
        &["operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register operation_duration")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    GetAllPhones,
    GetPhone,
    AddPhone,
    UpdatePhone,
    DeletePhone,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::GetAllPhones => "get_all_phones",
            Operation::GetPhone => "get_phone",
            Operation::AddPhone => "add_phone",
            Operation::UpdatePhone => "update_phone",
            Operation::DeletePhone => "delete_phone",
        }
    }

    fn is_read(self) -> bool {
        matches!(self, Operation::GetAllPhones | Operation::GetPhone)
    }
}

/// Run `fut` and report it. Reads log their parameters and result, writes
/// log their result, failures log the error kind with the parameters.
pub async fn observe<T, F>(operation: Operation, params: String, fut: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
    T: Debug,
{
    let name = operation.name();
    let start = Instant::now();
    let res = fut.await;
    OPERATION_DURATION
        .with_label_values(&[name])
        .observe(start.elapsed().as_secs_f64());

    match &res {
        Ok(result) => {
            OPERATIONS_TOTAL.with_label_values(&[name, "ok"]).inc();
            if operation.is_read() {
                info!(operation = name, params = %params, result = ?result, "phone operation completed");
            } else {
                info!(operation = name, result = ?result, "phone operation completed");
            }
        }
        Err(e) => {
            OPERATIONS_TOTAL.with_label_values(&[name, e.kind()]).inc();
            error!(operation = name, params = %params, error_kind = e.kind(), error = %e, "phone operation failed");
        }
    }
    res
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
