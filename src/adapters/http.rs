use crate::core::service::ReceiptService;
use crate::core::{Receipt, ReceiptStore};
use crate::domain::model::{PointsResponse, ProcessResponse};
use crate::utils::error::ReceiptError;
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub const PROCESS_PATH: &str = "/receipts/process";
pub const POINTS_PATH: &str = "/receipts/{id}/points";

#[derive(Debug, Serialize)]
struct ErrorBody {
    description: String,
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!("❌ Request failed: {} (Category: {:?})", self, self.category());
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        let body = ErrorBody {
            description: self.user_friendly_message(),
        };
        (status, Json(body)).into_response()
    }
}

async fn process_receipt<S: ReceiptStore + 'static>(
    State(service): State<Arc<ReceiptService<S>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<(StatusCode, Json<ProcessResponse>), ReceiptError> {
    // 任何 JSON 解碼失敗都和驗證失敗一樣回 400
    let Json(receipt) = payload.map_err(|rejection| ReceiptError::invalid(rejection.body_text()))?;

    let id = service.process(receipt).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProcessResponse { id: id.to_string() }),
    ))
}

async fn get_points<S: ReceiptStore + 'static>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ReceiptError> {
    let points = service.points_for_raw(&id).await?;
    Ok(Json(PointsResponse { points }))
}

pub fn router<S: ReceiptStore + 'static>(
    service: Arc<ReceiptService<S>>,
    max_body_bytes: usize,
) -> Router {
    Router::new()
        .route(PROCESS_PATH, post(process_receipt::<S>))
        .route(POINTS_PATH, get(get_points::<S>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .with_state(service)
}

pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received, draining connections");
}
