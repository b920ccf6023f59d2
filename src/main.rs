use anyhow::Context;
use clap::CommandFactory;
use receipt_processor::adapters::http;
use receipt_processor::utils::{logger, validation::Validate};
use receipt_processor::{MemoryStore, ReceiptService, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = ServerConfig::command().get_matches();

    // 設定檔要在初始化日誌前讀取，才能套用 logging 區段
    let config = match ServerConfig::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("🚀 Starting receipt-processor");
    tracing::debug!("Server config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let addr = config.socket_addr()?;
    let service = Arc::new(ReceiptService::new(MemoryStore::new()));
    let app = http::router(service, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("📡 Listening on http://{}", listener.local_addr()?);

    http::serve(listener, app).await.context("server error")?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
