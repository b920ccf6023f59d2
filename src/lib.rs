pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{http::router, storage::MemoryStore};
pub use config::ServerConfig;
pub use core::service::ReceiptService;
pub use domain::model::{Item, PointsBreakdown, Receipt, ReceiptId};
pub use utils::error::{ReceiptError, Result};
