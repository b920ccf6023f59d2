pub mod scorer;
pub mod service;
pub mod validator;

pub use crate::domain::model::{Item, PointsBreakdown, Receipt, ReceiptId};
pub use crate::domain::ports::ReceiptStore;
pub use crate::utils::error::Result;
