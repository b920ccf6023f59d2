use crate::core::{Receipt, ReceiptId, ReceiptStore};
use crate::utils::error::{ReceiptError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// 行程內的收據儲存，clone 之後共享同一份資料
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Receipt>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> ReceiptError {
    tracing::error!("❌ Receipt store lock poisoned: {}", e);
    ReceiptError::Storage {
        message: format!("receipt store lock poisoned: {}", e),
    }
}

#[async_trait]
impl ReceiptStore for MemoryStore {
    async fn put(&self, id: ReceiptId, receipt: Receipt) -> Result<()> {
        let mut receipts = self.receipts.write().map_err(poisoned)?;
        receipts.insert(id, receipt);
        Ok(())
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>> {
        let receipts = self.receipts.read().map_err(poisoned)?;
        Ok(receipts.get(id).cloned())
    }

    async fn len(&self) -> Result<usize> {
        let receipts = self.receipts.read().map_err(poisoned)?;
        Ok(receipts.len())
    }
}
