use crate::core::{scorer, validator};
use crate::domain::model::{Receipt, ReceiptId};
use crate::domain::ports::ReceiptStore;
use crate::utils::error::{ReceiptError, Result};

pub struct ReceiptService<S: ReceiptStore> {
    store: S,
}

impl<S: ReceiptStore> ReceiptService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 驗證並儲存收據，回傳新產生的識別碼
    pub async fn process(&self, mut receipt: Receipt) -> Result<ReceiptId> {
        if let Err(violation) = validator::check_receipt(&receipt) {
            tracing::debug!(retailer = %receipt.retailer, "Rejected receipt: {}", violation);
            return Err(ReceiptError::invalid(violation.to_string()));
        }

        // 儲存前先補零，之後計分直接使用正規化的時間
        receipt.purchase_time = validator::normalize_purchase_time(&receipt.purchase_time).into_owned();

        let id = ReceiptId::generate();
        self.store.put(id, receipt).await?;

        tracing::info!(%id, "🧾 Receipt accepted");
        Ok(id)
    }

    pub async fn points(&self, id: &ReceiptId) -> Result<u32> {
        let receipt = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| ReceiptError::not_found(id.to_string()))?;

        let breakdown = scorer::breakdown(&receipt);
        tracing::debug!(%id, ?breakdown, "Computed points");
        Ok(breakdown.total())
    }

    /// 路徑參數不是 UUID 時不可能是我們發出的 id，直接視為找不到
    pub async fn points_for_raw(&self, raw_id: &str) -> Result<u32> {
        let id: ReceiptId = raw_id
            .parse()
            .map_err(|_| ReceiptError::not_found(raw_id))?;
        self.points(&id).await
    }
}
