use crate::domain::model::{Receipt, ReceiptId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 已驗證收據的儲存介面；記憶體實作之外也可以換成持久化後端
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    async fn put(&self, id: ReceiptId, receipt: Receipt) -> Result<()>;
    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>>;
    async fn len(&self) -> Result<usize>;
}
