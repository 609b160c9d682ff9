use crate::common::*;

#[async_trait]
pub trait SourceRepository: Send + Sync {
    async fn get_source_payload(&self) -> anyhow::Result<Value>;
}
