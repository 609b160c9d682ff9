use crate::common::*;

#[async_trait]
pub trait AnalyzerService {
    async fn run_analyzer_loop(&self) -> anyhow::Result<()>;
}
