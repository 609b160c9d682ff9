use crate::common::*;

use crate::model::configs::data_source_config::*;

use crate::traits::repository_traits::source_repository::*;

#[derive(Debug, Getters, Clone)]
pub struct HttpSourceRepositoryImpl {
    client: Client,
    data_source_url: String,
}

impl HttpSourceRepositoryImpl {
    pub fn new(data_source_config: &DataSourceConfig) -> Result<Self, anyhow::Error> {
        /* 요청 타임아웃은 따로 두지 않는다. 지연된 응답은 다음 폴링 tick을 미룰 뿐이다 */
        let client: Client = Client::builder().build()?;

        Ok(HttpSourceRepositoryImpl {
            client,
            data_source_url: data_source_config.data_source.to_string(),
        })
    }
}

#[async_trait]
impl SourceRepository for HttpSourceRepositoryImpl {
    #[doc = "데이터 소스에 GET 요청을 보내고 JSON 응답 본문을 그대로 돌려주는 함수"]
    async fn get_source_payload(&self) -> Result<Value, anyhow::Error> {
        let response = self
            .client
            .get(&self.data_source_url)
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "[HttpSourceRepositoryImpl->get_source_payload] Request to '{}' failed: {:?}",
                    self.data_source_url,
                    e
                )
            })?;

        let response = response.error_for_status().map_err(|e| {
            anyhow!(
                "[HttpSourceRepositoryImpl->get_source_payload] Data source returned an error status: {:?}",
                e
            )
        })?;

        let payload: Value = response.json().await.map_err(|e| {
            anyhow!(
                "[HttpSourceRepositoryImpl->get_source_payload] Failed to parse response body as JSON: {:?}",
                e
            )
        })?;

        Ok(payload)
    }
}
