use crate::common::*;

use crate::traits::{repository_traits::source_repository::*, service_traits::query_service::*};

use crate::dto::data_point::*;

#[derive(Debug, new)]
pub struct QueryServiceImpl<R: SourceRepository> {
    source_repository: Arc<R>,
}

#[async_trait]
impl<R> QueryService for QueryServiceImpl<R>
where
    R: SourceRepository + Sync + Send,
{
    #[doc = r#"
        데이터 소스 응답을 시계열 데이터 포인트 목록으로 역직렬화하는 함수.

        응답은 `{timestamp, value}` 객체의 JSON 배열이라고 신뢰하며,
        스키마 검증이나 값 범위 검사는 따로 하지 않는다.

        # Returns
        * `Vec<DataPoint>` - 이번 요청으로 도착한 데이터 포인트들
        * `anyhow::Error` - 요청 실패 혹은 배열 역직렬화 실패 시
    "#]
    async fn fetch_data_points(&self) -> Result<Vec<DataPoint>, anyhow::Error> {
        let payload: Value = self.source_repository.get_source_payload().await?;

        let data_points: Vec<DataPoint> = serde_json::from_value(payload).map_err(|e| {
            anyhow!(
                "[QueryServiceImpl->fetch_data_points] Failed to deserialize payload into data points: {}",
                e
            )
        })?;

        Ok(data_points)
    }
}
