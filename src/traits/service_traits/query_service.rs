use crate::common::*;

use crate::dto::data_point::*;

#[async_trait]
pub trait QueryService {
    async fn fetch_data_points(&self) -> anyhow::Result<Vec<DataPoint>>;
}
