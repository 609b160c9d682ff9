use crate::common::*;

#[doc = "원격 데이터 소스 설정 정보"]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct DataSourceConfig {
    pub data_source: String,
    pub data_frequency: u64,
    pub data_limit: usize,
}
