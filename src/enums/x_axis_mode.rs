use crate::common::*;

/* X축 좌표 매핑 방식. index 모드는 도착 순서를 그대로 시간처럼 취급한다. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum XAxisMode {
    #[default]
    Index,
    Timestamp,
}
