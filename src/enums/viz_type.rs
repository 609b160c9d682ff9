use crate::common::*;

/* 지원하는 시각화 종류. 현재는 라인 차트 하나만 존재한다. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VizType {
    #[serde(rename = "lineChart")]
    LineChart,
}
