use crate::common::*;

use crate::model::configs::chart_margin::*;

#[doc = "차트 도화면 설정 정보 (픽셀 단위)"]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub chart_width: u32,
    pub chart_height: u32,
    pub chart_margin: ChartMargin,
}
