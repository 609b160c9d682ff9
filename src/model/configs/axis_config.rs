use crate::common::*;

use crate::enums::x_axis_mode::*;

#[doc = r#"
    축 설정 정보

    # Fields
    * `x_axis_tick_format` - X축 틱 라벨의 시각 포맷 (chrono strftime, 예: `%H:%M:%S`)
    * `y_axis_tick_format` - Y축 틱 라벨의 숫자 포맷 (d3 스타일, 예: `.2f`)
    * `x_axis_mode` - X축 좌표 매핑 방식. 기본값은 도착 순서를 그대로 쓰는 index 모드
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct AxisConfig {
    pub x_axis_tick_format: String,
    pub y_axis_tick_format: String,
    #[serde(default)]
    pub x_axis_mode: XAxisMode,
}
