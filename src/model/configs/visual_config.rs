use crate::common::*;

use crate::enums::viz_type::*;

#[doc = "시각화 설정 정보"]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct VisualConfig {
    pub viz_type: VizType,
    pub viz_color_scheme: Vec<String>,
    pub viz_stroke_width: u32,
}
