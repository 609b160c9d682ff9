use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct ChartMargin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}
