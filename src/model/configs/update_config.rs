use crate::common::*;

#[doc = r#"
    실시간 갱신 설정 정보

    # Fields
    * `update_interval` - 폴링 주기 (밀리초)
    * `update_threshold` - redraw를 일으키는 신규 데이터 포인트 최소 개수
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct UpdateConfig {
    pub update_interval: u64,
    pub update_threshold: usize,
}
