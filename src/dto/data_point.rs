use crate::common::*;

#[doc = r#"
    원격 데이터 소스가 내려주는 시계열 데이터 포인트 DTO

    원격 응답(JSON 배열)의 원소를 그대로 역직렬화한 형태이며,
    별도의 검증이나 변환 없이 버퍼에 적재된다.

    # Fields
    * `timestamp` - epoch 밀리초 틱
    * `value` - 측정값 (고정 y 도메인 [0, 100] 기준, 범위 밖 값도 그대로 수용)
"#]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct DataPoint {
    pub timestamp: i64,
    pub value: f64,
}
