use crate::common::*;

#[doc = r#"
    epoch 밀리초 틱을 설정된 포맷의 시각 문자열로 변환해주는 함수.

    X축 틱 라벨(timestamp 모드)에 사용한다. 유효하지 않은 틱 값은
    변환하지 않고 숫자 그대로 문자열로 돌려준다.

    # Arguments
    * `timestamp` - epoch 밀리초 틱
    * `format` - chrono strftime 포맷 (예: `%H:%M:%S`)
"#]
pub fn format_epoch_tick(timestamp: i64, format: &str) -> String {
    match Utc.timestamp_millis_opt(timestamp) {
        chrono::LocalResult::Single(dt) => dt.format(format).to_string(),
        _ => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_epoch_tick_applies_strftime_format() {
        assert_eq!(format_epoch_tick(0, "%H:%M:%S"), "00:00:00");
        assert_eq!(
            format_epoch_tick(1_700_000_000_000, "%Y-%m-%d"),
            "2023-11-14"
        );
    }

    #[test]
    fn invalid_tick_falls_back_to_raw_number() {
        assert_eq!(format_epoch_tick(i64::MAX, "%H:%M:%S"), i64::MAX.to_string());
    }
}
