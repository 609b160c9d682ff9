use crate::common::*;

use crate::dto::data_point::*;

#[doc = r#"
    최근 데이터 포인트를 보관하는 용량 제한 버퍼

    삽입 순서 = 도착 순서이며, `data_limit`를 초과하면 앞쪽(가장 오래된 것)부터 버린다.
    timestamp 단조성이나 value 범위에 대한 불변식은 두지 않는다.
    최초 로드 시에는 응답으로 통째로 교체되며, 이때는 trim을 적용하지 않는다.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct DataBuffer {
    points: Vec<DataPoint>,
    data_limit: usize,
}

impl DataBuffer {
    pub fn new(data_limit: usize) -> Self {
        DataBuffer {
            points: Vec::new(),
            data_limit,
        }
    }

    #[doc = "버퍼 내용을 응답 전체로 교체해주는 함수 (최초 로드 전용, trim 없음)"]
    pub fn replace_all(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }

    #[doc = r#"
        신규 데이터 포인트들을 버퍼 뒤에 이어붙이고, `data_limit`를 초과하는 만큼
        가장 오래된 포인트부터 제거해주는 함수.

        # Arguments
        * `new_points` - 이번 폴링 사이클에 도착한 데이터 포인트들

        # Returns
        * `usize` - trim으로 제거된 포인트 개수
    "#]
    pub fn append_and_trim(&mut self, new_points: Vec<DataPoint>) -> usize {
        self.points.extend(new_points);

        if self.points.len() > self.data_limit {
            let overflow: usize = self.points.len() - self.data_limit;
            self.points.drain(..overflow);
            overflow
        } else {
            0
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_points(start_ts: i64, count: usize) -> Vec<DataPoint> {
        (0..count)
            .map(|i| DataPoint::new(start_ts + i as i64, i as f64))
            .collect()
    }

    #[test]
    fn new_buffer_is_empty() {
        let buffer: DataBuffer = DataBuffer::new(100);
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn replace_all_takes_response_as_is() {
        let mut buffer: DataBuffer = DataBuffer::new(100);
        let points: Vec<DataPoint> = make_points(1_000, 5);

        buffer.replace_all(points.clone());

        assert_eq!(buffer.points(), &points);
    }

    #[test]
    fn replace_all_does_not_trim_oversized_response() {
        /* 최초 로드는 교체만 하고 trim하지 않는다 */
        let mut buffer: DataBuffer = DataBuffer::new(3);

        buffer.replace_all(make_points(0, 10));

        assert_eq!(buffer.len(), 10);
    }

    #[test]
    fn append_below_limit_keeps_everything() {
        let mut buffer: DataBuffer = DataBuffer::new(100);
        buffer.replace_all(make_points(0, 5));

        let dropped: usize = buffer.append_and_trim(make_points(100, 12));

        assert_eq!(dropped, 0);
        assert_eq!(buffer.len(), 17);
    }

    #[test]
    fn append_over_limit_drops_oldest_first() {
        let mut buffer: DataBuffer = DataBuffer::new(10);
        buffer.replace_all(make_points(0, 8));

        let dropped: usize = buffer.append_and_trim(make_points(100, 5));

        assert_eq!(dropped, 3);
        assert_eq!(buffer.len(), 10);
        /* 남은 버퍼의 맨 앞은 원래 8개 중 4번째(index 3) 포인트 */
        assert_eq!(buffer.points()[0].timestamp, 3);
        /* 맨 뒤는 신규 포인트들의 마지막 */
        assert_eq!(buffer.points()[9].timestamp, 104);
    }

    #[test]
    fn buffer_never_exceeds_data_limit_after_trim() {
        let mut buffer: DataBuffer = DataBuffer::new(7);

        for batch in 0..5 {
            buffer.append_and_trim(make_points(batch * 100, 4));
            assert!(buffer.len() <= 7);
        }
    }
}
