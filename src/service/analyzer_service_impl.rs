use crate::common::*;

use crate::traits::service_traits::{
    analyzer_service::*, chart_service::*, query_service::*,
};

use crate::dto::data_point::*;

use crate::model::series::data_buffer::*;

#[derive(Debug, new)]
pub struct AnalyzerServiceImpl<Q: QueryService, C: ChartService> {
    query_service: Q,
    chart_service: C,
    data_limit: usize,
    update_interval: u64,
    update_threshold: usize,
    chart_output_path: PathBuf,
}

impl<Q, C> AnalyzerServiceImpl<Q, C>
where
    Q: QueryService + Sync + Send,
    C: ChartService + Sync + Send,
{
    #[doc = r#"
        최초 데이터 로드를 수행하는 함수.

        성공 시 버퍼를 응답 전체로 교체하고 즉시 redraw 한다.
        조회 실패 시에는 재시도 없이 로그만 남기고 해당 사이클을 건너뛴다
        (best-effort 정책, 이후 폴링 사이클은 정상 진행).
    "#]
    async fn load_initial_data(&self, buffer: &mut DataBuffer) -> anyhow::Result<()> {
        let data_points: Vec<DataPoint> = match self.query_service.fetch_data_points().await {
            Ok(data_points) => data_points,
            Err(e) => {
                error!(
                    "[AnalyzerServiceImpl->load_initial_data] Initial load failed. The chart stays empty until a poll succeeds. {:?}",
                    e
                );
                return Ok(());
            }
        };

        info!("Initial load: {} data points", data_points.len());

        buffer.replace_all(data_points);
        self.redraw(buffer).await?;

        Ok(())
    }

    #[doc = r#"
        폴링 사이클 1회를 수행하는 함수.

        1. 데이터 소스에서 신규 데이터 포인트를 조회
        2. 조회 실패 시 로그만 남기고 사이클 종료 (버퍼/차트 변화 없음)
        3. 성공 시 버퍼 뒤에 이어붙이고 `data_limit` 초과분을 오래된 것부터 제거
        4. 이번 사이클에 새로 도착한 포인트 개수가 `update_threshold` 이상일 때만 redraw.
           임계치 미만이면 버퍼만 갱신되고 차트는 이전 상태를 유지한다
    "#]
    async fn run_update_cycle(&self, buffer: &mut DataBuffer) -> anyhow::Result<()> {
        let new_points: Vec<DataPoint> = match self.query_service.fetch_data_points().await {
            Ok(new_points) => new_points,
            Err(e) => {
                error!(
                    "[AnalyzerServiceImpl->run_update_cycle] Poll failed. Skipping this cycle. {:?}",
                    e
                );
                return Ok(());
            }
        };

        let new_count: usize = new_points.len();
        let dropped: usize = buffer.append_and_trim(new_points);

        if new_count >= self.update_threshold {
            self.redraw(buffer).await?;
            info!(
                "Chart redrawn: {} new points, {} dropped, buffer size {}",
                new_count,
                dropped,
                buffer.len()
            );
        } else {
            info!(
                "Buffer updated without redraw: {} new points (threshold {}), buffer size {}",
                new_count,
                self.update_threshold,
                buffer.len()
            );
        }

        Ok(())
    }

    async fn redraw(&self, buffer: &DataBuffer) -> anyhow::Result<()> {
        self.chart_service
            .render_line_chart(buffer.points(), &self.chart_output_path)
            .await
    }
}

#[async_trait]
impl<Q, C> AnalyzerService for AnalyzerServiceImpl<Q, C>
where
    Q: QueryService + Sync + Send,
    C: ChartService + Sync + Send,
{
    #[doc = r#"
        fetch/update/redraw 사이클을 계속해서 돌려주는 함수.

        1. 빈 버퍼를 만들고 최초 데이터 로드 + 첫 렌더링을 수행
        2. `update_interval` 밀리초 간격의 ticker로 폴링 사이클을 무한 반복
        3. 조회 실패는 사이클 내부에서 삼켜지며, 렌더링 실패(디스크 오류 등)만
           루프를 중단시키고 호출자에게 전파된다

        # Returns
        * `anyhow::Result<()>` - 렌더링 실패 등 치명적 오류 시 Err
    "#]
    async fn run_analyzer_loop(&self) -> anyhow::Result<()> {
        let mut buffer: DataBuffer = DataBuffer::new(self.data_limit);

        self.load_initial_data(&mut buffer).await?;

        let mut ticker: Interval = interval(Duration::from_millis(self.update_interval));
        /* interval의 첫 tick은 즉시 완료되므로 한 번 소비하고 시작한다 */
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.run_update_cycle(&mut buffer).await?;
        }
    }
}
