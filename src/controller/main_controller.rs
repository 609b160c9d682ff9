use crate::common::*;

use crate::traits::service_traits::analyzer_service::*;

#[derive(Debug, new)]
pub struct MainController<A: AnalyzerService> {
    analyzer_service: A,
}

impl<A: AnalyzerService + Sync + Send> MainController<A> {
    #[doc = r#"
        메인 태스크를 실행하는 핵심 함수.

        1. 분석기 루프(최초 로드 + 주기적 폴링/redraw)를 구동한다
        2. 종료 시그널(ctrl-c)을 함께 대기하다가, 시그널 수신 시 루프를 내려놓고
           정상 종료한다. 루프를 select로 감싸서 타이머가 프로세스보다 오래 살아남는
           일이 없도록 한다

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(()), 루프의 치명적 오류 시 Err
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        tokio::select! {
            loop_result = self.analyzer_service.run_analyzer_loop() => loop_result,
            signal_result = tokio::signal::ctrl_c() => {
                signal_result?;
                info!("Shutdown signal received. Stopping analyzer loop.");
                Ok(())
            }
        }
    }
}
