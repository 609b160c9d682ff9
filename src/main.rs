/*
Author      : Seunghwan Shin
Create date : 2026-08-00
Description :

History     : 2026-08-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::http_source_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::configs::total_config::*;

mod dto;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{analyzer_service_impl::*, chart_service_impl::*, query_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Realtime visualization analyzer start!");

    /* 원격 데이터 소스 커넥션 */
    let source_repository: HttpSourceRepositoryImpl =
        HttpSourceRepositoryImpl::new(get_data_source_config_info()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing source_repository.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let query_service: QueryServiceImpl<HttpSourceRepositoryImpl> =
        QueryServiceImpl::new(Arc::new(source_repository));

    let chart_service: ChartServiceImpl = ChartServiceImpl::new(
        get_chart_config_info().clone(),
        get_axis_config_info().clone(),
        get_visual_config_info().clone(),
        get_data_source_config_info().data_limit,
    );

    let analyzer_service: AnalyzerServiceImpl<
        QueryServiceImpl<HttpSourceRepositoryImpl>,
        ChartServiceImpl,
    > = AnalyzerServiceImpl::new(
        query_service,
        chart_service,
        get_data_source_config_info().data_limit,
        get_update_config_info().update_interval,
        get_update_config_info().update_threshold,
        PathBuf::from(CHART_OUTPUT_PATH.as_str()),
    );

    let main_controller: MainController<
        AnalyzerServiceImpl<QueryServiceImpl<HttpSourceRepositoryImpl>, ChartServiceImpl>,
    > = MainController::new(analyzer_service);

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
