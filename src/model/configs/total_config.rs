use crate::common::*;

use crate::model::configs::{
    axis_config::*, chart_config::*, data_source_config::*, update_config::*, visual_config::*,
};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_analyzer_config);

#[doc = "Function to initialize Analyzer configuration information instances"]
pub fn initialize_analyzer_config() -> TotalConfig {
    info!("initialize_analyzer_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub data_source: DataSourceConfig,
    pub chart: ChartConfig,
    pub axis: AxisConfig,
    pub visual: VisualConfig,
    pub update: UpdateConfig,
}

#[doc = "데이터 소스 config 정보"]
pub fn get_data_source_config_info() -> &'static DataSourceConfig {
    &TOTAL_CONFIG.data_source
}

#[doc = "차트 도화면 config 정보"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

#[doc = "축 config 정보"]
pub fn get_axis_config_info() -> &'static AxisConfig {
    &TOTAL_CONFIG.axis
}

#[doc = "시각화 config 정보"]
pub fn get_visual_config_info() -> &'static VisualConfig {
    &TOTAL_CONFIG.visual
}

#[doc = "실시간 갱신 config 정보"]
pub fn get_update_config_info() -> &'static UpdateConfig {
    &TOTAL_CONFIG.update
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&ANALYZER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg =
                    "Failed to convert the data from ANALYZER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
