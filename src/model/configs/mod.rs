pub mod axis_config;
pub mod chart_config;
pub mod chart_margin;
pub mod data_source_config;
pub mod total_config;
pub mod update_config;
pub mod visual_config;
