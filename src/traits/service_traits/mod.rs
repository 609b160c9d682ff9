pub mod analyzer_service;
pub mod chart_service;
pub mod query_service;
