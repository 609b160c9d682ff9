pub use chrono::{DateTime, Local, TimeZone, Utc};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::Client;
