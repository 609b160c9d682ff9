pub use std::{
    env,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

pub use tokio::time::{Duration, Interval, interval};

pub use anyhow::anyhow;
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{Getters, Setters};
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::Value;
