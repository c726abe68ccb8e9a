mod parser;

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_POOL_SIZE, INSTANCE_ENV, MEMBERS_DB_FILE, ORDERS_DB_FILE,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use parser::load_service_config;

/// Where the process is running, which decides the default store targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    /// A managed deployment, flagged by `ROSTER_INSTANCE`
    Deployed,
    /// A developer machine
    Local,
}

impl Runtime {
    /// Reads the runtime flag from the process environment
    pub fn detect() -> Self {
        Self::from_instance(std::env::var(INSTANCE_ENV).ok().as_deref())
    }

    pub fn from_instance(instance: Option<&str>) -> Self {
        match instance {
            Some(value) if !value.trim().is_empty() => Runtime::Deployed,
            _ => Runtime::Local,
        }
    }
}

/// Optional YAML configuration overriding the runtime defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Connection target of the member store
    #[serde(default)]
    pub members: Option<StoreTarget>,
    /// Connection target of the order store
    #[serde(default)]
    pub orders: Option<StoreTarget>,
    /// Maximum pooled connections per store
    #[serde(default)]
    pub pool_size: Option<u32>,
}

/// Connection target of a single store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreTarget {
    /// SQLite database path or URL
    pub url: String,
}

/// Resolved connection targets for both stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreTargets {
    pub members: String,
    pub orders: String,
    pub pool_size: u32,
}

impl StoreTargets {
    /// Default targets for `runtime`.
    ///
    /// Deployed instances keep their databases under `data_dir`, falling back
    /// to `/var/lib/roster`; local runs use the working directory.
    pub fn for_runtime(runtime: Runtime, data_dir: Option<&str>) -> Self {
        let (members, orders) = match runtime {
            Runtime::Deployed => {
                let dir = Path::new(data_dir.unwrap_or(DEFAULT_DATA_DIR));
                (
                    dir.join(MEMBERS_DB_FILE).display().to_string(),
                    dir.join(ORDERS_DB_FILE).display().to_string(),
                )
            }
            Runtime::Local => (MEMBERS_DB_FILE.to_string(), ORDERS_DB_FILE.to_string()),
        };

        StoreTargets {
            members,
            orders,
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Applies the values present in `config` on top of these targets
    pub fn with_overrides(mut self, config: &ServiceConfig) -> Self {
        if let Some(target) = &config.members {
            self.members = target.url.clone();
        }
        if let Some(target) = &config.orders {
            self.orders = target.url.clone();
        }
        if let Some(size) = config.pool_size {
            self.pool_size = size;
        }
        self
    }
}
