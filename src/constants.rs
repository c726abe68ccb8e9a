/// Port used when neither `--port` nor `PORT` is provided
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable whose presence marks a deployed instance
pub const INSTANCE_ENV: &str = "ROSTER_INSTANCE";

/// Environment variable overriding the data directory of a deployed instance
pub const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";

/// Data directory used by deployed instances when `ROSTER_DATA_DIR` is unset
pub const DEFAULT_DATA_DIR: &str = "/var/lib/roster";

/// SQLite file holding the members table
pub const MEMBERS_DB_FILE: &str = "members.db";

/// SQLite file holding the orders table
pub const ORDERS_DB_FILE: &str = "orders.db";

/// Maximum number of pooled connections per store
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// How long a pooled SQLite connection waits on a locked database
pub const SQLITE_BUSY_TIMEOUT_MS: u32 = 5000;

/// Member id that the delete endpoint always refuses
pub const REJECTED_MEMBER_ID: &str = "2";
