mod myconfig;

pub use self::myconfig::{ApiConfig, Config, StorageConfig};
