mod config_error;
mod oracle_error;
mod prospect_error;
mod storage_error;

pub use config_error::ConfigError;
pub use oracle_error::OracleError;
pub use prospect_error::{ProspectError, ProspectResult};
pub use storage_error::StorageError;
