mod oracle;
mod retrieval;
mod storage;

pub use oracle::IEvaluationOracle;
pub use retrieval::IRetrievalSource;
pub use storage::IDiscoveryStorage;
