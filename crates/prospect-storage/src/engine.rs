//! StorageEngine: owns the connection pool, runs migrations on open, and
//! implements IDiscoveryStorage.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::Utc;
use rusqlite::Connection;
use tracing::debug;

use prospect_aggregation::StateAggregator;
use prospect_core::config::{AggregationConfig, StorageConfig};
use prospect_core::errors::ProspectResult;
use prospect_core::models::{Hypothesis, HypothesisState, TieredSignal};
use prospect_core::traits::IDiscoveryStorage;

use crate::migrations;
use crate::pool::{ConnectionPool, ReadPool, WriteConnection};
use crate::queries::{hypothesis_ops, signal_ops, state_ops};
use crate::to_storage_err;

pub struct StorageEngine {
    pool: ConnectionPool,
    aggregator: StateAggregator,
}

impl StorageEngine {
    /// Open (creating if needed) a file-backed database with the default
    /// read pool size.
    pub fn open(path: &Path) -> ProspectResult<Self> {
        Self::open_with(path, StorageConfig::default().read_pool_size)
    }

    pub fn open_with(path: &Path, read_pool_size: usize) -> ProspectResult<Self> {
        let writer = WriteConnection::open(path)?;
        writer.with_conn(migrations::run_migrations)?;
        // Readers open read-only, so the schema has to exist first.
        let readers = ReadPool::open(path, read_pool_size)?;
        Ok(Self {
            pool: ConnectionPool::file_backed(writer, readers, path),
            aggregator: StateAggregator::default(),
        })
    }

    /// Open from the `[storage]` and `[aggregation]` config sections.
    pub fn from_config(storage: &StorageConfig, aggregation: &AggregationConfig) -> ProspectResult<Self> {
        Ok(Self::open_with(Path::new(&storage.db_path), storage.read_pool_size)?
            .with_aggregation(aggregation.clone()))
    }

    /// In-memory database. Reads go through the writer.
    pub fn open_in_memory() -> ProspectResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        writer.with_conn(migrations::run_migrations)?;
        Ok(Self {
            pool: ConnectionPool::in_memory(writer),
            aggregator: StateAggregator::default(),
        })
    }

    /// Use these rollup rules for `recalculate`.
    pub fn with_aggregation(mut self, config: AggregationConfig) -> Self {
        self.aggregator = StateAggregator::new(config);
        self
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn schema_version(&self) -> ProspectResult<u32> {
        self.pool.writer.with_conn(migrations::current_version)
    }

    /// Run a read-only closure on a reader when there is a read pool,
    /// otherwise on the writer.
    fn with_reader<F, T>(&self, f: F) -> ProspectResult<T>
    where
        F: FnOnce(&Connection) -> ProspectResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IDiscoveryStorage for StorageEngine {
    fn save_hypothesis(&self, hypothesis: &Hypothesis) -> ProspectResult<()> {
        self.pool
            .writer
            .with_conn(|conn| hypothesis_ops::upsert_hypothesis(conn, hypothesis))
    }

    fn get_hypothesis(&self, hypothesis_id: &str) -> ProspectResult<Option<Hypothesis>> {
        self.with_reader(|conn| hypothesis_ops::get_hypothesis(conn, hypothesis_id))
    }

    fn hypotheses_for_entity(&self, entity_id: &str) -> ProspectResult<Vec<Hypothesis>> {
        self.with_reader(|conn| hypothesis_ops::hypotheses_for_entity(conn, entity_id))
    }

    fn save_signal(&self, signal: &TieredSignal) -> ProspectResult<()> {
        self.pool
            .writer
            .with_conn(|conn| signal_ops::upsert_signal(conn, signal))
    }

    fn signals_for(&self, entity_id: &str, category: &str) -> ProspectResult<Vec<TieredSignal>> {
        self.with_reader(|conn| signal_ops::signals_for(conn, entity_id, category))
    }

    fn signals_for_entity(&self, entity_id: &str) -> ProspectResult<Vec<TieredSignal>> {
        self.with_reader(|conn| signal_ops::signals_for_entity(conn, entity_id))
    }

    fn save_state(&self, state: &HypothesisState) -> ProspectResult<()> {
        self.pool
            .writer
            .with_conn(|conn| state_ops::upsert_state(conn, state))
    }

    fn get_state(&self, entity_id: &str, category: &str) -> ProspectResult<Option<HypothesisState>> {
        self.with_reader(|conn| state_ops::get_state(conn, entity_id, category))
    }

    fn get_all_states(&self, entity_id: &str) -> ProspectResult<Vec<HypothesisState>> {
        self.with_reader(|conn| state_ops::get_all_states(conn, entity_id))
    }

    /// Recompute every category that has signals or a stored state, in one
    /// transaction on the writer.
    fn recalculate(&self, entity_id: &str) -> ProspectResult<Vec<HypothesisState>> {
        self.pool.writer.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(e.to_string()))?;
            let signals = signal_ops::signals_for_entity(&tx, entity_id)?;
            let mut categories: BTreeSet<String> =
                signal_ops::signal_categories(&tx, entity_id)?.into_iter().collect();
            categories.extend(
                state_ops::get_all_states(&tx, entity_id)?
                    .into_iter()
                    .map(|s| s.category),
            );

            let states = self.aggregator.compute_for(
                entity_id,
                categories.iter().map(String::as_str),
                &signals,
                Utc::now(),
            );
            for state in &states {
                state_ops::upsert_state(&tx, state)?;
            }
            tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
            debug!(entity_id, categories = states.len(), "states recalculated");
            Ok(states)
        })
    }
}
