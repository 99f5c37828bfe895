//! Bounded fan-out of entity runs.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::warn;

use prospect_core::errors::{ProspectError, ProspectResult};
use prospect_core::models::{CategoryTemplate, DiscoveryReport, EntityContext};
use prospect_core::traits::{IDiscoveryStorage, IEvaluationOracle, IRetrievalSource};

use crate::engine::DiscoveryEngine;

/// Runs many entities concurrently, at most `max_concurrent` at a time.
///
/// Entity runs share nothing but the engine's collaborators; each run owns its
/// hypotheses and states outright. Storage calls are synchronous, so loading
/// and persisting a run happen on the blocking thread pool, never on a
/// runtime worker.
pub struct DiscoveryPool<O, R, S> {
    engine: Arc<DiscoveryEngine<O, R, S>>,
    semaphore: Arc<Semaphore>,
    max_concurrent: usize,
}

impl<O, R, S> DiscoveryPool<O, R, S>
where
    O: IEvaluationOracle + 'static,
    R: IRetrievalSource + 'static,
    S: IDiscoveryStorage + 'static,
{
    /// A pool sized by `runtime.max_concurrent_entities`.
    pub fn new(engine: Arc<DiscoveryEngine<O, R, S>>) -> Self {
        let max = engine.config().runtime.max_concurrent_entities;
        Self::with_capacity(engine, max)
    }

    pub fn with_capacity(engine: Arc<DiscoveryEngine<O, R, S>>, max_concurrent: usize) -> Self {
        let max_concurrent = max_concurrent.max(1);
        Self {
            engine,
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
        }
    }

    pub fn engine(&self) -> &Arc<DiscoveryEngine<O, R, S>> {
        &self.engine
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Run every entity to termination.
    ///
    /// One result per entity, in input order. A failed entity does not stop
    /// the others.
    pub async fn run_all(
        &self,
        entities: Vec<EntityContext>,
        templates: &[CategoryTemplate],
    ) -> Vec<(String, ProspectResult<DiscoveryReport>)> {
        let templates: Arc<[CategoryTemplate]> = templates.into();
        let mut handles = Vec::with_capacity(entities.len());

        for entity in entities {
            let entity_id = entity.entity_id.clone();
            let engine = Arc::clone(&self.engine);
            let semaphore = Arc::clone(&self.semaphore);
            let templates = Arc::clone(&templates);
            let handle = tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.map_err(|e| {
                    ProspectError::ConcurrencyError(format!("worker pool closed: {e}"))
                })?;
                let mut run = {
                    let engine = Arc::clone(&engine);
                    blocking(move || engine.begin(entity, &templates)).await?
                };
                engine.drive(&mut run).await;
                let (run, states) = {
                    let engine = Arc::clone(&engine);
                    blocking(move || {
                        let states = engine.persist(&run)?;
                        Ok((run, states))
                    })
                    .await?
                };
                Ok::<_, ProspectError>(engine.report(&run, states))
            });
            handles.push((entity_id, handle));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (entity_id, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(ProspectError::ConcurrencyError(format!(
                    "entity task failed: {e}"
                ))),
            };
            if let Err(e) = &result {
                warn!(entity_id = %entity_id, error = %e, "entity run failed");
            }
            results.push((entity_id, result));
        }
        results
    }
}

/// Run a synchronous storage call on the blocking thread pool.
async fn blocking<T, F>(f: F) -> ProspectResult<T>
where
    F: FnOnce() -> ProspectResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ProspectError::ConcurrencyError(format!("storage task failed: {e}")))?
}
