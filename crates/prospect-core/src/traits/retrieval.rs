use std::future::Future;
use std::sync::Arc;

use crate::models::{EntityContext, HopResolution, HopType};

/// Resolves a hop type into fetchable content for an entity.
pub trait IRetrievalSource: Send + Sync {
    /// `HopResolution::Unresolved` when no URL or query exists for this hop type.
    fn resolve(
        &self,
        hop: HopType,
        entity: &EntityContext,
    ) -> impl Future<Output = HopResolution> + Send;
}

impl<T: IRetrievalSource> IRetrievalSource for Arc<T> {
    fn resolve(
        &self,
        hop: HopType,
        entity: &EntityContext,
    ) -> impl Future<Output = HopResolution> + Send {
        (**self).resolve(hop, entity)
    }
}
