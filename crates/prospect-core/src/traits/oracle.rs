use std::future::Future;
use std::sync::Arc;

use crate::errors::OracleError;
use crate::models::{EvaluationRequest, EvaluationResponse};

/// Turns fetched content into a decision about one hypothesis.
///
/// This is the suspension point of an iteration: the discovery loop awaits one
/// call at a time per entity and never overlaps calls within a run. Errors and
/// malformed output are degraded to `NO_PROGRESS` by the caller.
pub trait IEvaluationOracle: Send + Sync {
    fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> impl Future<Output = Result<EvaluationResponse, OracleError>> + Send;
}

impl<T: IEvaluationOracle> IEvaluationOracle for Arc<T> {
    fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> impl Future<Output = Result<EvaluationResponse, OracleError>> + Send {
        (**self).evaluate(request)
    }
}
