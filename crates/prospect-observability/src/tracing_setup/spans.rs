//! Span definitions per operation: entity run, iteration, category rollup.

/// Create a span covering one entity's discovery run.
#[macro_export]
macro_rules! discovery_span {
    ($entity_id:expr) => {
        tracing::info_span!("prospect.discovery", entity_id = %$entity_id)
    };
}

/// Create a span covering one iteration of a run.
#[macro_export]
macro_rules! iteration_span {
    ($hypothesis_id:expr, $iteration:expr) => {
        tracing::debug_span!(
            "prospect.iteration",
            hypothesis_id = %$hypothesis_id,
            iteration = $iteration
        )
    };
}

/// Create a span covering one (entity, category) rollup.
#[macro_export]
macro_rules! aggregation_span {
    ($entity_id:expr, $category:expr) => {
        tracing::info_span!(
            "prospect.aggregation",
            entity_id = %$entity_id,
            category = %$category
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DISCOVERY: &str = "prospect.discovery";
    pub const ITERATION: &str = "prospect.iteration";
    pub const AGGREGATION: &str = "prospect.aggregation";
}
