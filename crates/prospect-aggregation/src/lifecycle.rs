//! Lifecycle state decision.

use prospect_core::config::AggregationConfig;
use prospect_core::models::LifecycleState;

/// First matching rule wins:
/// 1. LIVE with any validated RFP
/// 2. ENGAGE when activity reaches `engage_activity`
/// 3. WARM when activity reaches `warm_activity` or maturity reaches `warm_maturity`
/// 4. MONITOR
pub fn determine_state(
    maturity_score: f64,
    activity_score: f64,
    validated_signals: u32,
    config: &AggregationConfig,
) -> LifecycleState {
    if validated_signals > 0 {
        LifecycleState::Live
    } else if activity_score >= config.engage_activity {
        LifecycleState::Engage
    } else if activity_score >= config.warm_activity || maturity_score >= config.warm_maturity {
        LifecycleState::Warm
    } else {
        LifecycleState::Monitor
    }
}
