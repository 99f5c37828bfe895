// Single source of truth for all default values.

// --- Discovery budgets ---
pub const DEFAULT_MAX_ITERATIONS: u32 = 30;
pub const DEFAULT_MAX_DEPTH: u32 = 10;
pub const DEFAULT_COST_LIMIT_USD: f64 = 2.0;
pub const DEFAULT_EVALUATION_COST_USD: f64 = 0.02;

// --- Confidence ---
pub const DEFAULT_INITIAL_CONFIDENCE: f64 = 0.50;
pub const DEFAULT_ACCEPT_DELTA: f64 = 0.06;
/// Alternative calibration documented alongside the default.
pub const ACCEPT_DELTA_AGGRESSIVE: f64 = 0.08;
pub const DEFAULT_WEAK_ACCEPT_DELTA: f64 = 0.02;
pub const DEFAULT_REJECT_PENALTY: f64 = 0.0;
pub const DEFAULT_NO_ACCEPT_CEILING: f64 = 0.70;
pub const DEFAULT_PROMOTE_THRESHOLD: f64 = 0.70;
pub const DEFAULT_KILL_THRESHOLD: f64 = 0.05;
pub const DEFAULT_DEGRADE_MIN_REJECTIONS: u32 = 2;
pub const DEFAULT_KILL_MIN_REJECTIONS: u32 = 3;

// --- Saturation ---
pub const DEFAULT_SATURATION_THRESHOLD: usize = 5;
pub const DEFAULT_SATURATION_WINDOW: usize = 7;

// --- Hop selection ---
pub const DEFAULT_FAILURE_EXCLUSION_THRESHOLD: u32 = 2;
pub const DEFAULT_EIG_WEIGHT: f64 = 0.6;
pub const DEFAULT_AFFINITY_WEIGHT: f64 = 0.4;
pub const DEFAULT_HOP_COST_USD: f64 = 0.01;
pub const DEFAULT_TENDER_HOP_COST_USD: f64 = 0.03;

// --- Classification ---
pub const DEFAULT_VALIDATED_CONFIDENCE: f64 = 0.75;
pub const DEFAULT_TENDER_DOMAIN_PATTERNS: [&str; 5] =
    ["tender", "bidnet", "rfp.", "procurement", "contract"];
pub const DEFAULT_CAPABILITY_MIN_EVIDENCE: usize = 1;
pub const DEFAULT_CAPABILITY_MIN_CONFIDENCE: f64 = 0.45;
pub const DEFAULT_PROCUREMENT_MIN_EVIDENCE: usize = 2;
pub const DEFAULT_PROCUREMENT_MIN_CONFIDENCE: f64 = 0.60;
pub const DEFAULT_VALIDATED_MIN_EVIDENCE: usize = 3;
pub const DEFAULT_VALIDATED_MIN_CONFIDENCE: f64 = 0.70;

// --- Aggregation ---
pub const DEFAULT_CAPABILITY_WEIGHT: f64 = 0.15;
pub const DEFAULT_PROCUREMENT_WEIGHT: f64 = 0.25;
pub const DEFAULT_ENGAGE_ACTIVITY: f64 = 0.6;
pub const DEFAULT_WARM_ACTIVITY: f64 = 0.4;
pub const DEFAULT_WARM_MATURITY: f64 = 0.45;
pub const DEFAULT_SCORE_PRECISION: i32 = 4;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "prospect.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Runtime ---
pub const DEFAULT_MAX_CONCURRENT_ENTITIES: usize = 4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
