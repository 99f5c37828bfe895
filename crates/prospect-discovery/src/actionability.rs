use std::collections::BTreeSet;

use prospect_core::models::Hypothesis;

/// Whether an entity is worth acting on: at least two ACCEPTs in total,
/// spread over at least two distinct categories. Superseded hypotheses do
/// not count.
pub fn is_actionable(hypotheses: &[Hypothesis]) -> bool {
    let live = || hypotheses.iter().filter(|h| !h.is_superseded());
    let accepts: u64 = live().map(|h| u64::from(h.iterations_accepted)).sum();
    let categories: BTreeSet<&str> = live()
        .filter(|h| h.iterations_accepted > 0)
        .map(|h| h.category.as_str())
        .collect();
    accepts >= 2 && categories.len() >= 2
}
