use serde::{Deserialize, Serialize};

/// Result of one pass of the revenue statistics engine.
///
/// `lowest_amount`, `highest_amount` and `mean_amount` only consider days
/// with revenue. `days_above_mean` counts every day, zero days included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    pub lowest_amount: f64,
    pub highest_amount: f64,
    pub mean_amount: f64,
    pub days_above_mean: usize,
}
