use crate::error::KataError;
use crate::model::daily_record::DailyRecord;
use crate::model::summary::RevenueSummary;

/// Lowest, highest and mean revenue over the days that billed anything,
/// plus how many days (zero days included) beat that mean.
pub fn summarize(records: &[DailyRecord]) -> Result<RevenueSummary, KataError> {
    if records.is_empty() {
        return Err(KataError::EmptyInput);
    }

    let positive: Vec<f64> = records
        .iter()
        .filter(|r| r.has_revenue())
        .map(|r| r.amount)
        .collect();

    if positive.is_empty() {
        return Err(KataError::NoValidRevenue);
    }

    tracing::debug!(
        records = records.len(),
        with_revenue = positive.len(),
        "summarizing daily revenue"
    );

    let lowest_amount = positive.iter().copied().fold(f64::INFINITY, f64::min);
    let highest_amount = positive.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let count = positive.len() as f64;
    let sum: f64 = positive.iter().sum();
    let mean_amount = if sum.is_finite() {
        sum / count
    } else {
        // The plain sum overflowed; dividing first keeps the mean in range.
        positive.iter().map(|a| a / count).sum()
    };
    // Rounding can nudge the mean just past the extremes.
    let mean_amount = mean_amount.clamp(lowest_amount, highest_amount);

    // Strict comparison, a day equal to the mean is not above it.
    let days_above_mean = records.iter().filter(|r| r.amount > mean_amount).count();

    Ok(RevenueSummary {
        lowest_amount,
        highest_amount,
        mean_amount,
        days_above_mean,
    })
}
