use crate::model::daily_record::DailyRecord;
use anyhow::Result;

pub trait RevenueRepository {
    fn daily_records(&self) -> Result<Vec<DailyRecord>>;
    /// State name to billed amount, in the order the source lists them.
    fn state_amounts(&self) -> Result<Vec<(String, f64)>>;
}
