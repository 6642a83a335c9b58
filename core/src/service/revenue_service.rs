use crate::model::share::CategoryShares;
use crate::model::summary::RevenueSummary;
use crate::repository::RevenueRepository;
use crate::service::revenue_share::compute_shares;
use crate::service::revenue_stats::summarize;
use anyhow::Result;

pub struct RevenueService<R: RevenueRepository> {
    repo: R,
}

impl<R: RevenueRepository> RevenueService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the daily records and summarizes them. Engine failures keep
    /// their `KataError` so callers can `downcast_ref` it.
    pub fn analyze_daily_revenue(&self) -> Result<RevenueSummary> {
        let records = self.repo.daily_records()?;
        let summary = summarize(&records)?;
        tracing::info!(
            days = records.len(),
            days_above_mean = summary.days_above_mean,
            "daily revenue analysis finished"
        );
        Ok(summary)
    }

    pub fn state_shares(&self) -> Result<CategoryShares> {
        let amounts = self.repo.state_amounts()?;
        let shares = compute_shares(amounts)?;
        tracing::info!(states = shares.shares.len(), total = shares.total, "state shares computed");
        Ok(shares)
    }
}
