pub mod error;
pub mod exercise;
pub mod format;
pub mod model;
pub mod repository;
pub mod service;

pub use error::KataError;
pub use exercise::fibonacci::{check_fibonacci, FibonacciCheck};
pub use exercise::reverse::reverse_text;
pub use exercise::triangular::triangular_number;
pub use format::{format_brl, format_percent};
pub use model::daily_record::DailyRecord;
pub use model::share::{CategoryShare, CategoryShares};
pub use model::summary::RevenueSummary;
pub use repository::{FileRevenueRepository, RevenueRepository};
pub use service::revenue_service::RevenueService;
pub use service::revenue_share::compute_shares;
pub use service::revenue_stats::summarize;
