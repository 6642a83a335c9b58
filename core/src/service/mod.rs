pub mod revenue_service;
pub mod revenue_share;
pub mod revenue_stats;
