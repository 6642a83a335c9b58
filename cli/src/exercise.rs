use anyhow::{anyhow, Result};
use kata_core::exercise::triangular::DEFAULT_INDEX;
use kata_core::{check_fibonacci, reverse_text, triangular_number, RevenueRepository, RevenueService};

use crate::report;

/// Every exercise the menu offers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    Triangular,
    Fibonacci,
    RevenueAnalysis,
    RevenueByState,
    Reverse,
}

impl Exercise {
    pub const ALL: [Exercise; 5] = [
        Exercise::Triangular,
        Exercise::Fibonacci,
        Exercise::RevenueAnalysis,
        Exercise::RevenueByState,
        Exercise::Reverse,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Exercise::Triangular => "Triangular number",
            Exercise::Fibonacci => "Fibonacci checker",
            Exercise::RevenueAnalysis => "Daily revenue analysis",
            Exercise::RevenueByState => "Revenue share by state",
            Exercise::Reverse => "String reverser",
        }
    }

    /// What to ask the user before running, if anything.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            Exercise::Triangular => Some("Index (empty for 13)"),
            Exercise::Fibonacci => Some("Integer to check"),
            Exercise::Reverse => Some("Text to reverse"),
            Exercise::RevenueAnalysis | Exercise::RevenueByState => None,
        }
    }

    pub fn run<R: RevenueRepository>(&self, repo: R, input: &str) -> Result<Vec<String>> {
        tracing::info!(exercise = self.title(), "running exercise");
        match self {
            Exercise::Triangular => {
                let index = if input.trim().is_empty() {
                    DEFAULT_INDEX
                } else {
                    parse_integer(input)?
                };
                Ok(report::triangular_lines(index, triangular_number(index)?))
            }
            Exercise::Fibonacci => {
                let check = check_fibonacci(parse_integer(input)?)?;
                Ok(report::fibonacci_lines(&check))
            }
            Exercise::RevenueAnalysis => {
                let summary = RevenueService::new(repo).analyze_daily_revenue()?;
                Ok(report::summary_lines(&summary))
            }
            Exercise::RevenueByState => {
                let shares = RevenueService::new(repo).state_shares()?;
                Ok(report::shares_lines(&shares))
            }
            Exercise::Reverse => {
                let reversed = reverse_text(input)?;
                Ok(report::reverse_lines(input, &reversed))
            }
        }
    }
}

fn parse_integer(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| anyhow!("Invalid input '{}': please enter an integer", input.trim()))
}
