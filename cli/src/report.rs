use kata_core::{format_brl, format_percent, CategoryShares, FibonacciCheck, RevenueSummary};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Share")]
    share: String,
}

pub fn summary_lines(summary: &RevenueSummary) -> Vec<String> {
    let rows = vec![
        SummaryRow { metric: "Lowest revenue", value: format_brl(summary.lowest_amount) },
        SummaryRow { metric: "Highest revenue", value: format_brl(summary.highest_amount) },
        SummaryRow { metric: "Days above mean", value: summary.days_above_mean.to_string() },
        SummaryRow { metric: "Mean (days with revenue)", value: format_brl(summary.mean_amount) },
    ];

    let mut table = Table::new(rows);
    table.with(Style::modern());

    let mut lines = vec!["Daily revenue analysis".to_string()];
    lines.extend(table.to_string().lines().map(str::to_string));
    lines
}

pub fn shares_lines(shares: &CategoryShares) -> Vec<String> {
    let rows: Vec<ShareRow> = shares
        .shares
        .iter()
        .map(|s| ShareRow { state: s.category.clone(), share: format_percent(s.percentage) })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());

    let mut lines = vec!["Revenue share by state".to_string()];
    lines.extend(table.to_string().lines().map(str::to_string));
    lines.push(format!("Total revenue: {}", format_brl(shares.total)));
    lines
}

pub fn fibonacci_lines(check: &FibonacciCheck) -> Vec<String> {
    let sequence = check
        .sequence
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    match (check.position(), check.bracket()) {
        (Some(position), _) => vec![
            format!("{} BELONGS to the Fibonacci sequence.", check.target),
            format!("Position (0-based): {}", position),
            format!("Sequence so far: {}", sequence),
        ],
        (None, Some((low, high))) => vec![
            format!("{} does NOT belong to the Fibonacci sequence.", check.target),
            format!("It falls between {} and {}", low, high),
            format!("Sequence computed: {}", sequence),
        ],
        (None, None) => vec![format!("Sequence computed: {}", sequence)],
    }
}

pub fn triangular_lines(index: i64, value: u128) -> Vec<String> {
    vec![format!("The sum of 1 to {} is {}", index, value)]
}

pub fn reverse_lines(original: &str, reversed: &str) -> Vec<String> {
    vec![
        format!("Original: {}", original.trim()),
        format!("Reversed: {}", reversed),
    ]
}
