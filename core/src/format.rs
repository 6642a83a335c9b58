/// Brazilian real, e.g. `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let total_cents = (value.abs() * 100.0).round() as u64;
    let reais = total_cents / 100;
    let cents = total_cents % 100;

    // Group thousands with dots
    let reais_str = reais.to_string();
    let mut grouped = String::new();
    for (i, c) in reais_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let reais_formatted: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && total_cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, reais_formatted, cents)
}

/// A value already on the 0–100 scale, two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}
