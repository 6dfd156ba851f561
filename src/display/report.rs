//! Shared formatting helpers for terminal output

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a percentage with two decimals
pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Format a distance in miles with one decimal
pub fn format_miles(miles: f64) -> String {
    format!("{:.1} mi", miles)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
