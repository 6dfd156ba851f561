//! Budget summary display formatting

use super::report::{format_amount, format_percentage, separator};
use crate::models::BudgetSummary;

/// Format a category summary as a table
pub fn format_budget_summary(summary: &BudgetSummary, symbol: &str) -> String {
    if summary.is_empty() {
        return "No categorized expenses.".to_string();
    }

    let name_width = summary
        .keys()
        .map(|c| c.as_str().len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>10}\n",
        "Category",
        "Total",
        "Of Income",
        name_width = name_width,
    ));
    output.push_str(&separator(name_width + 26));
    output.push('\n');

    for (category, line) in summary {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>10}\n",
            category.as_str(),
            format_amount(line.total, symbol),
            format_percentage(line.percentage),
            name_width = name_width,
        ));
    }

    let total: f64 = summary.values().map(|s| s.total).sum();
    let percentage: f64 = summary.values().map(|s| s.percentage).sum();
    output.push_str(&separator(name_width + 26));
    output.push('\n');
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>10}",
        "Total",
        format_amount(total, symbol),
        format_percentage(percentage),
        name_width = name_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategorySummary, ExpenseCategory};

    #[test]
    fn test_empty_summary() {
        assert_eq!(
            format_budget_summary(&BudgetSummary::new(), "$"),
            "No categorized expenses."
        );
    }

    #[test]
    fn test_summary_table() {
        let mut summary = BudgetSummary::new();
        summary.insert(
            ExpenseCategory::Mortgage,
            CategorySummary {
                total: 1500.0,
                percentage: 30.0,
            },
        );
        summary.insert(
            ExpenseCategory::CreditCard,
            CategorySummary {
                total: 250.0,
                percentage: 5.0,
            },
        );

        let output = format_budget_summary(&summary, "$");
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Category"));
        assert!(lines[2].starts_with("mortgage"));
        assert!(lines[2].contains("$1500.00"));
        assert!(lines[3].starts_with("credit card"));
        assert!(lines[5].contains("$1750.00"));
        assert!(lines[5].contains("35.00%"));
    }
}
