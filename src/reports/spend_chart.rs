//! Spend chart
//!
//! Renders the share of total spending taken by each category as a vertical
//! bar chart of `o` markers, bucketed down to multiples of ten percent.

use crate::models::{Category, Money};

/// Chart header line
pub const CHART_TITLE: &str = "Percentage spent by category";

/// One chart column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendColumn {
    /// Category name, printed vertically under the column
    pub name: String,
    /// Total spent by the category
    pub spent: Money,
    /// Share of total spending, floored to a multiple of ten
    pub percentage: u32,
}

/// Spending distribution across an ordered set of categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendChart {
    /// Columns in the order the categories were given
    pub columns: Vec<SpendColumn>,
    /// Spending summed over every column
    pub total_spent: Money,
}

impl SpendChart {
    /// Compute the chart for `categories`, preserving their order
    ///
    /// With no spending at all every column sits at 0%.
    pub fn generate(categories: &[Category]) -> Self {
        let total_spent: Money = categories.iter().map(Category::spent).sum();

        let columns = categories
            .iter()
            .map(|category| {
                let spent = category.spent();
                SpendColumn {
                    name: category.name.clone(),
                    spent,
                    percentage: bucketed_percentage(spent, total_spent),
                }
            })
            .collect();

        Self {
            columns,
            total_spent,
        }
    }

    /// Format the chart for terminal display
    pub fn format_terminal(&self) -> String {
        let mut lines = vec![CHART_TITLE.to_string()];

        for threshold in (0..=100u32).rev().step_by(10) {
            let mut row = format!("{:>3}| ", threshold);
            for column in &self.columns {
                row.push_str(if column.percentage >= threshold {
                    "o  "
                } else {
                    "   "
                });
            }
            lines.push(row);
        }

        lines.push(format!("    {}", "-".repeat(3 * self.columns.len() + 1)));

        let names: Vec<Vec<char>> = self.columns.iter().map(|c| c.name.chars().collect()).collect();
        let max_len = names.iter().map(Vec::len).max().unwrap_or(0);

        for i in 0..max_len {
            let mut row = String::from("     ");
            for name in &names {
                row.push(name.get(i).copied().unwrap_or(' '));
                row.push_str("  ");
            }
            lines.push(row);
        }

        lines.join("\n").trim_end_matches('\n').to_string()
    }
}

/// `floor(spent / total * 100)`, then floored again to a multiple of ten
fn bucketed_percentage(spent: Money, total: Money) -> u32 {
    if total.is_zero() {
        return 0;
    }
    let percent = i128::from(spent.cents()) * 100 / i128::from(total.cents());
    (percent / 10 * 10) as u32
}

/// Render the spend chart for `categories`
pub fn create_spend_chart(categories: &[Category]) -> String {
    SpendChart::generate(categories).format_terminal()
}
