//! CSV Export functionality
//!
//! One row per ledger entry, categories in budget order.

use std::io::Write;

use crate::error::LedgerResult;
use crate::models::Category;

const HEADER: [&str; 4] = ["Category", "Index", "Description", "Amount"];

/// Export every ledger entry of `categories` to CSV
pub fn export_ledger_csv<W: Write>(categories: &[Category], writer: W) -> LedgerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for category in categories {
        for (index, entry) in category.ledger().iter().enumerate() {
            let position = (index + 1).to_string();
            let amount = entry.amount.format_plain();
            csv_writer.write_record([
                category.name.as_str(),
                position.as_str(),
                entry.description.as_str(),
                amount.as_str(),
            ])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_export_ledger_csv() {
        let mut food = Category::new("Food");
        let mut clothing = Category::new("Clothing");
        food.deposit(Money::from_cents(100_000), "initial deposit");
        food.withdraw(Money::from_cents(1_015), "groceries, mostly");
        food.transfer(Money::from_cents(5_000), &mut clothing);

        let mut buffer = Vec::new();
        export_ledger_csv(&[food, clothing], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Category,Index,Description,Amount");
        assert_eq!(lines[1], "Food,1,initial deposit,1000.00");
        assert_eq!(lines[2], "Food,2,\"groceries, mostly\",-10.15");
        assert_eq!(lines[3], "Food,3,Transfer to Clothing,-50.00");
        assert_eq!(lines[4], "Clothing,1,Transfer from Food,50.00");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_export_empty_ledgers_writes_header_only() {
        let mut buffer = Vec::new();
        export_ledger_csv(&[Category::new("Auto")], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Category,Index,Description,Amount\n");
    }
}
