//! CSV export of expense records
//!
//! Header `Date,Amount,Category,Description`, then one row per record in the
//! order given. Every data field is quoted and embedded quotes are doubled, so
//! any description survives a round trip through a standard CSV reader.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

use crate::calendar::day_label;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row of the expense CSV format
pub const CSV_HEADER: &str = "Date,Amount,Category,Description";

/// The four exported fields of a record
pub fn csv_fields(expense: &Expense) -> [String; 4] {
    [
        day_label(expense.date),
        expense.amount.to_decimal_string(),
        expense.category.name().to_string(),
        expense.description.clone(),
    ]
}

/// Write records as CSV to `writer`
pub fn write_expenses_csv<W: Write>(records: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    writeln!(writer, "{}", CSV_HEADER).map_err(|e| ExpenseError::Export(e.to_string()))?;

    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for expense in records {
        csv_writer.write_record(csv_fields(expense))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Serialize records to a CSV string
pub fn expenses_to_csv(records: &[Expense]) -> ExpenseResult<String> {
    let mut buffer = Vec::new();
    write_expenses_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = expenses_to_csv(&[]).unwrap();
        assert_eq!(csv, "Date,Amount,Category,Description\n");
    }

    #[test]
    fn test_rows_are_fully_quoted() {
        let records = vec![Expense::new(
            date(2025, 1, 5),
            Money::from_cents(1250),
            Category::Food,
            "Coffee beans",
        )];
        let csv = expenses_to_csv(&records).unwrap();
        assert_eq!(
            csv,
            "Date,Amount,Category,Description\n\"Jan 5, 2025\",\"12.50\",\"Food\",\"Coffee beans\"\n"
        );
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let records = vec![Expense::new(
            date(2025, 1, 5),
            Money::from_cents(500),
            Category::Other,
            "He said \"hi\", ok",
        )];
        let csv = expenses_to_csv(&records).unwrap();
        assert!(csv.contains("\"He said \"\"hi\"\", ok\""));
    }

    #[test]
    fn test_rows_keep_caller_order() {
        let records = vec![
            Expense::new(date(2025, 3, 1), Money::from_cents(300), Category::Food, "Third"),
            Expense::new(date(2025, 1, 1), Money::from_cents(100), Category::Food, "First"),
        ];
        let csv = expenses_to_csv(&records).unwrap();
        let third = csv.find("Third").unwrap();
        let first = csv.find("First").unwrap();
        assert!(third < first);
    }

    #[test]
    fn test_round_trip_through_csv_reader() {
        let records = vec![
            Expense::new(
                date(2024, 2, 29),
                Money::from_cents(123456),
                Category::Bills,
                "Rent, \"February\"",
            ),
            Expense::new(
                date(2025, 12, 31),
                Money::from_cents(7),
                Category::Transportation,
                "Bus\nfare",
            ),
        ];
        let csv = expenses_to_csv(&records).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["Date", "Amount", "Category", "Description"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), records.len());
        for (row, expense) in rows.iter().zip(&records) {
            let expected = csv_fields(expense);
            assert_eq!(row.iter().collect::<Vec<_>>(), expected.iter().map(String::as_str).collect::<Vec<_>>());
        }
        assert_eq!(&rows[0][3], "Rent, \"February\"");
        assert_eq!(&rows[0][1], "1234.56");
    }
}
