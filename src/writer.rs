use bcc::view::{AccountRow, AccountTable};
use bcc::{Outcome, Result};

use std::io::Write;

use csv::Writer;

const HEADERS: [&str; 3] = ["number", "holder", "balance"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
}

/// Writes the notices of an outcome, followed by its account table if one was loaded
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, format: OutputFormat) -> Result {
    for notice in outcome.notices.iter() {
        writeln!(out, "{notice}")?;
    }

    if let Some(table) = &outcome.table {
        let rendered = match format {
            OutputFormat::Text => render_text(table),
            OutputFormat::Csv => render_csv(table)?,
        };
        write!(out, "{rendered}")?;
    }

    out.flush()?;

    return Ok(());
}

fn render_text(table: &AccountTable) -> String {
    let rows = match table {
        AccountTable::Empty(message) => return format!("{message}\n"),
        AccountTable::Rows(rows) => rows,
    };

    let width = |header: &str, cell: fn(&AccountRow) -> &str| {
        rows.iter()
            .map(|row| cell(row).chars().count())
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0)
    };

    let number_width = width(HEADERS[0], |row| row.number.as_str());
    let holder_width = width(HEADERS[1], |row| row.holder.as_str());
    let balance_width = width(HEADERS[2], |row| row.balance.as_str());

    let mut output = format!(
        "{:<number_width$}  {:<holder_width$}  {:>balance_width$}\n",
        HEADERS[0].to_uppercase(),
        HEADERS[1].to_uppercase(),
        HEADERS[2].to_uppercase(),
    );

    for row in rows {
        output.push_str(&format!(
            "{:<number_width$}  {:<holder_width$}  {:>balance_width$}\n",
            row.number, row.holder, row.balance,
        ));
    }

    return output;
}

fn render_csv(table: &AccountTable) -> Result<String> {
    let mut wtr = build_csv_writer();

    match table {
        AccountTable::Empty(_) => wtr.write_record(HEADERS)?,
        AccountTable::Rows(rows) => {
            for row in rows {
                wtr.serialize(row)?;
            }
        }
    }

    return write_to_string(wtr);
}

fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}
