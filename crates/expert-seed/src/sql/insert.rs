//! Multi-row INSERT statement assembly.

use std::io::{self, Write};

use super::{SqlValue, render_row};

/// Column names per line in the rendered column list.
const COLUMNS_PER_LINE: usize = 6;

/// A multi-row `INSERT` whose rows all have exactly `N` values.
#[derive(Debug, Clone)]
pub struct InsertStatement<'a, const N: usize> {
    table: &'a str,
    columns: &'a [&'a str; N],
    rows: Vec<[SqlValue; N]>,
}

impl<'a, const N: usize> InsertStatement<'a, N> {
    pub fn new(table: &'a str, columns: &'a [&'a str; N]) -> Self {
        Self {
            table,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: [SqlValue; N]) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[[SqlValue; N]] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes the statement. Rows are separated by `,` and the last one is
    /// terminated by `;`. Writes nothing when there are no rows.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }

        writeln!(out, "INSERT INTO {} (", self.table)?;
        let lines: Vec<String> = self
            .columns
            .chunks(COLUMNS_PER_LINE)
            .map(|chunk| format!("    {}", chunk.join(", ")))
            .collect();
        writeln!(out, "{}", lines.join(",\n"))?;
        writeln!(out, ") VALUES")?;

        let last = self.rows.len() - 1;
        for (i, row) in self.rows.iter().enumerate() {
            let terminator = if i == last { ';' } else { ',' };
            writeln!(out, "{}{terminator}", render_row(row))?;
        }

        Ok(())
    }
}
