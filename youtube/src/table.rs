//! Tabular results.
//!
//! Every fetcher returns a [`Table`] of flat records. A record type knows its column names
//! (in serialization order), and serializes to one JSON object per row, which is what export
//! tools downstream consume.

use eyre::Context;
use serde::Serialize;
use std::io::Write;

/// A flat record that can be a row of a [`Table`].
pub trait Row: Serialize {
    /// Column names, in the order the record serializes its fields.
    const COLUMNS: &'static [&'static str];
}

/// Rows × named columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R> Table<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }
}

impl<R: Row> Table<R> {
    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    /// The whole table as a JSON array of row objects.
    pub fn to_json(&self) -> eyre::Result<serde_json::Value> {
        serde_json::to_value(&self.rows).context("serialize table rows")
    }

    /// Writes one JSON object per line.
    pub fn write_json_lines<W: Write>(&self, mut out: W) -> eyre::Result<()> {
        for (i, row) in self.rows.iter().enumerate() {
            serde_json::to_writer(&mut out, row).with_context(|| format!("serialize row {i}"))?;
            out.write_all(b"\n").context("write row separator")?;
        }
        out.flush().context("flush table output")
    }
}

impl<R> FromIterator<R> for Table<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<R> Extend<R> for Table<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl<R> IntoIterator for Table<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
