//! Form rows: raw user text per row and the ordered collection of rows.

use serde::{Deserialize, Serialize};

use crate::core::inequality::{DIM, Inequality, InequalityError, Sign, parse_parts};

/// A row that failed to parse. `index` is zero-based; display is one-based.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("row {}: {}", .index + 1, .source)]
pub struct RowError {
    pub index: usize,
    #[source]
    pub source: InequalityError,
}

/// Raw text of one form row, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub coeffs: [String; DIM],
    pub sign: String,
    pub rhs: String,
}

impl Default for RawRow {
    fn default() -> Self {
        Self::blank()
    }
}

impl RawRow {
    pub fn new(coeffs: [&str; DIM], sign: &str, rhs: &str) -> Self {
        Self {
            coeffs: coeffs.map(String::from),
            sign: sign.to_string(),
            rhs: rhs.to_string(),
        }
    }

    /// The row a fresh form starts with: `0 0 0 <= 0`.
    pub fn blank() -> Self {
        Self::new(["0", "0", "0"], Sign::Le.as_str(), "0")
    }

    /// Validate and convert to an inequality. `index` only labels errors.
    pub fn parse(&self, index: usize) -> Result<Inequality, RowError> {
        self.parse_inner()
            .map_err(|source| RowError { index, source })
    }

    fn parse_inner(&self) -> Result<Inequality, InequalityError> {
        let [x1, x2, x3] = &self.coeffs;
        parse_parts(x1, x2, x3, &self.sign, &self.rhs)
    }
}

/// Ordered, owned collection of form rows. Order decides the emitted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    rows: Vec<RawRow>,
}

impl RowSet {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// A set holding a single blank row, like a freshly opened form.
    pub fn with_blank_row() -> Self {
        Self {
            rows: vec![RawRow::blank()],
        }
    }

    pub fn from_rows(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    /// Append a blank row and return its index.
    pub fn add_blank(&mut self) -> usize {
        self.rows.push(RawRow::blank());
        self.rows.len() - 1
    }

    /// Remove the row at `index`. Returns `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<RawRow> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&RawRow> {
        self.rows.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut RawRow> {
        self.rows.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawRow> {
        self.rows.iter()
    }

    /// Parse every row in order. The first invalid row aborts the batch.
    pub fn parse_all(&self) -> Result<Vec<Inequality>, RowError> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.parse(i))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| log::warn!("rejected input: {}", e))
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a RawRow;
    type IntoIter = std::slice::Iter<'a, RawRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
