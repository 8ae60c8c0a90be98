//! Table - Indicator matrix of alternatives (rows) by indicators (columns).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::EvaluationError;

/// An immutable table of finite indicator values.
///
/// Rows are alternatives keyed by a unique sample id; columns are indicators
/// keyed by a unique name. Values are stored column-major since every
/// preprocessing and weighting step works column by column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableRecord", into = "TableRecord")]
pub struct Table {
    index: Vec<String>,
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl Table {
    /// Creates a builder for constructing a table.
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Row identifiers in order.
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Indicator names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of indicator columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.columns.is_empty()
    }

    /// Position of the named column.
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of the named column.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.column_position(name).map(|j| self.values[j].as_slice())
    }

    /// Values of the column at position `j`.
    ///
    /// # Panics
    /// Panics if `j >= column_count()`.
    pub fn column_at(&self, j: usize) -> &[f64] {
        &self.values[j]
    }

    /// Iterates `(name, values)` pairs in column order.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .zip(&self.values)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Returns row `i` as a vector in column order.
    ///
    /// # Panics
    /// Panics if `i >= row_count()`.
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.values.iter().map(|col| col[i]).collect()
    }

    /// Returns a copy of this table with the named column replaced.
    pub fn with_column(&self, name: &str, values: Vec<f64>) -> Result<Table, EvaluationError> {
        let j = self
            .column_position(name)
            .ok_or_else(|| EvaluationError::UnknownColumn(name.to_string()))?;
        if values.len() != self.row_count() {
            return Err(EvaluationError::shape_mismatch(
                format!("column '{}'", name),
                self.row_count(),
                values.len(),
            ));
        }
        ensure_all_finite(name, &values)?;

        let mut table = self.clone();
        table.values[j] = values;
        Ok(table)
    }

    /// Fails with `InvalidTable` when the table has no rows or no columns.
    pub fn require_non_empty(&self, operation: &str) -> Result<(), EvaluationError> {
        if self.row_count() == 0 {
            return Err(EvaluationError::invalid_table(format!(
                "{} requires at least one row",
                operation
            )));
        }
        if self.column_count() == 0 {
            return Err(EvaluationError::invalid_table(format!(
                "{} requires at least one indicator column",
                operation
            )));
        }
        Ok(())
    }

    /// Builds a new table with the same index and names by transforming
    /// each column.
    pub(crate) fn map_columns<F>(&self, mut f: F) -> Result<Table, EvaluationError>
    where
        F: FnMut(&str, &[f64]) -> Result<Vec<f64>, EvaluationError>,
    {
        let values = self
            .iter_columns()
            .map(|(name, col)| f(name, col))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Table {
            index: self.index.clone(),
            columns: self.columns.clone(),
            values,
        })
    }
}

fn ensure_all_finite(name: &str, values: &[f64]) -> Result<(), EvaluationError> {
    if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
        return Err(EvaluationError::invalid_table(format!(
            "column '{}' has a non-finite value at row {}",
            name, pos
        )));
    }
    Ok(())
}

/// Builder for constructing validated Table instances.
#[derive(Debug, Default)]
pub struct TableBuilder {
    index: Option<Vec<String>>,
    columns: Vec<(String, Vec<f64>)>,
}

impl TableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row identifiers. Without an index rows are labelled "0", "1", ...
    pub fn index(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.index = Some(ids.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Appends an indicator column.
    pub fn column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.push((name.into(), values));
        self
    }

    /// Validates and builds the table.
    ///
    /// # Errors
    /// `InvalidTable` for ragged columns, an index of the wrong length,
    /// duplicate row ids or column names, and non-finite values.
    pub fn build(self) -> Result<Table, EvaluationError> {
        let row_count = match (&self.index, self.columns.first()) {
            (Some(index), _) => index.len(),
            (None, Some((_, values))) => values.len(),
            (None, None) => 0,
        };

        let index = self
            .index
            .unwrap_or_else(|| (0..row_count).map(|i| i.to_string()).collect());

        let mut seen_ids = HashSet::new();
        for id in &index {
            if !seen_ids.insert(id.as_str()) {
                return Err(EvaluationError::invalid_table(format!(
                    "duplicate row id '{}'",
                    id
                )));
            }
        }

        let mut seen_names = HashSet::new();
        let mut columns = Vec::with_capacity(self.columns.len());
        let mut values = Vec::with_capacity(self.columns.len());
        for (name, col) in self.columns {
            if !seen_names.insert(name.clone()) {
                return Err(EvaluationError::invalid_table(format!(
                    "duplicate column '{}'",
                    name
                )));
            }
            if col.len() != row_count {
                return Err(EvaluationError::invalid_table(format!(
                    "column '{}' has {} values, expected {}",
                    name,
                    col.len(),
                    row_count
                )));
            }
            ensure_all_finite(&name, &col)?;
            columns.push(name);
            values.push(col);
        }

        Ok(Table {
            index,
            columns,
            values,
        })
    }
}

/// Serialized form of a [`Table`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Vec<String>>,
    pub columns: Vec<ColumnRecord>,
}

/// Serialized form of one indicator column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRecord {
    pub name: String,
    pub values: Vec<f64>,
}

impl TryFrom<TableRecord> for Table {
    type Error = EvaluationError;

    fn try_from(record: TableRecord) -> Result<Self, Self::Error> {
        let mut builder = Table::builder();
        if let Some(index) = record.index {
            builder = builder.index(index);
        }
        record
            .columns
            .into_iter()
            .fold(builder, |b, col| b.column(col.name, col.values))
            .build()
    }
}

impl From<Table> for TableRecord {
    fn from(table: Table) -> Self {
        TableRecord {
            index: Some(table.index),
            columns: table
                .columns
                .into_iter()
                .zip(table.values)
                .map(|(name, values)| ColumnRecord { name, values })
                .collect(),
        }
    }
}
