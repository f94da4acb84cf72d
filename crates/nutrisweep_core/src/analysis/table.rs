//! Ordered sweep results.

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::model::Label;

use super::{SweepDimension, Transform};

/// One row per grid point, one column per retained label.
///
/// Rows are in grid order; `points[i]` is the evaluation point of `rows[i]`.
/// Deserialized tables are checked for that shape before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "TableParts<K>",
    bound(deserialize = "K: Label + Deserialize<'de>")
)]
pub struct SweepTable<K> {
    pub dimension: SweepDimension,
    pub transform: Transform,
    points: Vec<f64>,
    columns: Vec<K>,
    rows: Vec<Vec<f64>>,
}

/// Unchecked table fields as they appear on the wire
#[derive(Deserialize)]
struct TableParts<K> {
    dimension: SweepDimension,
    transform: Transform,
    points: Vec<f64>,
    columns: Vec<K>,
    rows: Vec<Vec<f64>>,
}

impl<K: Label> TryFrom<TableParts<K>> for SweepTable<K> {
    type Error = TableError;

    fn try_from(parts: TableParts<K>) -> Result<Self, Self::Error> {
        if parts.points.len() != parts.rows.len() {
            return Err(TableError::PointCount {
                points: parts.points.len(),
                rows: parts.rows.len(),
            });
        }
        if let Some((row, values)) = parts
            .rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != parts.columns.len())
        {
            return Err(TableError::RowWidth {
                row,
                expected: parts.columns.len(),
                found: values.len(),
            });
        }
        Ok(Self {
            dimension: parts.dimension,
            transform: parts.transform,
            points: parts.points,
            columns: parts.columns,
            rows: parts.rows,
        })
    }
}

/// A single column of a table paired with the evaluation points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series<K> {
    pub label: K,
    pub points: Vec<f64>,
    pub values: Vec<f64>,
}

impl<K: Label> SweepTable<K> {
    pub(crate) fn new(
        dimension: SweepDimension,
        transform: Transform,
        columns: Vec<K>,
        rows: Vec<(f64, Vec<f64>)>,
    ) -> Self {
        let (points, rows) = rows.into_iter().unzip();
        Self {
            dimension,
            transform,
            points,
            columns,
            rows,
        }
    }

    /// Evaluation points, in grid order
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    #[must_use]
    pub fn columns(&self) -> &[K] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows (grid points)
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column, in grid order
    #[must_use]
    pub fn column(&self, label: &K) -> Option<Vec<f64>> {
        let index = self.columns.iter().position(|c| c == label)?;
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Column-major view: one series per retained label
    #[must_use]
    pub fn transpose(&self) -> Vec<Series<K>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, label)| Series {
                label: label.clone(),
                points: self.points.clone(),
                values: self.rows.iter().map(|row| row[index]).collect(),
            })
            .collect()
    }

    /// Check that no cell is NaN or infinite
    pub fn check_finite(&self) -> Result<(), TableError> {
        for (point, row) in self.points.iter().zip(&self.rows) {
            for (column, value) in self.columns.iter().zip(row) {
                if !value.is_finite() {
                    return Err(TableError::NonFinite {
                        point: *point,
                        column: column.to_string(),
                        value: *value,
                    });
                }
            }
        }
        Ok(())
    }
}
