// File: crates/flint-charts/src/data.rs
// Summary: Tabular dataset model: one shared index plus named value columns.

use crate::error::{Error, Result};

/// The row index shared by every column. Numeric indexes drive positional
/// axes (line, scatter, stacked area); categorical indexes label bar groups.
#[derive(Clone, Debug)]
pub enum Index {
    Numeric(Vec<f64>),
    Labels(Vec<String>),
}

impl Index {
    pub fn len(&self) -> usize {
        match self {
            Index::Numeric(v) => v.len(),
            Index::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric view of the index, if it has one.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Index::Numeric(v) => Some(v),
            Index::Labels(_) => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// An ordered sequence of rows keyed by an index, with a mapping from series
/// name to values aligned to that index.
///
/// Invariants, checked at construction:
/// - every column has exactly `index.len()` values;
/// - a numeric index is finite and strictly increasing.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub index_name: Option<String>,
    index: Index,
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(index_name: Option<String>, index: Index, columns: Vec<Column>) -> Result<Self> {
        if let Index::Numeric(vals) = &index {
            let ordered = vals.windows(2).all(|w| w[0] < w[1]);
            if !ordered || vals.iter().any(|v| !v.is_finite()) {
                return Err(Error::BadIndex);
            }
        }
        let want = index.len();
        for col in &columns {
            if col.values.len() != want {
                return Err(Error::LengthMismatch {
                    name: col.name.clone(),
                    got: col.values.len(),
                    want,
                });
            }
        }
        Ok(Self { index_name, index, columns })
    }

    /// Convenience constructor for a numeric index.
    pub fn from_numeric(
        index_name: impl Into<String>,
        index: Vec<f64>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self> {
        Self::new(
            Some(index_name.into()),
            Index::Numeric(index),
            columns
                .into_iter()
                .map(|(name, values)| Column { name, values })
                .collect(),
        )
    }

    /// Convenience constructor for a categorical index.
    pub fn from_labels(
        index_name: impl Into<String>,
        index: Vec<String>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self> {
        Self::new(
            Some(index_name.into()),
            Index::Labels(index),
            columns
                .into_iter()
                .map(|(name, values)| Column { name, values })
                .collect(),
        )
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.columns.is_empty()
    }

    /// (min, max) over the numeric index.
    pub fn index_range(&self) -> Option<(f64, f64)> {
        let vals = self.index.as_numeric()?;
        match (vals.first(), vals.last()) {
            (Some(&lo), Some(&hi)) => Some((lo, hi)),
            _ => None,
        }
    }

    /// Largest single value across all columns.
    pub fn value_max(&self) -> f64 {
        self.columns
            .iter()
            .flat_map(|c| c.values.iter().copied())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest single value across all columns.
    pub fn value_min(&self) -> f64 {
        self.columns
            .iter()
            .flat_map(|c| c.values.iter().copied())
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest cumulative sum across rows, for stacked kinds.
    pub fn stacked_max(&self) -> f64 {
        (0..self.len())
            .map(|row| self.columns.iter().map(|c| c.values[row]).sum::<f64>())
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_misaligned_columns() {
        let err = Dataset::from_numeric(
            "year",
            vec![1.0, 2.0, 3.0],
            vec![("a".into(), vec![1.0, 2.0])],
        )
        .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }

    #[test]
    fn rejects_unordered_index() {
        let err = Dataset::from_numeric(
            "year",
            vec![2.0, 1.0],
            vec![("a".into(), vec![1.0, 2.0])],
        )
        .unwrap_err();
        assert!(matches!(err, Error::BadIndex));
    }

    #[test]
    fn stacked_max_sums_rows() {
        let data = Dataset::from_numeric(
            "year",
            vec![1.0, 2.0],
            vec![
                ("a".into(), vec![1.0, 2.0]),
                ("b".into(), vec![3.0, 1.0]),
            ],
        )
        .unwrap();
        assert_eq!(data.stacked_max(), 4.0);
    }
}
