//! Dense square matrix storage.

use crate::error::{NewtonError, Result};

/// Dense n×n matrix of reals, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    /// Matrix entries (row-major)
    data: Vec<f64>,
    /// Matrix dimension
    size: usize,
}

impl DenseMatrix {
    /// Create an n×n zero matrix.
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Create the n×n identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size);
        for i in 0..size {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Build a matrix from a list of rows. All rows must have the same
    /// length as the number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            NewtonError::check_len(&format!("matrix row {i}"), row.len(), size)?;
            data.extend_from_slice(row);
        }
        Ok(Self { data, size })
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    /// Set matrix element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.size + col] = value;
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let n = self.size;
        for j in 0..n {
            self.data.swap(a * n + j, b * n + j);
        }
    }

    /// Compute `A·x`.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>> {
        NewtonError::check_len("vector", x.len(), self.size)?;
        Ok((0..self.size)
            .map(|i| self.row(i).iter().zip(x).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Compute `A·B`.
    pub fn mul(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        NewtonError::check_len("matrix", other.size, self.size)?;
        let n = self.size;
        let mut out = DenseMatrix::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let a = self.get(i, k);
                if a == 0.0 {
                    continue;
                }
                for j in 0..n {
                    out.data[i * n + j] += a * other.get(k, j);
                }
            }
        }
        Ok(out)
    }

    /// Largest absolute entry.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0f64, |m, v| m.max(v.abs()))
    }
}

/// Infinity norm (largest absolute component) of a vector.
///
/// NaN components make the result NaN.
pub fn inf_norm(v: &[f64]) -> f64 {
    v.iter()
        .map(|x| x.abs())
        .fold(0.0f64, |m, a| if a.is_nan() || a > m { a } else { m })
}
