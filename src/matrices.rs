use std::ops::Range;

use rand::Rng;

use crate::error::{ConvertError, Result};
use crate::q15;

/// Row-major matrix of parameter values.
#[derive(PartialEq, Debug, Clone)]
pub struct Matrix<T> {
    pub data: Vec<T>,
    pub rows: usize,
    pub cols: usize,
}

impl<T> Matrix<T>
where
    T: Copy + Default,
{
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Matrix<T> {
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Matrix<f64> {
    /// Build from nested rows, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(ConvertError::RaggedRows {
                    expected: n_cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Single-column matrix, used for bias and latent sample vectors.
    pub fn column(data: Vec<f64>) -> Self {
        let rows = data.len();
        Self {
            data,
            rows,
            cols: 1,
        }
    }

    /// Quantize every element to its Q1.15 bit pattern, row-major order.
    pub fn quantize_q15(&self) -> Matrix<u16> {
        Matrix {
            data: self.data.iter().map(|&v| q15::quantize(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn random_square(dimension: usize, range: Range<f64>) -> Self {
        let size = dimension * dimension;
        let mut data = Vec::<f64>::with_capacity(size);

        let mut rng = rand::rng();

        for _ in 0..size {
            data.push(rng.random_range(range.clone()));
        }

        Matrix {
            data,
            rows: dimension,
            cols: dimension,
        }
    }
}

impl Matrix<u16> {
    /// Flattened hex words, one per element, row-major order.
    pub fn hex_lines(&self) -> Vec<String> {
        self.data.iter().map(|&w| q15::format_hex(w)).collect()
    }

    pub fn dequantize(&self) -> Matrix<f64> {
        Matrix {
            data: self.data.iter().map(|&w| q15::dequantize(w)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}
