use crate::error::NeuraliteError;
use crate::tensor::utils::{ensure_len, ensure_shape};
use crate::tensor::Vector;
use std::ops::Index;

/// A rectangular matrix stored as a sequence of [`Vector`] rows.
///
/// Every row has exactly `cols` elements. The column count is kept explicitly
/// so that a matrix without rows (e.g. an empty dataset) still has a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vector>,
    cols: usize,
}

impl Matrix {
    /// Builds a matrix from typed rows, rejecting ragged input.
    ///
    /// The column count is taken from the first row; an empty `rows` yields a
    /// `(0, 0)` matrix.
    pub fn from_rows(rows: Vec<Vector>) -> Result<Self, NeuraliteError> {
        let cols = rows.first().map_or(0, Vector::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(NeuraliteError::ShapeMismatch {
                    expected: vec![i, cols],
                    actual: vec![i, row.len()],
                    operation: "Matrix::from_rows (ragged row)".to_string(),
                });
            }
        }
        Ok(Matrix { rows, cols })
    }

    /// Builds a matrix from nested `Vec`s, rejecting ragged input.
    pub fn from_vecs(rows: Vec<Vec<f64>>) -> Result<Self, NeuraliteError> {
        Self::from_rows(rows.into_iter().map(Vector::new).collect())
    }

    /// Caller guarantees every row has `cols` elements.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vector>, cols: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == cols));
        Matrix { rows, cols }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows: vec![Vector::zeros(cols); rows],
            cols,
        }
    }

    /// `(row_count, column_count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Vector> {
        self.rows.get(index)
    }

    /// Copies column `index` out of every row.
    pub fn column(&self, index: usize) -> Option<Vector> {
        if index >= self.cols {
            return None;
        }
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Nested `Vec` copy, row-major.
    pub fn to_vecs(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|r| r.as_slice().to_vec()).collect()
    }

    /// Mutable rows for the owning layer's in-place parameter update.
    pub(crate) fn rows_mut(&mut self) -> &mut [Vector] {
        &mut self.rows
    }

    /// Combines two equal-shape matrices element by element.
    pub fn zip_with<F>(&self, other: &Matrix, operation: &str, f: F) -> Result<Matrix, NeuraliteError>
    where
        F: Fn(f64, f64) -> f64,
    {
        ensure_shape(self.shape(), other.shape(), operation)?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.zip_with(b, operation, &f))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_rows_unchecked(rows, self.cols))
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, NeuraliteError> {
        self.zip_with(other, "Matrix::add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, NeuraliteError> {
        self.zip_with(other, "Matrix::subtract", |a, b| a - b)
    }

    pub fn elementwise_multiply(&self, other: &Matrix) -> Result<Matrix, NeuraliteError> {
        self.zip_with(other, "Matrix::elementwise_multiply", |a, b| a * b)
    }

    pub fn scalar_multiply(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        let rows = self.rows.iter().map(|row| row.map(&f)).collect();
        Matrix::from_rows_unchecked(rows, self.cols)
    }

    /// Matrix-vector product; element `i` is `dot(row_i, v)`.
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector, NeuraliteError> {
        ensure_len(self.cols, v.len(), "Matrix::mul_vector")?;
        self.rows.iter().map(|row| row.dot(v)).collect()
    }

    /// Matrix-matrix product `self (m x k) * other (k x n) -> (m x n)`.
    ///
    /// Entry `(i, j)` is the dot product of row `i` of `self` with column `j`
    /// of `other`, the column being read by indexing every row of `other` at
    /// `j`. Accumulation runs left to right from `0.0`.
    pub fn mul_matrix(&self, other: &Matrix) -> Result<Matrix, NeuraliteError> {
        if self.cols != other.row_count() {
            return Err(NeuraliteError::ShapeMismatch {
                expected: vec![self.cols, other.cols],
                actual: vec![other.row_count(), other.cols],
                operation: "Matrix::mul_matrix".to_string(),
            });
        }
        let n = other.cols;
        let rows = self
            .rows
            .iter()
            .map(|a_row| {
                (0..n)
                    .map(|j| {
                        a_row
                            .iter()
                            .zip(other.rows.iter())
                            .fold(0.0, |acc, (&a, b_row)| acc + a * b_row[j])
                    })
                    .collect::<Vector>()
            })
            .collect();
        Ok(Matrix::from_rows_unchecked(rows, n))
    }

    /// Swaps rows and columns. Involutive on any rectangular matrix.
    pub fn transpose(&self) -> Matrix {
        let rows = (0..self.cols)
            .map(|j| self.rows.iter().map(|row| row[j]).collect::<Vector>())
            .collect();
        Matrix::from_rows_unchecked(rows, self.rows.len())
    }
}

impl Index<usize> for Matrix {
    type Output = Vector;

    fn index(&self, index: usize) -> &Vector {
        &self.rows[index]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.rows[row][col]
    }
}
