use std::fmt;
use std::io::{BufRead, Write};
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::Iter;
use std::str::FromStr;

use num_traits::One;

use crate::error::{LinalgError, Result};
use crate::io::TokenReader;
use crate::limits::Limits;
use crate::math::vector::DynamicVector;
use crate::scalar::Scalar;

/// Square matrix stored as a vector of row vectors.
///
/// A matrix of dimension `n` owns `n` rows of exactly `n` elements each.
/// Rows are only handed out mutably as slices so that their length cannot
/// drift from the dimension.
#[derive(Debug, PartialEq, Eq)]
pub struct DynamicMatrix<T> {
    rows: DynamicVector<DynamicVector<T>>,
}

impl<T: Clone + Default> DynamicMatrix<T> {
    /// Allocates a `size` x `size` matrix of default values.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_limits(size, &Limits::default())
    }

    pub fn with_limits(size: usize, limits: &Limits) -> Result<Self> {
        limits.check_matrix_size(size)?;
        // Every row is a vector of `size` elements.
        limits.check_vector_size(size)?;
        log::debug!("allocating {}x{} matrix", size, size);
        Ok(Self::filled(size, T::default()))
    }
}

impl<T: Clone> DynamicMatrix<T> {
    /// Builds a matrix from row-major nested rows.
    ///
    /// The row count must be a valid matrix size and every row must have
    /// exactly that many elements.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = rows.len();
        Limits::default().check_matrix_size(size)?;
        let mut built = Vec::with_capacity(size);
        for row in rows {
            if row.len() != size {
                return Err(LinalgError::SizeMismatch {
                    left: size,
                    right: row.len(),
                });
            }
            built.push(DynamicVector::from_boxed(row.into_boxed_slice()));
        }
        Ok(Self {
            rows: DynamicVector::from_boxed(built.into_boxed_slice()),
        })
    }

    fn filled(size: usize, value: T) -> Self {
        let rows: Vec<DynamicVector<T>> = (0..size)
            .map(|_| DynamicVector::from_boxed(vec![value.clone(); size].into_boxed_slice()))
            .collect();
        Self {
            rows: DynamicVector::from_boxed(rows.into_boxed_slice()),
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }
}

impl<T> DynamicMatrix<T> {
    /// Row and column count.
    pub fn size(&self) -> usize {
        self.rows.size()
    }

    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.check_index(row, col)?;
        Ok(&self.rows[row][col])
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_index(row, col)?;
        Ok(&mut self.rows[row][col])
    }

    pub fn row(&self, row: usize) -> Result<&DynamicVector<T>> {
        self.rows.at(row)
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T]> {
        Ok(self.rows.at_mut(row)?.as_mut_slice())
    }

    pub fn rows(&self) -> Iter<'_, DynamicVector<T>> {
        self.rows.iter()
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.rows.swap(&mut other.rows);
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        let size = self.size();
        for index in [row, col] {
            if index >= size {
                return Err(LinalgError::OutOfRange { index, size });
            }
        }
        Ok(())
    }

    fn check_same_size(&self, other: &Self) -> Result<()> {
        self.rows.check_same_size(&other.rows)
    }

    fn map_rows<F>(&self, f: F) -> Self
    where
        F: FnMut(&DynamicVector<T>) -> DynamicVector<T>,
    {
        Self {
            rows: self.rows.mapv(f),
        }
    }
}

impl<T: Scalar + One> DynamicMatrix<T> {
    pub fn identity(size: usize) -> Result<Self> {
        let mut m = Self::new(size)?;
        for i in 0..size {
            m.rows[i][i] = T::one();
        }
        Ok(m)
    }
}

impl<T: Scalar> DynamicMatrix<T> {
    pub fn add_scalar(&self, rhs: T) -> Self {
        self.map_rows(|row| row.add_scalar(rhs.clone()))
    }

    pub fn sub_scalar(&self, rhs: T) -> Self {
        self.map_rows(|row| row.sub_scalar(rhs.clone()))
    }

    pub fn mul_scalar(&self, rhs: T) -> Self {
        self.map_rows(|row| row.mul_scalar(rhs.clone()))
    }

    /// Matrix-vector product: output `i` is the dot product of row `i`
    /// with `v`.
    pub fn mul_vector(&self, v: &DynamicVector<T>) -> Result<DynamicVector<T>> {
        self.rows.check_same_size(v)?;
        let values = self
            .rows
            .iter()
            .map(|row| row.dot(v))
            .collect::<Result<Box<[T]>>>()?;
        Ok(DynamicVector::from_boxed(values))
    }

    pub fn add_matrix(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, |a, b| a.add_vector(b))
    }

    pub fn sub_matrix(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, |a, b| a.sub_vector(b))
    }

    /// Triple-loop product. Each output element starts at zero and
    /// accumulates `self[i][k] * other[k][j]` for ascending `k`.
    pub fn mul_matrix(&self, other: &Self) -> Result<Self> {
        self.check_same_size(other)?;
        let n = self.size();
        log::debug!("multiplying {}x{} matrices", n, n);
        let mut result = Self::filled(n, T::zero());
        for i in 0..n {
            let lhs = &self.rows[i];
            let out = &mut result.rows[i];
            for k in 0..n {
                let a = &lhs[k];
                let rhs = &other.rows[k];
                for j in 0..n {
                    out[j] = out[j].clone() + a.clone() * rhs[j].clone();
                }
            }
        }
        Ok(result)
    }

    fn zip_rows<F>(&self, other: &Self, mut f: F) -> Result<Self>
    where
        F: FnMut(&DynamicVector<T>, &DynamicVector<T>) -> Result<DynamicVector<T>>,
    {
        self.check_same_size(other)?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Box<[DynamicVector<T>]>>>()?;
        Ok(Self {
            rows: DynamicVector::from_boxed(rows),
        })
    }
}

impl<T: FromStr> DynamicMatrix<T> {
    /// Reads `size()` rows of `size()` tokens each, row by row.
    ///
    /// The matrix is left untouched if any token is missing or malformed.
    pub fn read_from<R: BufRead>(&mut self, reader: &mut TokenReader<R>) -> Result<()> {
        let n = self.size();
        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let values = DynamicVector::<T>::parse_values(reader, n, n * n, i * n)?;
            rows.push(DynamicVector::from_boxed(values));
        }
        self.rows = DynamicVector::from_boxed(rows.into_boxed_slice());
        Ok(())
    }
}

impl<T: fmt::Display> DynamicMatrix<T> {
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", self)?;
        Ok(())
    }
}

impl<T: Clone> Clone for DynamicMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T: Clone + Default> Default for DynamicMatrix<T> {
    fn default() -> Self {
        Self::filled(1, T::default())
    }
}

/// Unchecked row access.
impl<T> Index<usize> for DynamicMatrix<T> {
    type Output = DynamicVector<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

/// Unchecked element access by `(row, col)`.
impl<T> Index<(usize, usize)> for DynamicMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for DynamicMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.rows[index.0][index.1]
    }
}

impl<'a, T: Scalar> Add<T> for &'a DynamicMatrix<T> {
    type Output = DynamicMatrix<T>;

    fn add(self, rhs: T) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl<'a, T: Scalar> Sub<T> for &'a DynamicMatrix<T> {
    type Output = DynamicMatrix<T>;

    fn sub(self, rhs: T) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl<'a, T: Scalar> Mul<T> for &'a DynamicMatrix<T> {
    type Output = DynamicMatrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl<'a, 'b, T: Scalar> Mul<&'b DynamicVector<T>> for &'a DynamicMatrix<T> {
    type Output = Result<DynamicVector<T>>;

    fn mul(self, rhs: &'b DynamicVector<T>) -> Self::Output {
        self.mul_vector(rhs)
    }
}

impl<'a, 'b, T: Scalar> Add<&'b DynamicMatrix<T>> for &'a DynamicMatrix<T> {
    type Output = Result<DynamicMatrix<T>>;

    fn add(self, rhs: &'b DynamicMatrix<T>) -> Self::Output {
        self.add_matrix(rhs)
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b DynamicMatrix<T>> for &'a DynamicMatrix<T> {
    type Output = Result<DynamicMatrix<T>>;

    fn sub(self, rhs: &'b DynamicMatrix<T>) -> Self::Output {
        self.sub_matrix(rhs)
    }
}

impl<'a, 'b, T: Scalar> Mul<&'b DynamicMatrix<T>> for &'a DynamicMatrix<T> {
    type Output = Result<DynamicMatrix<T>>;

    fn mul(self, rhs: &'b DynamicMatrix<T>) -> Self::Output {
        self.mul_matrix(rhs)
    }
}

/// One row per line, each in the vector text format.
impl<T: fmt::Display> fmt::Display for DynamicMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
