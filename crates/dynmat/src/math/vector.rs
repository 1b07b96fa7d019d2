use std::fmt;
use std::io::{BufRead, Write};
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};
use std::str::FromStr;

use num_traits::NumCast;

use crate::error::{LinalgError, Result};
use crate::io::TokenReader;
use crate::limits::Limits;
use crate::scalar::Scalar;

/// Fixed-length vector over an exclusively owned heap buffer.
///
/// The length is chosen at construction, lies in `[1, max_vector_size]`,
/// and only changes through assignment (`clone_from` or a plain move).
#[derive(Debug, PartialEq, Eq)]
pub struct DynamicVector<T> {
    data: Box<[T]>,
}

impl<T: Clone + Default> DynamicVector<T> {
    /// Allocates `size` default-valued elements.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_limits(size, &Limits::default())
    }

    pub fn with_limits(size: usize, limits: &Limits) -> Result<Self> {
        limits.check_vector_size(size)?;
        Ok(Self::from_boxed(vec![T::default(); size].into_boxed_slice()))
    }
}

impl<T: Clone> DynamicVector<T> {
    /// Copies the first `len` elements of `buffer`.
    ///
    /// A missing buffer, or one shorter than `len`, is a caller error and is
    /// reported as `InvalidArgument`.
    pub fn from_raw(buffer: Option<&[T]>, len: usize) -> Result<Self> {
        let buffer = buffer.ok_or_else(|| {
            LinalgError::InvalidArgument("vector construction requires a source buffer".to_string())
        })?;
        if buffer.len() < len {
            return Err(LinalgError::InvalidArgument(format!(
                "source buffer holds {} elements but {} were requested",
                buffer.len(),
                len
            )));
        }
        Limits::default().check_vector_size(len)?;
        Ok(Self::from_boxed(buffer[..len].into()))
    }

    pub fn from_slice(values: &[T]) -> Result<Self> {
        Self::from_raw(Some(values), values.len())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }
}

impl<T> DynamicVector<T> {
    /// Wraps an already validated buffer.
    pub(crate) fn from_boxed(data: Box<[T]>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Bounds-checked read access.
    pub fn at(&self, index: usize) -> Result<&T> {
        let size = self.size();
        self.data
            .get(index)
            .ok_or(LinalgError::OutOfRange { index, size })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.size();
        self.data
            .get_mut(index)
            .ok_or(LinalgError::OutOfRange { index, size })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Exchanges buffers with `other` without copying any element.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Moves the buffer out, leaving a default single-element vector behind.
    pub fn take(&mut self) -> Self
    where
        T: Default,
    {
        std::mem::take(self)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    pub fn mapv<U, F>(&self, f: F) -> DynamicVector<U>
    where
        F: FnMut(&T) -> U,
    {
        DynamicVector::from_boxed(self.data.iter().map(f).collect())
    }

    pub(crate) fn check_same_size<U>(&self, other: &DynamicVector<U>) -> Result<()> {
        if self.size() != other.size() {
            log::trace!(
                "operand size mismatch: {} vs {}",
                self.size(),
                other.size()
            );
            return Err(LinalgError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }
}

impl<T: Scalar> DynamicVector<T> {
    pub fn add_scalar(&self, rhs: T) -> Self {
        self.mapv(|v| v.clone() + rhs.clone())
    }

    pub fn sub_scalar(&self, rhs: T) -> Self {
        self.mapv(|v| v.clone() - rhs.clone())
    }

    pub fn mul_scalar(&self, rhs: T) -> Self {
        self.mapv(|v| v.clone() * rhs.clone())
    }

    /// Subtracts a wide operand, computing in `f64` and narrowing back.
    ///
    /// Integer elements are truncated toward zero. Fails with `NumericCast`
    /// if any result does not fit `T`.
    pub fn sub_wide(&self, rhs: f64) -> Result<Self> {
        self.try_map_wide(|v| v - rhs)
    }

    /// Multiplies by a wide operand; same narrowing rules as `sub_wide`.
    pub fn mul_wide(&self, rhs: f64) -> Result<Self> {
        self.try_map_wide(|v| v * rhs)
    }

    fn try_map_wide<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(f64) -> f64,
    {
        let data = self
            .data
            .iter()
            .map(|v| {
                let wide = f(v.to_f64().ok_or(LinalgError::NumericCast)?);
                let narrowed = <T as NumCast>::from(wide).ok_or(LinalgError::NumericCast)?;
                // Float narrowing saturates to infinity instead of failing.
                if wide.is_finite() && !narrowed.to_f64().map_or(false, f64::is_finite) {
                    return Err(LinalgError::NumericCast);
                }
                Ok(narrowed)
            })
            .collect::<Result<Box<[T]>>>()?;
        Ok(Self::from_boxed(data))
    }

    pub fn add_vector(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    pub fn sub_vector(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    /// Sum of pairwise products, accumulated left to right from zero.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_same_size(other)?;
        let mut acc = T::zero();
        for (a, b) in self.iter().zip(other.iter()) {
            acc = acc + a.clone() * b.clone();
        }
        Ok(acc)
    }

    fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Self>
    where
        F: FnMut(&T, &T) -> T,
    {
        self.check_same_size(other)?;
        Ok(Self::from_boxed(
            self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
        ))
    }
}

impl<T: FromStr> DynamicVector<T> {
    /// Replaces every element with the next `size()` tokens from `reader`.
    ///
    /// Nothing is written back unless all tokens parse.
    pub fn read_from<R: BufRead>(&mut self, reader: &mut TokenReader<R>) -> Result<()> {
        let size = self.size();
        self.data = Self::parse_values(reader, size, size, 0)?;
        Ok(())
    }

    /// Parses `count` tokens; `expected` and `offset` place them within a
    /// larger read for error reporting.
    pub(crate) fn parse_values<R: BufRead>(
        reader: &mut TokenReader<R>,
        count: usize,
        expected: usize,
        offset: usize,
    ) -> Result<Box<[T]>> {
        let mut values = Vec::with_capacity(count);
        for read in 0..count {
            values.push(reader.parse_next(expected, offset + read)?);
        }
        Ok(values.into_boxed_slice())
    }
}

impl<T: fmt::Display> DynamicVector<T> {
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", self)?;
        Ok(())
    }
}

impl<T: Clone> Clone for DynamicVector<T> {
    fn clone(&self) -> Self {
        Self::from_boxed(self.data.clone())
    }

    /// Copy-assignment: reuses the buffer when sizes agree, otherwise the
    /// new buffer is fully built before the old one is released.
    fn clone_from(&mut self, source: &Self) {
        if self.size() == source.size() {
            self.data.clone_from_slice(&source.data);
        } else {
            self.data = source.data.clone();
        }
    }
}

impl<T: Default> Default for DynamicVector<T> {
    fn default() -> Self {
        Self::from_boxed(Box::new([T::default()]))
    }
}

impl<T> TryFrom<Vec<T>> for DynamicVector<T> {
    type Error = LinalgError;

    fn try_from(value: Vec<T>) -> Result<Self> {
        Limits::default().check_vector_size(value.len())?;
        Ok(Self::from_boxed(value.into_boxed_slice()))
    }
}

impl<T> From<DynamicVector<T>> for Vec<T> {
    fn from(value: DynamicVector<T>) -> Self {
        value.into_vec()
    }
}

impl<'a, T> IntoIterator for &'a DynamicVector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Unchecked fast path: no `OutOfRange` error, an invalid index panics.
impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<'a, T: Scalar> Add<T> for &'a DynamicVector<T> {
    type Output = DynamicVector<T>;

    fn add(self, rhs: T) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl<'a, T: Scalar> Sub<T> for &'a DynamicVector<T> {
    type Output = DynamicVector<T>;

    fn sub(self, rhs: T) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl<'a, T: Scalar> Mul<T> for &'a DynamicVector<T> {
    type Output = DynamicVector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl<'a, 'b, T: Scalar> Add<&'b DynamicVector<T>> for &'a DynamicVector<T> {
    type Output = Result<DynamicVector<T>>;

    fn add(self, rhs: &'b DynamicVector<T>) -> Self::Output {
        self.add_vector(rhs)
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b DynamicVector<T>> for &'a DynamicVector<T> {
    type Output = Result<DynamicVector<T>>;

    fn sub(self, rhs: &'b DynamicVector<T>) -> Self::Output {
        self.sub_vector(rhs)
    }
}

/// Dot product.
impl<'a, 'b, T: Scalar> Mul<&'b DynamicVector<T>> for &'a DynamicVector<T> {
    type Output = Result<T>;

    fn mul(self, rhs: &'b DynamicVector<T>) -> Self::Output {
        self.dot(rhs)
    }
}

/// Writes every element followed by a single space, with no newline.
impl<T: fmt::Display> fmt::Display for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.data.iter() {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}
