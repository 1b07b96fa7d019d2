//! Container files: a size token followed by the elements in the container
//! text format, e.g. `2\n1 0\n0 1\n` for the 2x2 identity.
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use dynmat::{DynamicMatrix, DynamicVector, LinalgError, Limits, TokenReader};

fn open<P: AsRef<Path>>(path: P) -> Result<TokenReader<BufReader<File>>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open input: {}", path.as_ref().display()))?;
    Ok(TokenReader::new(BufReader::new(file)))
}

/// Reads the leading size token. A zero or negative size is an invalid size
/// against `max`, not a malformed token.
fn read_size<R: BufRead>(reader: &mut TokenReader<R>, max: usize) -> Result<usize> {
    let size = reader
        .parse_next::<i64>(1, 0)
        .context("Expected a leading size token")?;
    if size < 1 {
        return Err(LinalgError::InvalidSize { requested: 0, max })
            .with_context(|| format!("Size token {} is not positive", size));
    }
    Ok(usize::try_from(size).unwrap_or(usize::MAX))
}

pub fn read_vector<R: BufRead>(
    reader: &mut TokenReader<R>,
    limits: &Limits,
) -> Result<DynamicVector<f64>> {
    let size = read_size(reader, limits.max_vector_size)?;
    let mut v = DynamicVector::with_limits(size, limits)?;
    v.read_from(reader)?;
    Ok(v)
}

pub fn read_matrix<R: BufRead>(
    reader: &mut TokenReader<R>,
    limits: &Limits,
) -> Result<DynamicMatrix<f64>> {
    let size = read_size(reader, limits.max_matrix_size)?;
    let mut m = DynamicMatrix::with_limits(size, limits)?;
    m.read_from(reader)?;
    Ok(m)
}

pub fn read_vector_file<P: AsRef<Path>>(path: P, limits: &Limits) -> Result<DynamicVector<f64>> {
    let v = read_vector(&mut open(&path)?, limits)
        .with_context(|| format!("Failed to read vector from {}", path.as_ref().display()))?;
    log::info!("read vector of size {} from {}", v.size(), path.as_ref().display());
    Ok(v)
}

pub fn read_matrix_file<P: AsRef<Path>>(path: P, limits: &Limits) -> Result<DynamicMatrix<f64>> {
    let m = read_matrix(&mut open(&path)?, limits)
        .with_context(|| format!("Failed to read matrix from {}", path.as_ref().display()))?;
    log::info!("read {0}x{0} matrix from {1}", m.size(), path.as_ref().display());
    Ok(m)
}
