use anyhow::{bail, Result};
use std::path::PathBuf;
use std::str::FromStr;

use dynmat::Limits;

use crate::input::{read_matrix_file, read_vector_file};

/// Operators exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Dot,
    VecAdd,
    VecSub,
    VecScale(f64),
    MatAdd,
    MatSub,
    MatScale(f64),
    MatMul,
    MatVec,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Dot => "dot",
            Operation::VecAdd => "vadd",
            Operation::VecSub => "vsub",
            Operation::VecScale(_) => "vscale",
            Operation::MatAdd => "madd",
            Operation::MatSub => "msub",
            Operation::MatScale(_) => "mscale",
            Operation::MatMul => "matmul",
            Operation::MatVec => "matvec",
        }
    }

    /// Number of input files the operator consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operation::VecScale(_) | Operation::MatScale(_) => 1,
            _ => 2,
        }
    }

    /// Builds an operation from its command name; scaling operations take
    /// `factor`, the others ignore it.
    pub fn from_name(name: &str, factor: Option<f64>) -> Result<Self> {
        let factor = factor.unwrap_or(1.0);
        Ok(match name {
            "vscale" => Operation::VecScale(factor),
            "mscale" => Operation::MatScale(factor),
            other => other.parse()?,
        })
    }
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(Operation::Dot),
            "vadd" => Ok(Operation::VecAdd),
            "vsub" => Ok(Operation::VecSub),
            "madd" => Ok(Operation::MatAdd),
            "msub" => Ok(Operation::MatSub),
            "matmul" => Ok(Operation::MatMul),
            "matvec" => Ok(Operation::MatVec),
            _ => bail!(
                "Unknown operation: {}. Scaling operations need a factor (vscale, mscale).",
                s
            ),
        }
    }
}

/// Run `op` over the given input files and render the result.
pub fn run(op: Operation, inputs: &[PathBuf], limits: &Limits) -> Result<String> {
    if inputs.len() != op.arity() {
        bail!(
            "{} expects {} input file(s), got {}",
            op.name(),
            op.arity(),
            inputs.len()
        );
    }
    log::info!("running {} on {} input(s)", op.name(), inputs.len());

    let rendered = match op {
        Operation::Dot => {
            let a = read_vector_file(&inputs[0], limits)?;
            let b = read_vector_file(&inputs[1], limits)?;
            format!("{}\n", (&a * &b)?)
        }
        Operation::VecAdd => {
            let a = read_vector_file(&inputs[0], limits)?;
            let b = read_vector_file(&inputs[1], limits)?;
            format!("{}\n", (&a + &b)?)
        }
        Operation::VecSub => {
            let a = read_vector_file(&inputs[0], limits)?;
            let b = read_vector_file(&inputs[1], limits)?;
            format!("{}\n", (&a - &b)?)
        }
        Operation::VecScale(factor) => {
            let a = read_vector_file(&inputs[0], limits)?;
            format!("{}\n", &a * factor)
        }
        Operation::MatAdd => {
            let a = read_matrix_file(&inputs[0], limits)?;
            let b = read_matrix_file(&inputs[1], limits)?;
            (&a + &b)?.to_string()
        }
        Operation::MatSub => {
            let a = read_matrix_file(&inputs[0], limits)?;
            let b = read_matrix_file(&inputs[1], limits)?;
            (&a - &b)?.to_string()
        }
        Operation::MatScale(factor) => {
            let a = read_matrix_file(&inputs[0], limits)?;
            (&a * factor).to_string()
        }
        Operation::MatMul => {
            let a = read_matrix_file(&inputs[0], limits)?;
            let b = read_matrix_file(&inputs[1], limits)?;
            (&a * &b)?.to_string()
        }
        Operation::MatVec => {
            let m = read_matrix_file(&inputs[0], limits)?;
            let v = read_vector_file(&inputs[1], limits)?;
            format!("{}\n", (&m * &v)?)
        }
    };
    Ok(rendered)
}
