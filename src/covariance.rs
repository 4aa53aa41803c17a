use num_traits::Float;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{GError, GResult};
use crate::harness::Setup;
use crate::leaf::{ColumnView, Ones};
use crate::matrix::Matrix;
use crate::View;

/// Input record: `data` holds samples of length `dim` back to back.
#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
    pub dim: usize,
    pub data: Vec<f64>,
}

fn to_elem<A: Float>(n: usize) -> GResult<A> {
    num_traits::cast::<usize, A>(n)
        .ok_or_else(|| GError::Unexpected(format!("{} is not representable", n)))
}

fn sample_count(dim: usize, len: usize) -> GResult<usize> {
    if dim == 0 {
        return Err(GError::InvalidDimension(dim));
    }
    if len % dim != 0 {
        return Err(GError::MisalignedData { len, dim });
    }
    Ok(len / dim)
}

// x is dim x n, one sample per column; result is 1 x dim
fn sample_mean<X: View>(x: X, n: usize) -> GResult<Matrix<X::Elem>> {
    let inv_n = to_elem::<X::Elem>(n)?.recip();
    let sums = Ones::<X::Elem>::new(1, n).matmul(x.t())?;
    Ok(sums.scale(inv_n).realize())
}

/// Mean of the samples in `data` as a `1 x dim` row.
pub fn mean<A: Float>(dim: usize, data: &[A]) -> GResult<Matrix<A>> {
    let n = sample_count(dim, data.len())?;
    if n == 0 {
        return Err(GError::InsufficientSamples(n));
    }
    let x = ColumnView::new(data).reshape(dim)?;
    sample_mean(x, n)
}

/// Unbiased sample covariance (`dim x dim`) of the samples in `data`.
///
/// Only the mean and the final result are materialized; the centered data
/// stays lazy and is evaluated inside the last product.
pub fn covariance_matrix<A: Float>(dim: usize, data: &[A]) -> GResult<Matrix<A>> {
    let n = sample_count(dim, data.len())?;
    if n < 2 {
        return Err(GError::InsufficientSamples(n));
    }
    tracing::debug!(dim, samples = n, "covariance");

    let x = ColumnView::new(data).reshape(dim)?;
    let mu = sample_mean(x.clone(), n)?;
    let mu_repeated = Ones::<A>::new(n, 1).matmul(mu)?.t();
    let xc = x.sub(mu_repeated)?;
    let bessel = to_elem::<A>(n - 1)?.recip();
    let covariance = xc.clone().matmul(xc.t())?.scale(bessel);
    Ok(covariance.realize())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CovarianceSetup;

impl Setup for CovarianceSetup {
    type Problem = Problem;
    type Output = Matrix<f64>;

    fn input(&self, src: &Value) -> GResult<Problem> {
        Ok(Problem::deserialize(src)?)
    }

    fn compute(&self, problem: &Problem) -> GResult<Matrix<f64>> {
        covariance_matrix(problem.dim, &problem.data)
    }

    fn output(&self, out: &Matrix<f64>) -> Value {
        Value::from(out.to_rows())
    }
}
