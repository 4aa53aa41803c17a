use std::fmt;
use std::sync::Arc;

use num_traits::Float;

use crate::error::{GResult, ShapeErrorKind};
use crate::shape::Shape;
use crate::View;

/// Dense column-major matrix, the only type in the crate that owns storage.
///
/// The buffer is reference counted: cloning a `Matrix` shares it, and the
/// length is fixed at `rows * cols` for the matrix's whole life. Writing to a
/// shared buffer through [`Matrix::set`] detaches this handle first, so other
/// holders never see the change.
#[derive(Clone)]
pub struct Matrix<A> {
    dim: Shape,
    storage: Arc<Vec<A>>,
}

impl<A: Float> Matrix<A> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(A::zero(), rows, cols)
    }

    pub fn from_elem(s: A, rows: usize, cols: usize) -> Self {
        let dim = Shape::new(rows, cols);
        Self {
            storage: Arc::new(vec![s; dim.elem_count()]),
            dim,
        }
    }

    /// Wraps a column-major buffer.
    pub fn from_vec(rows: usize, cols: usize, v: Vec<A>) -> GResult<Self> {
        let dim = Shape::new(rows, cols);
        if v.len() != dim.elem_count() {
            return Err(ShapeErrorKind::BufferLength {
                expected: dim.elem_count(),
                actual: v.len(),
            }
            .into());
        }
        Ok(Self {
            dim,
            storage: Arc::new(v),
        })
    }

    /// Builds a matrix by evaluating `f` once per cell, column by column.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> A,
    {
        let dim = Shape::new(rows, cols);
        let mut v = Vec::with_capacity(dim.elem_count());
        for j in 0..cols {
            for i in 0..rows {
                v.push(f(i, j));
            }
        }
        Self {
            dim,
            storage: Arc::new(v),
        }
    }

    pub fn set(&mut self, i: usize, j: usize, value: A) {
        debug_assert!(i < self.dim.rows && j < self.dim.cols);
        let idx = self.dim.index(i, j);
        Arc::make_mut(&mut self.storage)[idx] = value;
    }

    pub fn dim(&self) -> Shape {
        self.dim
    }

    /// Column-major view of the buffer.
    pub fn as_slice(&self) -> &[A] {
        self.storage.as_slice()
    }

    pub fn to_rows(&self) -> Vec<Vec<A>> {
        (0..self.dim.rows)
            .map(|i| (0..self.dim.cols).map(|j| self.get(i, j)).collect())
            .collect()
    }

    pub fn shares_storage(&self, other: &Matrix<A>) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }
}

impl<A: Float> View for Matrix<A> {
    type Elem = A;

    fn rows(&self) -> usize {
        self.dim.rows
    }

    fn cols(&self) -> usize {
        self.dim.cols
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> A {
        debug_assert!(i < self.dim.rows && j < self.dim.cols);
        self.storage[self.dim.index(i, j)]
    }
}

// rows given in reading order
impl<A: Float, const N: usize> From<Vec<[A; N]>> for Matrix<A> {
    fn from(xs: Vec<[A; N]>) -> Self {
        let rows = xs.len();
        Matrix::from_fn(rows, N, |i, j| xs[i][j])
    }
}

impl<A: Float + fmt::Debug> fmt::Debug for Matrix<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for i in 0..self.dim.rows {
            if i > 0 {
                f.write_str(",\n ")?;
            }
            f.write_str("[")?;
            for j in 0..self.dim.cols {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:?}", self.get(i, j))?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
