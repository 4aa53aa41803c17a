//! Lazy matrix expressions.
//!
//! A [`View`] is anything with a shape and an element accessor. Combinators
//! such as [`Transpose`] or [`Product`] wrap their inputs by value and compute
//! elements on demand; nothing is stored until [`realize`] copies a view into
//! a [`Matrix`]. Because every combinator is generic over its inputs, each
//! composed expression is its own concrete type and is evaluated without
//! dynamic dispatch.
mod covariance;
mod error;
mod harness;
mod leaf;
mod macros;
mod matrix;
mod op;
mod shape;

use num_traits::Float;

pub use covariance::{covariance_matrix, mean, CovarianceSetup, Problem};
pub use error::{GError, GResult, ShapeErrorKind};
pub use harness::{perform, Report, Setup};
pub use leaf::{ColumnView, Ones};
pub use matrix::Matrix;
pub use op::{Product, Reshape, Scale, Subtract, Transpose};
pub use shape::{compute_index, Shape};

/// Shape plus a lazy elementwise accessor.
///
/// Implementations must be pure: `get` may be called any number of times and
/// must return the same value each time. Indices outside
/// `[0, rows()) x [0, cols())` are a caller error.
pub trait View {
    type Elem: Float;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn get(&self, i: usize, j: usize) -> Self::Elem;

    fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols())
    }

    fn elem_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Reinterprets a column as `rows` x `len / rows`.
    fn reshape(self, rows: usize) -> GResult<Reshape<Self>>
    where
        Self: Sized,
    {
        Reshape::new(self, rows)
    }

    fn t(self) -> Transpose<Self>
    where
        Self: Sized,
    {
        Transpose::new(self)
    }

    fn sub<B>(self, rhs: B) -> GResult<Subtract<Self, B>>
    where
        Self: Sized,
        B: View<Elem = Self::Elem>,
    {
        Subtract::new(self, rhs)
    }

    fn matmul<B>(self, rhs: B) -> GResult<Product<Self, B>>
    where
        Self: Sized,
        B: View<Elem = Self::Elem>,
    {
        Product::new(self, rhs)
    }

    fn scale(self, s: Self::Elem) -> Scale<Self>
    where
        Self: Sized,
    {
        Scale::new(s, self)
    }

    fn realize(&self) -> Matrix<Self::Elem>
    where
        Self: Sized,
    {
        realize(self)
    }
}

impl<V: View> View for &V {
    type Elem = V::Elem;

    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> V::Elem {
        (**self).get(i, j)
    }
}

/// Evaluates every cell of `view` exactly once into a new [`Matrix`].
pub fn realize<V: View>(view: &V) -> Matrix<V::Elem> {
    let (rows, cols) = (view.rows(), view.cols());
    tracing::trace!(rows, cols, "realize");
    Matrix::from_fn(rows, cols, |i, j| view.get(i, j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat;

    #[test]
    fn test_realize_matches_view() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x = ColumnView::new(&data).reshape(2).unwrap().t();
        let m = realize(&x);
        assert_eq!(m.shape(), x.shape());
        for i in 0..x.rows() {
            for j in 0..x.cols() {
                assert_eq!(m.get(i, j), x.get(i, j));
            }
        }
    }

    #[test]
    fn test_borrowed_view() {
        let m = mat![[1.0, 2.0], [3.0, 4.0]];
        let p = (&m).matmul(&m).unwrap().realize();
        assert_eq!(p.to_rows(), vec![vec![7.0, 10.0], vec![15.0, 22.0]]);
        assert_eq!(m.get(1, 1), 4.0);
    }

    #[test]
    fn test_realize_empty() {
        let m = Ones::<f64>::new(0, 3).realize();
        assert_eq!(m.shape(), Shape::new(0, 3));
        assert!(m.as_slice().is_empty());
    }
}
