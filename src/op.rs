use num_traits::Zero;

use crate::error::{GResult, ShapeErrorKind};
use crate::shape::Shape;
use crate::View;

#[inline]
fn is_same_shape(a: Shape, b: Shape) -> bool {
    a == b
}

/// Reads a column as a `rows x (len / rows)` matrix, filling column by column.
#[derive(Clone, Debug)]
pub struct Reshape<T> {
    rows: usize,
    cols: usize,
    src: T,
}

impl<T: View> Reshape<T> {
    pub fn new(src: T, rows: usize) -> GResult<Self> {
        if !src.shape().is_column() {
            return Err(ShapeErrorKind::NotColumn(src.shape()).into());
        }
        let len = src.rows();
        if rows == 0 || len % rows != 0 {
            return Err(ShapeErrorKind::Indivisible { len, rows }.into());
        }
        Ok(Self {
            rows,
            cols: len / rows,
            src,
        })
    }
}

impl<T: View> View for Reshape<T> {
    type Elem = T::Elem;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> T::Elem {
        self.src.get(i + j * self.rows, 0)
    }
}

#[derive(Clone, Debug)]
pub struct Transpose<T> {
    src: T,
}

impl<T: View> Transpose<T> {
    pub fn new(src: T) -> Self {
        Self { src }
    }
}

impl<T: View> View for Transpose<T> {
    type Elem = T::Elem;

    fn rows(&self) -> usize {
        self.src.cols()
    }

    fn cols(&self) -> usize {
        self.src.rows()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> T::Elem {
        self.src.get(j, i)
    }
}

/// Elementwise `a - b`.
#[derive(Clone, Debug)]
pub struct Subtract<A, B> {
    a: A,
    b: B,
}

impl<A, B> Subtract<A, B>
where
    A: View,
    B: View<Elem = A::Elem>,
{
    pub fn new(a: A, b: B) -> GResult<Self> {
        if !is_same_shape(a.shape(), b.shape()) {
            return Err(ShapeErrorKind::IncompatibleShape {
                op: "sub",
                lhs: a.shape(),
                rhs: b.shape(),
            }
            .into());
        }
        Ok(Self { a, b })
    }
}

impl<A, B> View for Subtract<A, B>
where
    A: View,
    B: View<Elem = A::Elem>,
{
    type Elem = A::Elem;

    fn rows(&self) -> usize {
        self.a.rows()
    }

    fn cols(&self) -> usize {
        self.a.cols()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> A::Elem {
        self.a.get(i, j) - self.b.get(i, j)
    }
}

/// Matrix product. Each `get` walks the shared inner dimension, so a product
/// that is read more than once should be realized first.
#[derive(Clone, Debug)]
pub struct Product<A, B> {
    a: A,
    b: B,
}

impl<A, B> Product<A, B>
where
    A: View,
    B: View<Elem = A::Elem>,
{
    pub fn new(a: A, b: B) -> GResult<Self> {
        if a.cols() != b.rows() {
            return Err(ShapeErrorKind::IncompatibleShape {
                op: "matmul",
                lhs: a.shape(),
                rhs: b.shape(),
            }
            .into());
        }
        Ok(Self { a, b })
    }
}

impl<A, B> View for Product<A, B>
where
    A: View,
    B: View<Elem = A::Elem>,
{
    type Elem = A::Elem;

    fn rows(&self) -> usize {
        self.a.rows()
    }

    fn cols(&self) -> usize {
        self.b.cols()
    }

    fn get(&self, i: usize, j: usize) -> A::Elem {
        (0..self.a.cols()).fold(<A::Elem as Zero>::zero(), |sum, k| {
            sum + self.a.get(i, k) * self.b.get(k, j)
        })
    }
}

#[derive(Clone)]
pub struct Scale<T: View> {
    s: T::Elem,
    x: T,
}

impl<T: View> Scale<T> {
    pub fn new(s: T::Elem, x: T) -> Self {
        Self { s, x }
    }
}

impl<T: View> View for Scale<T> {
    type Elem = T::Elem;

    fn rows(&self) -> usize {
        self.x.rows()
    }

    fn cols(&self) -> usize {
        self.x.cols()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> T::Elem {
        self.s * self.x.get(i, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mat, ColumnView, GError, Ones};

    #[test]
    fn test_reshape() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x = ColumnView::new(&data).reshape(2).unwrap();
        assert_eq!(x.shape(), Shape::new(2, 3));
        // column j holds sample j
        assert_eq!(x.get(0, 1), 3.0);
        assert_eq!(x.get(1, 1), 4.0);
        assert_eq!(x.get(1, 2), 6.0);
    }

    #[test]
    fn test_reshape_rejects_bad_rows() {
        let data = [1.0f32, 2.0, 3.0];
        let err = ColumnView::new(&data).reshape(2).unwrap_err();
        assert!(matches!(
            err,
            GError::ShapeError(ShapeErrorKind::Indivisible { len: 3, rows: 2 })
        ));
        assert!(ColumnView::new(&data).reshape(0).is_err());

        let m = mat![[1.0, 2.0], [3.0, 4.0]];
        assert!(matches!(
            m.reshape(1),
            Err(GError::ShapeError(ShapeErrorKind::NotColumn(_)))
        ));
    }

    #[test]
    fn test_transpose() {
        let m = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let t = (&m).t();
        assert_eq!(t.shape(), Shape::new(3, 2));
        assert_eq!(t.get(2, 0), 3.0);
        assert_eq!(t.get(0, 1), 4.0);
    }

    #[test]
    fn test_sub() {
        let a = mat![[5.0, 6.0], [7.0, 8.0]];
        let b = mat![[1.0, 2.0], [3.0, 4.0]];
        let d = a.sub(b).unwrap().realize();
        assert_eq!(d.to_rows(), vec![vec![4.0, 4.0], vec![4.0, 4.0]]);
    }

    #[test]
    fn test_sub_shape_mismatch() {
        let a = Ones::<f64>::new(2, 3);
        let b = Ones::<f64>::new(3, 2);
        match a.sub(b) {
            Err(GError::ShapeError(ShapeErrorKind::IncompatibleShape { op, lhs, rhs })) => {
                assert_eq!(op, "sub");
                assert_eq!(lhs, Shape::new(2, 3));
                assert_eq!(rhs, Shape::new(3, 2));
            }
            _ => panic!("expected shape error"),
        }
    }

    #[test]
    fn test_matmul() {
        let a = mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = mat![[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]];
        let p = a.matmul(b).unwrap();
        assert_eq!(p.shape(), Shape::new(2, 2));
        assert_eq!(
            p.realize().to_rows(),
            vec![vec![58.0, 64.0], vec![139.0, 154.0]]
        );
    }

    #[test]
    fn test_matmul_rejects_inner_mismatch() {
        let a = Ones::<f64>::new(2, 3);
        let b = Ones::<f64>::new(2, 3);
        let err = a.matmul(b).unwrap_err();
        assert_eq!(
            err.to_string(),
            "shape error:matmul: operands [2, 3] and [2, 3] have incompatible shapes"
        );
    }

    #[test]
    fn test_ones_row_sums_columns() {
        let m = mat![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let sums = Ones::<f64>::new(1, 3).matmul(&m).unwrap().realize();
        assert_eq!(sums.to_rows(), vec![vec![9.0, 12.0]]);
    }

    #[test]
    fn test_scale() {
        let m = mat![[1.0, -2.0], [3.0, 4.0]];
        let s = (&m).scale(0.5).realize();
        assert_eq!(s.to_rows(), vec![vec![0.5, -1.0], vec![1.5, 2.0]]);
        let z = m.scale(0.0).realize();
        assert!(z.as_slice().iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_matmul_empty_inner() {
        let a = Ones::<f64>::new(2, 0);
        let b = Ones::<f64>::new(0, 3);
        let p = a.matmul(b).unwrap().realize();
        assert_eq!(p.shape(), Shape::new(2, 3));
        assert!(p.as_slice().iter().all(|x| *x == 0.0));
    }
}
