use std::marker::PhantomData;

use num_traits::Float;

use crate::View;

/// Borrows a flat buffer as an `n x 1` column without copying it.
///
/// The borrow ties every expression built on top of this view to the
/// buffer's lifetime.
#[derive(Clone, Copy, Debug)]
pub struct ColumnView<'a, A> {
    data: &'a [A],
}

impl<'a, A: Float> ColumnView<'a, A> {
    pub fn new(data: &'a [A]) -> Self {
        Self { data }
    }
}

impl<A: Float> View for ColumnView<'_, A> {
    type Elem = A;

    fn rows(&self) -> usize {
        self.data.len()
    }

    fn cols(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, i: usize, _j: usize) -> A {
        self.data[i]
    }
}

/// Constant view of ones; carries only its shape.
#[derive(Clone, Copy, Debug)]
pub struct Ones<A> {
    rows: usize,
    cols: usize,
    _elem: PhantomData<A>,
}

impl<A: Float> Ones<A> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            _elem: PhantomData,
        }
    }
}

impl<A: Float> View for Ones<A> {
    type Elem = A;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, _i: usize, _j: usize) -> A {
        A::one()
    }
}
