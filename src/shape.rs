use std::fmt;

/// Column-major linear offset of cell `(i, j)` in a matrix with `rows` rows.
#[inline(always)]
pub fn compute_index(rows: usize, i: usize, j: usize) -> usize {
    i + rows * j
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn dims2(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn elem_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    pub fn transposed(&self) -> Shape {
        Shape::new(self.cols, self.rows)
    }

    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        compute_index(self.rows, i, j)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}
