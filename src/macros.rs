/// Builds a [`Matrix`](crate::Matrix) from rows written in reading order.
///
/// ```
/// use tempexpr::{mat, View};
/// let m = mat![[1.0, 2.0], [3.0, 4.0]];
/// assert_eq!(m.get(1, 0), 3.0);
/// ```
#[macro_export]
macro_rules! mat {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::Matrix::from(vec![$([$($x,)*],)*])
    }};
}
