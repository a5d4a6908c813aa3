#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => (0usize);
    ( $first:tt $($rest:tt)* ) => (1usize + $crate::__count!($($rest)*));
}

/// Builds a [`Grid`](crate::Grid) from row literals.
///
/// ```
/// use puzzled_core::grid;
///
/// let g = grid![
///     ['A', 'B', 'C'],
///     ['D', 'E', 'F'],
/// ];
/// assert_eq!(g.rows(), 2);
/// assert_eq!(g.cols(), 3);
/// ```
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! grid {
    (
        [$($x0:expr),+ $(,)?]
        $(, [$($x:expr),+ $(,)?] $(,)?)*
    ) => {{
        let cols = $crate::__count!($($x0)+);
        let mut vec = Vec::new();

        $( vec.push($x0); )*
        $( $( vec.push($x); )* )*

        $crate::Grid::from_vec(vec, cols).expect("row literals have matching widths")
    }};
}
