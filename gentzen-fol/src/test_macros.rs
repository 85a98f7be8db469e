/// Asserts that two collections hold the same items, ignoring their order.
#[macro_export]
macro_rules! assert_eq_sorted_vecs {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => assert_eq!(
                itertools::sorted(left.iter()).collect::<Vec<_>>(),
                itertools::sorted(right.iter()).collect::<Vec<_>>(),
            ),
        }
    };
}

/// Asserts that the `Debug` rendering of a value is the expected string.
#[macro_export]
macro_rules! assert_debug_string {
    ($expected:expr, $value:expr $(,)?) => {
        match (&$expected, &$value) {
            (expected, value) => assert_eq!(*expected, format!("{:?}", value)),
        }
    };
}
