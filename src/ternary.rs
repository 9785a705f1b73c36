/// A one-line conditional.  Rust's `if` is already an expression, but
/// `cargo fmt` spreads every one of them over five lines, and the
/// wrap-around neighbour table in the energy calculation reads much
/// better as four aligned rows.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
