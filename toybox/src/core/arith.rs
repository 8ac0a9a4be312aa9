//! Integer arithmetic on `i64`.
//!
//! Every operation is checked: `None` means the result does not fit.

/// Module-level constant folded into [`total`].
pub const GLOBAL_VAL: i64 = 42;

pub fn add(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

pub fn multiply(a: i64, b: i64) -> Option<i64> {
    a.checked_mul(b)
}

/// `x * y + (x + y) + global`.
pub fn total(x: i64, y: i64, global: i64) -> Option<i64> {
    let product = multiply(x, y)?;
    let sum = add(x, y)?;
    product.checked_add(sum)?.checked_add(global)
}

/// Double every element, failing if any of them overflows.
pub fn double_all(values: &[i64]) -> Option<Vec<i64>> {
    values.iter().map(|value| multiply(*value, 2)).collect()
}
