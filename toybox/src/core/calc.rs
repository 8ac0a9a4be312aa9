//! The contrived numeric loop.

/// Largest `n` accepted by [`complex_calc`].
///
/// The result grows roughly as `n^3 / 6`, which stays well inside `i64` here.
pub const MAX_CALC_N: u32 = 1_000_000;

/// Accumulate over `0..=n` with a parity branch, then subtract `n` down to 1.
///
/// Even `i` contributes `3 * i`, odd `i` contributes `i * i`. Returns `None`
/// when `n` exceeds [`MAX_CALC_N`] or any step overflows.
pub fn complex_calc(n: u32) -> Option<i64> {
    if n > MAX_CALC_N {
        return None;
    }
    let n = i64::from(n);
    let mut res: i64 = 0;
    for i in 0..=n {
        let step = if i % 2 == 0 {
            i.checked_mul(3)?
        } else {
            i.checked_mul(i)?
        };
        res = res.checked_add(step)?;
    }
    for i in (1..=n).rev() {
        res = res.checked_sub(i)?;
    }
    Some(res)
}
