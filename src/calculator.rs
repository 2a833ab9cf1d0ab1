use crate::{FibError, Result, MAX_N};

/// Returns the `n`-th Fibonacci number.
///
/// Runs in `O(n)` time with two words of state. Indices outside
/// `0..=MAX_N` are rejected with [`FibError::InvalidArgument`].
pub fn fibonacci(n: i64) -> Result<i32> {
    match u32::try_from(n) {
        Ok(index) if index <= MAX_N => Ok(fibonacci_unchecked(index)),
        _ => Err(FibError::InvalidArgument(n)),
    }
}

/// Same as [`fibonacci`] for an index the caller has already validated.
///
/// # Panics
///
/// Panics if `n > MAX_N`, since the result would not fit in an `i32`.
pub fn fibonacci_unchecked(n: u32) -> i32 {
    if n <= 1 {
        return n as i32;
    }

    let (mut a, mut b) = (0i32, 1i32);
    for _ in 2..=n {
        let c = a
            .checked_add(b)
            .unwrap_or_else(|| panic!("F({n}) overflows i32, index must be at most {MAX_N}"));
        a = b;
        b = c;
    }
    b
}

/// Returns `F(0)..=F(upto)` computed in a single pass.
pub fn sequence(upto: u32) -> Result<Vec<i32>> {
    if upto > MAX_N {
        return Err(FibError::InvalidArgument(upto as i64));
    }

    let mut values = Vec::with_capacity(upto as usize + 1);
    let (mut a, mut b) = (0i32, 1i32);
    values.push(a);
    for _ in 0..upto {
        values.push(b);
        // F(MAX_N + 1) would overflow; it is never pushed.
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    Ok(values)
}
