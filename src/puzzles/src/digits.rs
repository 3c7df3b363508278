/// Reverses the decimal digits of `n` arithmetically. Zeros that end up
/// leading are dropped, so `1200` becomes `21`.
///
/// The accumulator wraps on overflow, which only happens for 20-digit inputs
/// whose reversal does not fit in a `u64`.
pub fn reverse_digits(mut n: u64) -> u64 {
    let mut reversed: u64 = 0;
    while n > 0 {
        reversed = reversed.wrapping_mul(10).wrapping_add(n % 10);
        n /= 10;
    }
    reversed
}
