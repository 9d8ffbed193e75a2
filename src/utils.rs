/// Greatest common divisor (Euclid).
///
/// `gcd(0, 0)` is `0`.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple.
///
/// `lcm(0, x)` is `0`. Saturates at `u64::MAX` instead of wrapping.
pub const fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    match (a / gcd(a, b)).checked_mul(b) {
        Some(v) => v,
        None => u64::MAX,
    }
}

/// `n!`, or `None` if it does not fit in a `usize`.
///
/// `0! = 1`.
pub const fn checked_factorial(n: usize) -> Option<usize> {
    let mut acc: usize = 1;
    let mut i = 2;
    while i <= n {
        acc = match acc.checked_mul(i) {
            Some(v) => v,
            None => return None,
        };
        i += 1;
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_small() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn lcm_small() {
        assert_eq!(lcm(0, 3), 0);
        assert_eq!(lcm(1, 1), 1);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(2, 3), 6);
        assert_eq!(lcm(5, 5), 5);
    }

    #[test]
    fn lcm_saturates() {
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), u64::MAX);
    }

    #[test]
    fn factorials() {
        assert_eq!(checked_factorial(0), Some(1));
        assert_eq!(checked_factorial(1), Some(1));
        assert_eq!(checked_factorial(3), Some(6));
        assert_eq!(checked_factorial(5), Some(120));
        assert_eq!(checked_factorial(10), Some(3_628_800));
    }

    #[test]
    fn factorial_overflow() {
        // 35! exceeds even a 128-bit usize
        assert_eq!(checked_factorial(35), None);
        assert_eq!(checked_factorial(usize::MAX), None);
    }
}
