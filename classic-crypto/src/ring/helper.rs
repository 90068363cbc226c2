/// Computes the greatest common divisor of two numbers, always non-negative.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b), with g >= 0.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    if old_r < 0 {
        return (-old_r, -old_s, -old_t);
    }

    (old_r, old_s, old_t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_gcd() {
        assert_eq!(gcd(1, 6), 1);
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(6, 6), 6);
        assert_eq!(gcd(10, 0), 10);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(54, 24), 6);
        assert_eq!(gcd(-54, 24), 6);
    }

    #[test]
    fn test_extended_gcd_bezout() {
        for &(a, b) in &[(12, 8), (17, 13), (240, 46), (1001, 103), (-15, 10), (-12, -9)] {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(g, gcd(a, b));
            assert_eq!(a * x + b * y, g);
        }
    }

    #[test]
    fn test_extended_gcd_zero() {
        let (g, x, y) = extended_gcd(0, 15);
        assert_eq!((g, x, y), (15, 0, 1));

        let (g, x, _) = extended_gcd(15, 0);
        assert_eq!(g, 15);
        assert_eq!(15 * x, g);

        assert_eq!(extended_gcd(0, 0).0, 0);
    }
}
