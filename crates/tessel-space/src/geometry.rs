//! Wraparound and linearization arithmetic.

/// True mathematical modulo: the result is always in `[0, modulus)`,
/// including for negative `a`.
///
/// # Panics
///
/// Panics if `modulus == 0`. Spaces reject zero-sized dimensions at
/// construction, so callers that wrap against a space's own dimensions
/// never hit this.
///
/// # Examples
///
/// ```
/// use tessel_space::wrap;
///
/// assert_eq!(wrap(-1, 5), 4);
/// assert_eq!(wrap(5, 5), 0);
/// assert_eq!(wrap(-11, 5), 4);
/// assert_eq!(wrap(i32::MIN, 7), (i32::MIN as i64).rem_euclid(7) as u32);
/// ```
pub fn wrap(a: i32, modulus: u32) -> u32 {
    assert!(modulus > 0, "wrap modulus must be positive");
    let m = i64::from(modulus);
    // Widened so that `a % m + m` cannot overflow.
    (((i64::from(a) % m) + m) % m) as u32
}

/// Row-major linearization: `row * width + col`.
///
/// Injective over `col < width`. Callers must wrap coordinates first.
///
/// ```
/// use tessel_space::index;
///
/// assert_eq!(index(0, 0, 4), 0);
/// assert_eq!(index(3, 0, 4), 3);
/// assert_eq!(index(0, 1, 4), 4);
/// ```
pub fn index(col: u32, row: u32, width: u32) -> usize {
    debug_assert!(col < width, "column {col} not wrapped into width {width}");
    row as usize * width as usize + col as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wrap_in_range_is_identity() {
        for a in 0..7 {
            assert_eq!(wrap(a, 7), a as u32);
        }
    }

    #[test]
    fn wrap_negative_is_not_truncating_remainder() {
        assert_eq!(-1 % 3, -1);
        assert_eq!(wrap(-1, 3), 2);
        assert_eq!(wrap(-3, 3), 0);
        assert_eq!(wrap(-4, 3), 2);
    }

    #[test]
    #[should_panic(expected = "wrap modulus must be positive")]
    fn wrap_zero_modulus_panics() {
        wrap(1, 0);
    }

    #[test]
    fn index_is_row_major() {
        let width = 5;
        let mut seen = Vec::new();
        for row in 0..3 {
            for col in 0..width {
                seen.push(index(col, row, width));
            }
        }
        assert_eq!(seen, (0..15).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn wrap_always_in_range(a in any::<i32>(), m in 1u32..=100_000) {
            prop_assert!(wrap(a, m) < m);
        }

        #[test]
        fn wrap_is_periodic(a in -1_000_000i32..1_000_000, m in 1u32..=10_000) {
            prop_assert_eq!(wrap(a + m as i32, m), wrap(a, m));
            prop_assert_eq!(wrap(a - m as i32, m), wrap(a, m));
        }

        #[test]
        fn wrap_matches_rem_euclid(a in any::<i32>(), m in 1u32..=u32::MAX) {
            prop_assert_eq!(wrap(a, m) as i64, i64::from(a).rem_euclid(i64::from(m)));
        }
    }
}
