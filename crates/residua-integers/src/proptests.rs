//! Property-based tests for the number-theoretic helpers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Integer;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn positive_int() -> impl Strategy<Value = i64> {
        1i64..=1000i64
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!(a.is_multiple_of(&g));
            prop_assert!(b.is_multiple_of(&g));
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        #[test]
        fn extended_gcd_matches_gcd(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let result = a.extended_gcd(&b);

            prop_assert_eq!(&result.gcd, &a.gcd(&b));
            prop_assert!(!result.gcd.is_negative());
            prop_assert_eq!(&a * &result.x + &b * &result.y, result.gcd);
        }

        #[test]
        fn lcm_is_common_multiple(a in positive_int(), b in positive_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let l = a.lcm(&b);

            prop_assert!(l.is_multiple_of(&a));
            prop_assert!(l.is_multiple_of(&b));
            prop_assert_eq!(&l * &a.gcd(&b), &a * &b);
        }

        #[test]
        fn mod_floor_in_range(a in small_int(), m in positive_int()) {
            let r = Integer::new(a).mod_floor(&Integer::new(m));

            prop_assert!(!r.is_negative());
            prop_assert!(r < Integer::new(m));
            prop_assert_eq!(r.to_i64(), Some(a.rem_euclid(m)));
        }

        #[test]
        fn mod_floor_is_congruent(a in small_int(), m in non_zero_int()) {
            let a = Integer::new(a);
            let m = Integer::new(m);
            let r = a.mod_floor(&m);
            prop_assert!((&a - &r).is_multiple_of(&m));
        }
    }
}
