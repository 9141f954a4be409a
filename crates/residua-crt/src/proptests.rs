//! Property-based tests for congruence merging and solving.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use residua_integers::Integer;

    use crate::{Congruence, ConstraintSet, SolverConfig};

    const PRIMES: [i64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    fn congruence() -> impl Strategy<Value = (i64, i64)> {
        (1i64..24i64, -50i64..50i64)
    }

    fn build(pairs: &[(i64, i64)]) -> ConstraintSet {
        ConstraintSet::from_congruences(
            pairs
                .iter()
                .map(|&(period, offset)| Congruence::from_i64(period, offset).unwrap()),
        )
    }

    /// Scans `0..lcm` for the first `t` meeting every congruence.
    fn brute_force(pairs: &[(i64, i64)]) -> Option<i64> {
        let lcm = pairs
            .iter()
            .fold(Integer::new(1), |acc, &(period, _)| acc.lcm(&Integer::new(period)))
            .to_i64()?;
        (0..lcm).find(|t| {
            pairs
                .iter()
                .all(|&(period, offset)| (t - offset).rem_euclid(period) == 0)
        })
    }

    /// Textbook CRT: sum of r_i * M_i * (M_i^-1 mod m_i), reduced mod M.
    fn classical_crt(pairs: &[(i64, i64)]) -> Integer {
        let modulus = pairs
            .iter()
            .fold(Integer::new(1), |acc, &(period, _)| acc * Integer::new(period));
        let sum = pairs.iter().fold(Integer::new(0), |acc, &(period, residue)| {
            let m = Integer::new(period);
            let partial = &modulus / &m;
            let inverse = partial.extended_gcd(&m).x.mod_floor(&m);
            acc + &(&Integer::new(residue) * &partial) * &inverse
        });
        sum.mod_floor(&modulus)
    }

    proptest! {
        #[test]
        fn solve_matches_brute_force(pairs in proptest::collection::vec(congruence(), 1..=4)) {
            let expected = brute_force(&pairs);
            match build(&pairs).solve() {
                Ok(t) => prop_assert_eq!(t.to_i64(), expected),
                Err(err) => {
                    prop_assert!(err.is_no_intersection());
                    prop_assert_eq!(expected, None);
                }
            }
        }

        #[test]
        fn merge_idempotent((period, offset) in congruence()) {
            let a = Congruence::from_i64(period, offset.rem_euclid(period)).unwrap();
            let merged = a.merge(&a).unwrap();
            prop_assert!(merged.is_equivalent(&a));
        }

        #[test]
        fn merge_commutative(a in congruence(), b in congruence()) {
            let a = Congruence::from_i64(a.0, a.1).unwrap();
            let b = Congruence::from_i64(b.0, b.1).unwrap();
            match (a.merge(&b), b.merge(&a)) {
                (Ok(ab), Ok(ba)) => prop_assert!(ab.is_equivalent(&ba)),
                (Err(x), Err(y)) => {
                    prop_assert!(x.is_no_intersection());
                    prop_assert!(y.is_no_intersection());
                }
                (ab, ba) => prop_assert!(false, "{:?} vs {:?}", ab, ba),
            }
        }

        #[test]
        fn merge_associative(a in congruence(), b in congruence(), c in congruence()) {
            let a = Congruence::from_i64(a.0, a.1).unwrap();
            let b = Congruence::from_i64(b.0, b.1).unwrap();
            let c = Congruence::from_i64(c.0, c.1).unwrap();

            let left = a.merge(&b).and_then(|ab| ab.merge(&c));
            let right = b.merge(&c).and_then(|bc| a.merge(&bc));
            let shuffled = c.merge(&a).and_then(|ca| ca.merge(&b));

            match (left, right, shuffled) {
                (Ok(l), Ok(r), Ok(s)) => {
                    prop_assert!(l.is_equivalent(&r));
                    prop_assert!(l.is_equivalent(&s));
                }
                (Err(_), Err(_), Err(_)) => {}
                other => prop_assert!(false, "inconsistent results: {:?}", other),
            }
        }

        #[test]
        fn merged_class_is_intersection(a in congruence(), b in congruence(), t in -500i64..500i64) {
            let ca = Congruence::from_i64(a.0, a.1).unwrap();
            let cb = Congruence::from_i64(b.0, b.1).unwrap();
            let t = Integer::new(t);
            let in_both = ca.contains(&t) && cb.contains(&t);
            match ca.merge(&cb) {
                Ok(merged) => prop_assert_eq!(merged.contains(&t), in_both),
                Err(_) => prop_assert!(!in_both),
            }
        }

        #[test]
        fn coprime_matches_classical_crt(
            periods in proptest::sample::subsequence(PRIMES.to_vec(), 1..=5),
            seeds in proptest::collection::vec(0i64..1000i64, 5)
        ) {
            let pairs: Vec<(i64, i64)> = periods
                .iter()
                .zip(&seeds)
                .map(|(&p, &seed)| (p, seed % p))
                .collect();
            prop_assert_eq!(build(&pairs).solve().unwrap(), classical_crt(&pairs));
        }

        #[test]
        fn parallel_matches_sequential(pairs in proptest::collection::vec(congruence(), 1..=8)) {
            let set = build(&pairs);
            let config = SolverConfig { parallel_threshold: 1 };
            match (set.solve(), set.solve_with(&config)) {
                (Ok(seq), Ok(par)) => prop_assert_eq!(seq, par),
                (Err(x), Err(y)) => {
                    prop_assert!(x.is_no_intersection());
                    prop_assert!(y.is_no_intersection());
                }
                (seq, par) => prop_assert!(false, "{:?} vs {:?}", seq, par),
            }
        }
    }
}
