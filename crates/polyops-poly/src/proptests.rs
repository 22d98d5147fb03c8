//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(small_coeff(), 1..=5)
            .prop_map(|coeffs| Polynomial::from_coeffs(coeffs.len() - 1, &coeffs).unwrap())
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_scale_commutative(a in small_poly(), c in small_coeff()) {
            prop_assert_eq!(a.scale(&c), c * &a);
            prop_assert_eq!(&a * c, c * &a);
        }

        #[test]
        fn poly_add_zero_extension_identity(a in small_poly(), degree in 0usize..=4) {
            // Adding an all-zero polynomial of no greater degree is the
            // position-wise identity.
            prop_assume!(degree <= a.degree());
            let zero = Polynomial::zeroed(degree);
            prop_assert_eq!(a.add(&zero), a.clone());
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            let diff = a.sub(&a);
            prop_assert!(diff.is_zero());
            prop_assert_eq!(diff.degree(), a.degree());
        }

        // Degree laws: exact, since results are never trimmed

        #[test]
        fn poly_add_degree(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).degree(), a.degree().max(b.degree()));
        }

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        // Evaluation homomorphism

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in -10i64..10) {
            // (a + b)(x) = a(x) + b(x)
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -10i64..10) {
            // (a * b)(x) = a(x) * b(x)
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn poly_eval_scale(a in small_poly(), c in small_coeff(), x in -10i64..10) {
            prop_assert_eq!(a.scale(&c).eval(&x), c * a.eval(&x));
        }
    }
}
