//! Dense single-variable polynomials.
//!
//! This module provides the [`Polynomial`] value type: fixed-degree dense
//! coefficient storage with alignment-based addition, convolution-based
//! multiplication, Horner evaluation, and sign-aware rendering.

use std::ops::{Add, Mul, Neg, Sub};

use polyops_coeff::Coefficient;

use crate::error::PolyError;

/// A dense single-variable polynomial.
///
/// Coefficients are stored in ascending power order: `coeffs[i]` is the
/// coefficient of `x^i`, and the storage always holds exactly
/// `degree + 1` slots.
///
/// The degree is declared at construction and never inferred from the
/// values: arithmetic results keep zero leading coefficients rather than
/// trimming them, so [`degree`](Polynomial::degree) can exceed the true
/// mathematical degree. Whole-value replacement via
/// [`set_values`](Polynomial::set_values) is the only way to change the
/// degree of an existing polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T: Coefficient> {
    /// Coefficients in ascending power order. Length is `degree + 1`.
    coeffs: Vec<T>,
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates the constant polynomial 1 (degree 0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            coeffs: vec![T::one()],
        }
    }

    /// Creates the zero polynomial (degree 0).
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// Creates a constant polynomial (degree 0).
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Creates the monomial `c * x^n` (degree n).
    #[must_use]
    pub fn monomial(c: T, n: usize) -> Self {
        let mut coeffs = vec![T::zero(); n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Creates a polynomial of the given degree with every coefficient set
    /// to `fill`.
    #[must_use]
    pub fn filled(degree: usize, fill: T) -> Self {
        Self {
            coeffs: vec![fill; degree + 1],
        }
    }

    /// Creates a polynomial of the given degree with all coefficients zero.
    #[must_use]
    pub fn zeroed(degree: usize) -> Self {
        Self::filled(degree, T::zero())
    }

    /// Creates a polynomial of the given degree from a coefficient slice in
    /// ascending power order.
    ///
    /// Exactly `degree + 1` leading elements are copied; extra elements are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::TooFewCoefficients`] if the slice holds fewer
    /// than `degree + 1` elements.
    pub fn from_coeffs(degree: usize, coeffs: &[T]) -> Result<Self, PolyError> {
        let expected = degree + 1;
        if coeffs.len() < expected {
            return Err(PolyError::TooFewCoefficients {
                expected,
                got: coeffs.len(),
            });
        }

        Ok(Self {
            coeffs: coeffs[..expected].to_vec(),
        })
    }

    /// Replaces this polynomial's degree and coefficients wholesale.
    ///
    /// The old storage is released; the new coefficients are copied from
    /// the slice under the same length contract as
    /// [`from_coeffs`](Polynomial::from_coeffs).
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::TooFewCoefficients`] if the slice holds fewer
    /// than `degree + 1` elements.
    pub fn set_values(&mut self, degree: usize, coeffs: &[T]) -> Result<(), PolyError> {
        let expected = degree + 1;
        if coeffs.len() < expected {
            return Err(PolyError::TooFewCoefficients {
                expected,
                got: coeffs.len(),
            });
        }

        self.coeffs = coeffs[..expected].to_vec();
        Ok(())
    }

    /// Returns the declared degree.
    ///
    /// This is the index of the highest stored slot; it may exceed the
    /// true mathematical degree when that slot holds zero.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns all coefficients in ascending power order.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns the coefficient of `x^i`, or zero past the stored range.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns the coefficient in the declared-degree slot.
    ///
    /// The slot may hold zero; no trimming is performed.
    #[must_use]
    pub fn leading_coeff(&self) -> &T {
        self.coeffs.last().expect("storage holds degree + 1 slots")
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Coefficient::is_zero)
    }

    /// Returns the coefficient at a 1-based index counted down from the
    /// highest power: `get(1)` is the declared-degree slot and
    /// `get(degree() + 1)` the constant term.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::OutOfRange`] unless `1 <= index <= degree + 1`.
    pub fn get(&self, index: usize) -> Result<&T, PolyError> {
        let count = self.coeffs.len();
        if index == 0 || index > count {
            return Err(PolyError::OutOfRange { index, count });
        }
        Ok(&self.coeffs[count - index])
    }

    /// Mutable variant of [`get`](Polynomial::get), using the same
    /// highest-power-first index mapping.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::OutOfRange`] unless `1 <= index <= degree + 1`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, PolyError> {
        let count = self.coeffs.len();
        if index == 0 || index > count {
            return Err(PolyError::OutOfRange { index, count });
        }
        Ok(&mut self.coeffs[count - index])
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &T) -> T {
        let mut result = T::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Adds two polynomials.
    ///
    /// The result degree is the greater of the operand degrees; the shorter
    /// operand is zero-extended before position-wise summation.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.coeffs.get(i).cloned().unwrap_or_else(T::zero);
            let b = other.coeffs.get(i).cloned().unwrap_or_else(T::zero);
            result.push(a + b);
        }

        Self { coeffs: result }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Subtracts two polynomials under the same alignment rule as
    /// [`add`](Polynomial::add).
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials by convolution.
    ///
    /// The result degree is exactly the sum of the operand degrees, even
    /// when an operand is zero.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![T::zero(); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                result[i + j] =
                    result[i + j].clone() + self.coeffs[i].clone() * other.coeffs[j].clone();
            }
        }

        Self { coeffs: result }
    }

    /// Multiplies every coefficient by a scalar. The degree is unchanged,
    /// including for a zero scalar.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|x| x.clone() * c.clone()).collect(),
        }
    }
}

impl<T: Coefficient> Default for Polynomial<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Operator impls delegate to the named methods above.

impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl<T: Coefficient> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<T: Coefficient> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl<T: Coefficient> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl<T: Coefficient> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}

impl<T: Coefficient> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl<T: Coefficient> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl<T: Coefficient> Mul<T> for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(&rhs)
    }
}

impl<T: Coefficient> Mul<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(&rhs)
    }
}

// Scalar-on-left multiplication. A blanket `impl Mul<Polynomial<T>> for T`
// is not coherent, so the impl is instantiated per coefficient type.
macro_rules! impl_left_scalar_mul {
    ($($t:ty),* $(,)?) => {$(
        impl Mul<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn mul(self, rhs: Polynomial<$t>) -> Self::Output {
                rhs.scale(&self)
            }
        }

        impl Mul<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn mul(self, rhs: &Polynomial<$t>) -> Self::Output {
                rhs.scale(&self)
            }
        }
    )*};
}

impl_left_scalar_mul!(i8, i16, i32, i64, i128, isize, f32, f64);

impl<T: Coefficient> std::fmt::Display for Polynomial<T> {
    /// Renders highest power first.
    ///
    /// An all-zero polynomial renders as `0`; a polynomial whose only
    /// non-zero slot is the constant term renders that value alone.
    /// Otherwise every non-zero term is rendered: the declared-degree term
    /// prints its signed value directly (magnitude 1 omitted, exactly -1 as
    /// a bare `-`), lower terms get a ` + ` / ` - ` connector and their
    /// absolute value (omitted when 1, except for the constant term).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        if self.coeffs[1..].iter().all(Coefficient::is_zero) {
            return write!(f, "{}", self.coeffs[0]);
        }

        let degree = self.degree();
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            if i == degree {
                if c.is_negative() && c.abs().is_one() {
                    write!(f, "-")?;
                } else if !c.is_one() {
                    write!(f, "{c}")?;
                }
            } else {
                if c.is_negative() {
                    write!(f, " - ")?;
                } else {
                    write!(f, " + ")?;
                }

                let magnitude = c.abs();
                if i == 0 || !magnitude.is_one() {
                    write!(f, "{magnitude}")?;
                }
            }

            match i {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{i}")?,
            }
        }

        Ok(())
    }
}
