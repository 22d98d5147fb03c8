//! Coefficient implementations for the primitive floats.

use crate::traits::Coefficient;
use num_traits::{One, Signed, Zero};

macro_rules! impl_coefficient_float {
    ($($t:ty),* $(,)?) => {$(
        impl Coefficient for $t {
            fn zero() -> Self {
                <$t as Zero>::zero()
            }

            fn one() -> Self {
                <$t as One>::one()
            }

            fn is_zero(&self) -> bool {
                Zero::is_zero(self)
            }

            fn is_one(&self) -> bool {
                One::is_one(self)
            }

            fn abs(&self) -> Self {
                Signed::abs(self)
            }

            fn is_negative(&self) -> bool {
                Signed::is_negative(self)
            }
        }
    )*};
}

impl_coefficient_float!(f32, f64);
