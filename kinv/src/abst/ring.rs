use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

// Commutative rings with identity.

pub trait Ring:
    Default +
    PartialEq +
    Eq +
    Clone +
    Send +
    Sync +
    Display +
    Debug +
    Zero +
    One +
    Neg<Output = Self> +
    Add<Output = Self> +
    Sub<Output = Self> +
    Mul<Output = Self> +
    From<i32> +
    'static
{}

// Integral domains where `a / b` can be computed whenever `b` divides `a`.

pub trait EucRing: Ring {
    fn div_exact(&self, rhs: &Self) -> Option<Self>;
}

macro_rules! impl_int_ring {
    ($t:ty) => {
        impl Ring for $t {}

        impl EucRing for $t {
            fn div_exact(&self, rhs: &Self) -> Option<Self> {
                if rhs.is_zero() {
                    return None
                }
                let (q, r) = self.div_rem(rhs);
                if r.is_zero() { Some(q) } else { None }
            }
        }
    };
}

impl_int_ring!(i32);
impl_int_ring!(i64);
impl_int_ring!(BigInt);
