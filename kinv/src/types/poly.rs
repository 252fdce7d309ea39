use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use auto_impl_ops::auto_ops;
use num_traits::{One, Zero};

use crate::{EucRing, Ring};
use crate::format::{lc, superscript};

// `Poly<R>` : univariate polynomials over R.
// `data[i]` is the coefficient of x^i, with no trailing zeros.

#[derive(Clone, PartialEq, Eq, Default, Hash)]
pub struct Poly<R> {
    data: Vec<R>
}

impl<R> Poly<R>
where R: Ring {
    pub fn new(data: Vec<R>) -> Self {
        let mut p = Self { data };
        p.reduce();
        p
    }

    pub fn from_const(r: R) -> Self {
        Self::new(vec![r])
    }

    pub fn variable() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    pub fn coeffs(&self) -> &[R] {
        &self.data
    }

    // `None` for the zero polynomial.
    pub fn deg(&self) -> Option<usize> {
        self.data.len().checked_sub(1)
    }

    pub fn lead_coeff(&self) -> Option<&R> {
        self.data.last()
    }

    pub fn scale(&self, r: &R) -> Self {
        Self::new(self.data.iter().map(|a| a.clone() * r.clone()).collect())
    }

    pub fn eval(&self, x: &R) -> R {
        self.data.iter().rev().fold(R::zero(), |acc, a|
            acc * x.clone() + a.clone()
        )
    }

    pub fn display(&self, x: &str) -> String {
        let terms = self.data.iter().enumerate().rev().filter(|(_, a)|
            !a.is_zero()
        ).map(|(i, a)| {
            let m = match i {
                0 => String::from("1"),
                1 => x.to_string(),
                _ => format!("{x}{}", superscript(i as isize))
            };
            (m, a)
        });
        lc(terms)
    }

    fn reduce(&mut self) {
        while self.data.last().is_some_and(|a| a.is_zero()) {
            self.data.pop();
        }
    }
}

impl<R> FromIterator<R> for Poly<R>
where R: Ring {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> From<i32> for Poly<R>
where R: Ring {
    fn from(a: i32) -> Self {
        Self::from_const(R::from(a))
    }
}

impl<R> Display for Poly<R>
where R: Ring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display("t"))
    }
}

impl<R> Debug for Poly<R>
where R: Ring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<R> Zero for Poly<R>
where R: Ring {
    fn zero() -> Self {
        Self { data: vec![] }
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl<R> One for Poly<R>
where R: Ring {
    fn one() -> Self {
        Self::from_const(R::one())
    }
}

impl<R> Neg for Poly<R>
where R: Ring {
    type Output = Self;
    fn neg(self) -> Self {
        Self { data: self.data.into_iter().map(|a| -a).collect() }
    }
}

impl<R> Neg for &Poly<R>
where R: Ring {
    type Output = Poly<R>;
    fn neg(self) -> Poly<R> {
        -self.clone()
    }
}

#[auto_ops]
impl<R> AddAssign<&Poly<R>> for Poly<R>
where R: Ring {
    fn add_assign(&mut self, rhs: &Poly<R>) {
        if self.data.len() < rhs.data.len() {
            self.data.resize(rhs.data.len(), R::zero());
        }
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = a.clone() + b.clone();
        }
        self.reduce();
    }
}

#[auto_ops]
impl<R> SubAssign<&Poly<R>> for Poly<R>
where R: Ring {
    fn sub_assign(&mut self, rhs: &Poly<R>) {
        if self.data.len() < rhs.data.len() {
            self.data.resize(rhs.data.len(), R::zero());
        }
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = a.clone() - b.clone();
        }
        self.reduce();
    }
}

#[auto_ops]
impl<R> MulAssign<&Poly<R>> for Poly<R>
where R: Ring {
    fn mul_assign(&mut self, rhs: &Poly<R>) {
        if self.is_zero() || rhs.is_zero() {
            self.data.clear();
            return
        }

        let mut data = vec![R::zero(); self.data.len() + rhs.data.len() - 1];
        for (i, a) in self.data.iter().enumerate() {
            if a.is_zero() { continue }
            for (j, b) in rhs.data.iter().enumerate() {
                data[i + j] = data[i + j].clone() + a.clone() * b.clone();
            }
        }
        self.data = data;
        self.reduce();
    }
}

impl<R> Ring for Poly<R>
where R: Ring {}

impl<R> EucRing for Poly<R>
where R: EucRing {
    // Long division, succeeding only when the remainder vanishes
    // and every step divides exactly in R.
    fn div_exact(&self, rhs: &Self) -> Option<Self> {
        let (db, b) = (rhs.deg()?, rhs.lead_coeff()?);
        let Some(da) = self.deg() else {
            return Some(Self::zero())
        };
        if da < db {
            return None
        }

        let mut rem = self.data.clone();
        let mut q = vec![R::zero(); da - db + 1];

        for k in (0 ..= da - db).rev() {
            let c = rem[k + db].div_exact(b)?;
            if c.is_zero() { continue }
            for (j, bj) in rhs.data.iter().enumerate() {
                rem[k + j] = rem[k + j].clone() - c.clone() * bj.clone();
            }
            q[k] = c;
        }

        if rem.iter().all(|a| a.is_zero()) {
            Some(Self::new(q))
        } else {
            None
        }
    }
}
