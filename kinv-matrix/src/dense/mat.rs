use std::ops::{Index, IndexMut, Add, AddAssign, Sub, SubAssign, Neg};
use nalgebra::{DMatrix, Scalar};
use delegate::delegate;
use derive_more::Display;
use auto_impl_ops::auto_ops;
use num_traits::Zero;
use kinv::Ring;

pub trait MatType {
    fn shape(&self) -> (usize, usize);
    fn rows(&self) -> usize { self.shape().0 }
    fn cols(&self) -> usize { self.shape().1 }
    fn is_square(&self) -> bool {
        let (m, n) = self.shape();
        m == n
    }
}

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub struct Mat<R> {
    inner: DMatrix<R>
}

impl<R> MatType for Mat<R> {
    fn shape(&self) -> (usize, usize) {
        (self.inner.nrows(), self.inner.ncols())
    }
}

impl<R> Mat<R> {
    pub fn inner(&self) -> &DMatrix<R> {
        &self.inner
    }

    // (row, col, entry), column-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        let m = self.rows();
        self.inner.iter().enumerate().map(move |(i, a)|
            (i % m, i / m, a)
        )
    }
}

impl<R> Mat<R>
where R: Scalar {
    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> {
        DMatrix::from_row_iterator(shape.0, shape.1, data).into()
    }

    pub fn row_vecs(&self) -> Vec<Vec<R>> {
        (0 .. self.rows()).map(|i|
            self.inner.row(i).iter().cloned().collect()
        ).collect()
    }

    pub fn zero(shape: (usize, usize)) -> Self
    where R: Zero {
        DMatrix::zeros(shape.0, shape.1).into()
    }

    pub fn transpose(&self) -> Self {
        self.inner.transpose().into()
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square() && self.iter().all(|(i, j, a)|
            i >= j || a == &self[(j, i)]
        )
    }

    // Deletes row `i` and column `i`.
    pub fn remove_row_col(self, i: usize) -> Self {
        assert!(self.is_square() && i < self.rows());
        self.inner.remove_row(i).remove_column(i).into()
    }

    pub fn map<S, F>(&self, f: F) -> Mat<S>
    where S: Scalar, F: FnMut(R) -> S {
        self.inner.map(f).into()
    }
}

impl<R> From<DMatrix<R>> for Mat<R> {
    fn from(inner: DMatrix<R>) -> Self {
        Self { inner }
    }
}

impl<R> Index<(usize, usize)> for Mat<R> {
    type Output = R;
    delegate! {
        to self.inner {
            fn index(&self, index: (usize, usize)) -> &R;
        }
    }
}

impl<R> IndexMut<(usize, usize)> for Mat<R> {
    delegate! {
        to self.inner {
            fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output;
        }
    }
}

impl<R> Neg for Mat<R>
where R: Ring {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.inner.map(|a| -a).into()
    }
}

impl<R> Neg for &Mat<R>
where R: Ring {
    type Output = Mat<R>;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

#[auto_ops]
impl<R> AddAssign<&Mat<R>> for Mat<R>
where R: Ring {
    fn add_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape());
        self.inner = self.inner.zip_map(&rhs.inner, |a, b| a + b);
    }
}

#[auto_ops]
impl<R> SubAssign<&Mat<R>> for Mat<R>
where R: Ring {
    fn sub_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape());
        self.inner = self.inner.zip_map(&rhs.inner, |a, b| a - b);
    }
}
