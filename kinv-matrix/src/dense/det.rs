use kinv::EucRing;
use super::{Mat, MatType};

impl<R> Mat<R>
where R: EucRing {
    /// Determinant by fraction-free (Bareiss) elimination.
    /// Every division is exact in an integral domain, so this works
    /// over `Z` and over `Z[t]` alike. The empty matrix has determinant 1.
    pub fn det(&self) -> R {
        assert!(self.is_square(), "det of a non-square matrix");

        let n = self.rows();
        if n == 0 {
            return R::one()
        }

        let mut a = self.row_vecs();
        let mut prev = R::one();
        let mut neg = false;

        for k in 0 .. n - 1 {
            if a[k][k].is_zero() {
                let Some(p) = (k + 1 .. n).find(|&i| !a[i][k].is_zero()) else {
                    return R::zero()
                };
                a.swap(k, p);
                neg = !neg;
            }

            let pivot = a[k][k].clone();
            for i in k + 1 .. n {
                for j in k + 1 .. n {
                    let x = a[i][j].clone() * pivot.clone() - a[i][k].clone() * a[k][j].clone();
                    a[i][j] = x.div_exact(&prev).expect("fraction-free step must divide exactly");
                }
                a[i][k] = R::zero();
            }
            prev = pivot;
        }

        let d = a[n - 1][n - 1].clone();
        if neg { -d } else { d }
    }
}

#[cfg(test)]
mod tests {
    use kinv::Poly;
    use num_bigint::BigInt;
    use super::*;

    #[test]
    fn det_1x1() {
        let a = Mat::from_data((1, 1), [5]);
        assert_eq!(a.det(), 5);
    }

    #[test]
    fn det_2x2() {
        let a = Mat::from_data((2, 2), [
            1, 2,
            3, 4
        ]);
        assert_eq!(a.det(), -2);
    }

    #[test]
    fn det_3x3() {
        let a = Mat::from_data((3, 3), [
            6, 1, 1,
            4, -2, 5,
            2, 8, 7
        ]);
        assert_eq!(a.det(), -306);
    }

    #[test]
    fn det_4x4() {
        let a = Mat::from_data((4, 4), [
            3, 2, 0, 1,
            4, 0, 1, 2,
            3, 0, 2, 1,
            9, 2, 3, 1
        ]);
        assert_eq!(a.det(), 24);
    }

    #[test]
    fn det_5x5() {
        let a = Mat::from_data((5, 5), [
            2, 0, 1, 3, 4,
            1, 2, 0, 1, 5,
            3, 1, 2, 1, 0,
            0, 2, 3, 2, 1,
            4, 1, 0, 2, 3
        ]);
        assert_eq!(a.det(), -150);
    }

    #[test]
    fn det_needs_swap() {
        let a = Mat::from_data((3, 3), [
            0, 1, 0,
            1, 0, 0,
            0, 0, 1
        ]);
        assert_eq!(a.det(), -1);
    }

    #[test]
    fn det_singular() {
        let a = Mat::from_data((2, 2), [0, 0, 0, 0]);
        assert_eq!(a.det(), 0);

        let a = Mat::from_data((3, 3), [
            1, 2, 3,
            2, 4, 6,
            0, 1, 1
        ]);
        assert_eq!(a.det(), 0);
    }

    #[test]
    fn det_empty() {
        let a: Mat<i64> = Mat::zero((0, 0));
        assert_eq!(a.det(), 1);
    }

    #[test]
    fn det_bigint() {
        let a = Mat::from_data((2, 2), [3, 1, 1, 2]).map(BigInt::from);
        assert_eq!(a.det(), BigInt::from(5));
    }

    #[test]
    fn det_poly() {
        // V - tVᵀ for V = [[-1, 0], [1, -1]].
        type P = Poly<i64>;
        let t = P::variable();
        let v = Mat::from_data((2, 2), [-1i64, 0, 1, -1]);
        let vt = v.transpose();
        let a = v.map(P::from_const) - vt.map(|x| t.scale(&x));
        assert_eq!(a.det(), P::new(vec![1, -1, 1]));
    }
}
