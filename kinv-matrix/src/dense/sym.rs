use nalgebra::DMatrix;
use log::trace;
use kinv::Ring;
use super::{Mat, MatType};

impl<R> Mat<R>
where R: Ring + Into<f64> {
    /// Number of positive eigenvalues minus number of negative ones.
    /// The matrix must be symmetric.
    pub fn signature(&self) -> isize {
        assert!(self.is_symmetric(), "signature of a non-symmetric matrix");

        let n = self.rows();
        if n == 0 {
            return 0
        }

        let a: DMatrix<f64> = self.inner().map(|x| x.into());
        let eps = 1e-9 * a.norm().max(1.0);
        let eigen = a.symmetric_eigenvalues();

        trace!("eigenvalues: {eigen}");

        eigen.iter().map(|&e|
            if e > eps { 1 } else if e < -eps { -1 } else { 0 }
        ).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_diag() {
        let a = Mat::from_data((3, 3), [
            2, 0, 0,
            0, -3, 0,
            0, 0, 5
        ]);
        assert_eq!(a.signature(), 1);
    }

    #[test]
    fn signature_trefoil() {
        // V + Vᵀ for V = [[-1, 0], [1, -1]].
        let v = Mat::from_data((2, 2), [-1, 0, 1, -1]);
        let s = &v + &v.transpose();
        assert_eq!(s.signature(), -2);
    }

    #[test]
    fn signature_degenerate() {
        let a = Mat::from_data((2, 2), [0, 0, 0, -2]);
        assert_eq!(a.signature(), -1);

        let a = Mat::from_data((2, 2), [1, 1, 1, 1]);
        assert_eq!(a.signature(), 1);
    }

    #[test]
    fn signature_indefinite() {
        let a = Mat::from_data((2, 2), [0, 1, 1, 0]);
        assert_eq!(a.signature(), 0);
    }

    #[test]
    fn signature_empty() {
        let a: Mat<i32> = Mat::zero((0, 0));
        assert_eq!(a.signature(), 0);
    }
}
