use log::trace;
use kinv_matrix::dense::{Mat, MatType};
use crate::LinkError;

/// Rules filling the Seifert matrix, tried in order for each pair `i <= j`
/// where `i` opens a band (its homology entry is non-zero).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeifertRule {
    Diagonal,
    Unlinked,
    Closing,
    Distant,
    Below,
    Above,
}

impl SeifertRule {
    pub const TABLE: [SeifertRule; 6] = [
        SeifertRule::Diagonal,
        SeifertRule::Unlinked,
        SeifertRule::Closing,
        SeifertRule::Distant,
        SeifertRule::Below,
        SeifertRule::Above,
    ];

    pub fn matches(&self, x: &[i32], h: &[usize], i: usize, j: usize) -> bool {
        use SeifertRule::*;
        let d = x[i].unsigned_abs() as i64 - x[j].unsigned_abs() as i64;
        match self {
            Diagonal => i == j,
            Unlinked => h[i] > h[j] || h[i] < j,
            Closing  => h[i] == j,
            Distant  => d.abs() > 1,
            Below    => d == 1,
            Above    => d == -1,
        }
    }

    /// The entries `(a_ij, a_ji)`.
    pub fn entries(&self, x: &[i32], h: &[usize], i: usize, j: usize) -> (i32, i32) {
        use SeifertRule::*;
        match self {
            Diagonal => {
                let a = -(x[i].signum() + x[h[i]].signum()).signum();
                (a, a)
            },
            Closing => if x[j] > 0 { (0, 1) } else { (-1, 0) },
            Below   => (0, -1),
            Above   => (1, 0),
            Unlinked | Distant => (0, 0),
        }
    }

    pub fn find(x: &[i32], h: &[usize], i: usize, j: usize) -> Option<SeifertRule> {
        Self::TABLE.into_iter().find(|r| r.matches(x, h, i, j))
    }
}

/// Builds the Seifert matrix from the component vector `x` and its
/// homology generators `h`, one row per non-zero entry of `h`.
pub fn seifert_matrix(x: &[i32], h: &[usize]) -> Result<Mat<i32>, LinkError> {
    assert_eq!(x.len(), h.len());

    let m = x.len();
    let mut a: Mat<i32> = Mat::zero((m, m));

    for i in 0 .. m {
        if h[i] == 0 { continue }

        for j in i .. m {
            let rule = SeifertRule::find(x, h, i, j).ok_or(
                LinkError::Inconsistent { i, j }
            )?;
            let (a_ij, a_ji) = rule.entries(x, h, i, j);

            trace!("({i}, {j}): {rule:?}");

            a[(i, j)] = a_ij;
            a[(j, i)] = a_ji;
        }
    }

    for i in (0 .. m).rev() {
        if h[i] == 0 {
            a = a.remove_row_col(i);
        }
    }

    trace!("Seifert matrix: {a}");
    debug_assert!(a.is_square());

    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trefoil() {
        let a = seifert_matrix(&[1, 1, 1], &[1, 2, 0]).unwrap();
        assert_eq!(a, Mat::from_data((2, 2), [-1, 0, 1, -1]));

        let a = seifert_matrix(&[-1, -1, -1], &[1, 2, 0]).unwrap();
        assert_eq!(a, Mat::from_data((2, 2), [1, -1, 0, 1]));
    }

    #[test]
    fn two_strand_gens() {
        let a = seifert_matrix(&[1, 2, 1, 2], &[2, 3, 0, 0]).unwrap();
        assert_eq!(a, Mat::from_data((2, 2), [-1, 1, 0, -1]));

        let a = seifert_matrix(&[-1, 2, 1, 2], &[2, 3, 0, 0]).unwrap();
        assert_eq!(a, Mat::from_data((2, 2), [0, 1, 0, -1]));
    }

    #[test]
    fn split() {
        let a = seifert_matrix(&[-1, 1, 3, 3], &[1, 0, 3, 0]).unwrap();
        assert_eq!(a, Mat::from_data((2, 2), [0, 0, 0, -1]));

        let a = seifert_matrix(&[-1, 1, 1, 1, 3, 5, 7, 6], &[1, 2, 3, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(a, Mat::from_data((3, 3), [
            0,  0, 0,
            1, -1, 0,
            0,  1, -1
        ]));
    }

    #[test]
    fn no_bands() {
        let a = seifert_matrix(&[1, 2, 3], &[0, 0, 0]).unwrap();
        assert_eq!(a.shape(), (0, 0));

        let a = seifert_matrix(&[], &[]).unwrap();
        assert_eq!(a.shape(), (0, 0));
    }

    #[test]
    fn rules() {
        let x = [1, 2, 1, 2];
        let h = [2, 3, 0, 0];
        assert_eq!(SeifertRule::find(&x, &h, 0, 0), Some(SeifertRule::Diagonal));
        assert_eq!(SeifertRule::find(&x, &h, 0, 1), Some(SeifertRule::Above));
        assert_eq!(SeifertRule::find(&x, &h, 0, 2), Some(SeifertRule::Unlinked));
        assert_eq!(SeifertRule::find(&x, &h, 0, 3), Some(SeifertRule::Unlinked));
        assert_eq!(SeifertRule::find(&x, &h, 1, 2), Some(SeifertRule::Unlinked));

        let (x, h) = ([1, 1, 1], [1, 2, 0]);
        assert_eq!(SeifertRule::find(&x, &h, 0, 1), Some(SeifertRule::Closing));

        let (x, h) = ([2, 1, 2, 1], [2, 3, 0, 0]);
        assert_eq!(SeifertRule::find(&x, &h, 0, 1), Some(SeifertRule::Below));
        assert_eq!(SeifertRule::find(&[1, 3, 1, 3], &h, 0, 1), Some(SeifertRule::Distant));
    }

    #[test]
    fn inconsistent() {
        let e = seifert_matrix(&[1, 1, 1], &[2, 2, 0]);
        assert_eq!(e, Err(LinkError::Inconsistent { i: 0, j: 1 }));
    }
}
