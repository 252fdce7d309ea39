use log::debug;
use kinv::Sign;
use crate::{Braid, CodeKind, LinkError};
use super::{crossing_labels, validate_gauss, GaussCode, LabelConv};
use super::code::visit_table;

pub type Edge = usize;
pub type XCode = [Edge; 4];
pub type PdCode = Vec<XCode>;

// Planar diagram code, one 4-tuple per crossing:
//
//     3   2
//      \ /
//       \      = (0, 1, 2, 3)
//      / \
//     0   1
//
// starting at the incoming under-edge, counterclockwise.
// Edges are labelled 1..=2N along the knot, and edge 2N is followed by 1.

fn next_edge(a: Edge, n: usize) -> Edge {
    a % (2 * n) + 1
}

// `u` and `v` are the incoming edges of the under and the over pass.
fn xcode(u: Edge, v: Edge, sign: Sign, n: usize) -> XCode {
    match sign {
        Sign::Neg => [u, next_edge(v, n), next_edge(u, n), v],
        Sign::Pos => [u, v, next_edge(u, n), next_edge(v, n)],
    }
}

pub fn pd_code_from_braid(braid: &Braid) -> Result<PdCode, LinkError> {
    let n = braid.len();
    let labels = crossing_labels(&braid.word(), LabelConv::Pd)?;

    let pd: PdCode = braid.elements().iter().enumerate().map(|(j, g)| {
        let (e, o) = (labels[2 * j], labels[2 * j + 1]);
        let (e_abs, o_abs) = (e.unsigned_abs() as Edge, o.unsigned_abs() as Edge);
        let (u, v) = if e > 0 { (e_abs, o_abs) } else { (o_abs, e_abs) };
        xcode(u, v, g.sign(), n)
    }).collect();

    debug!("PD code of {braid}: {pd:?}");

    Ok(pd)
}

/// A Gauss code together with the sign of each crossing,
/// `signs[k]` being the sign of the crossing `k + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrientedGaussCode {
    code: GaussCode,
    signs: Vec<Sign>,
}

impl OrientedGaussCode {
    pub fn new(code: GaussCode, signs: Vec<Sign>) -> Result<Self, LinkError> {
        validate_gauss(&code)?;
        if 2 * signs.len() != code.len() {
            let reason = format!("{} signs given for {} crossings", signs.len(), code.len() / 2);
            return Err(LinkError::invalid(CodeKind::Gauss, reason))
        }
        Ok(Self { code, signs })
    }

    pub fn code(&self) -> &[i32] {
        &self.code
    }

    pub fn signs(&self) -> &[Sign] {
        &self.signs
    }

    pub fn pd_code(&self) -> PdCode {
        let n = self.signs.len();
        let table = visit_table(&self.code);

        let pd: PdCode = self.signs.iter().enumerate().map(|(k, &sign)| {
            let (f, s) = (table[2 * k], table[2 * k + 1]);
            let (f_abs, s_abs) = (f.unsigned_abs() as Edge, s.unsigned_abs() as Edge);
            let (u, v) = if f < 0 { (f_abs, s_abs) } else { (s_abs, f_abs) };
            xcode(u, v, sign, n)
        }).collect();

        debug!("PD code of {:?} with signs {:?}: {pd:?}", self.code, self.signs);

        pd
    }
}

pub fn pd_code_from_oriented_gauss(code: &[i32], signs: &[Sign]) -> Result<PdCode, LinkError> {
    let ogc = OrientedGaussCode::new(code.to_vec(), signs.to_vec())?;
    Ok(ogc.pd_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signs(s: &str) -> Vec<Sign> {
        s.chars().map(|c| Sign::try_from(c).unwrap()).collect()
    }

    #[test]
    fn next_edge_wraps() {
        assert_eq!(next_edge(1, 3), 2);
        assert_eq!(next_edge(6, 3), 1);
    }

    #[test]
    fn from_braid() {
        let b = Braid::from([1, 1, 1]);
        assert_eq!(pd_code_from_braid(&b), Ok(vec![[1,4,2,5], [5,2,6,3], [3,6,4,1]]));

        let b = Braid::from([-1, -1, -1]);
        assert_eq!(pd_code_from_braid(&b), Ok(vec![[1,5,2,4], [5,3,6,2], [3,1,4,6]]));

        let b = Braid::from([1, 2, 1, 2]);
        assert_eq!(pd_code_from_braid(&b), Ok(vec![[1,4,2,5], [2,7,3,8], [5,8,6,1], [6,3,7,4]]));

        let b = Braid::from([1]);
        assert_eq!(pd_code_from_braid(&b), Ok(vec![[1,2,2,1]]));
    }

    #[test]
    fn from_braid_multi_component() {
        let b = Braid::from([1, 1]);
        assert_eq!(pd_code_from_braid(&b), Err(LinkError::MultiComponent { op: "PD code" }));
    }

    #[test]
    fn from_oriented_gauss() {
        let g = [1, -3, 2, -1, 3, -2];
        assert_eq!(
            pd_code_from_oriented_gauss(&g, &signs("+++")),
            Ok(vec![[4,1,5,2], [6,3,1,4], [2,5,3,6]])
        );
        assert_eq!(
            pd_code_from_oriented_gauss(&g, &signs("---")),
            Ok(vec![[4,2,5,1], [6,4,1,3], [2,6,3,5]])
        );

        let g = [1, -4, 2, -1, 3, -2, 4, -3];
        assert_eq!(
            pd_code_from_oriented_gauss(&g, &signs("--++")),
            Ok(vec![[4,2,5,1], [6,4,7,3], [8,5,1,6], [2,7,3,8]])
        );
    }

    #[test]
    fn oriented_gauss_invalid() {
        let g = vec![1, -3, 2, -1, 3, -2];
        assert!(OrientedGaussCode::new(g.clone(), signs("++")).is_err());
        assert!(OrientedGaussCode::new(vec![1, 1], signs("+")).is_err());

        let ogc = OrientedGaussCode::new(g.clone(), signs("+-+")).unwrap();
        assert_eq!(ogc.code(), &g[..]);
        assert_eq!(ogc.signs(), &signs("+-+")[..]);
    }
}
