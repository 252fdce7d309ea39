use itertools::Itertools;
use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;
use kinv::{EucRing, Poly};
use kinv_matrix::dense::Mat;

use crate::{Braid, LinkError};
use super::{cached, seifert_matrix, BraidComps, Link, LinkCode};

// Sum over the components of (2 - t + len - q) / 2, where t is the number
// of components of the closure and q the number of strands it uses.
fn genus_of(comps: &BraidComps) -> isize {
    comps.comps().iter().map(|c| {
        let s = c.smallest_equivalent();
        let t = s.perm_cycles() as isize;
        let q = if s.is_triv() { 3 } else { s.strands() as isize };
        let len = s.len() as isize;
        (2 - t + len - q).div_floor(&2)
    }).sum()
}

/// `det(V - tVᵀ)`.
pub fn alexander_polynomial_of<R>(v: &Mat<i32>) -> Poly<R>
where R: EucRing {
    let t = Poly::<R>::variable();
    let a = v.map(|x| Poly::<R>::from(x));
    let b = v.transpose().map(|x| t.scale(&R::from(x)));
    (a - b).det()
}

/// Signature of `2(V + Vᵀ)`.
pub fn signature_of(v: &Mat<i32>) -> isize {
    let s = (v + &v.transpose()).map(|x| 2 * x);
    s.signature()
}

fn arf_of(delta: &BigInt) -> u8 {
    let r = delta.mod_floor(&BigInt::from(8));
    if r == BigInt::from(1) || r == BigInt::from(7) { 0 } else { 1 }
}

impl Link {
    /// Number of components of the closure. A link given by
    /// a Gauss or DT code is a single closed curve.
    pub fn link_number(&self) -> usize {
        match self.code() {
            LinkCode::Braid(b) => b.perm_cycles(),
            _ => 1
        }
    }

    pub fn is_knot(&self) -> bool {
        self.link_number() == 1
    }

    pub fn smallest_equivalent(&self) -> Result<Braid, LinkError> {
        self.braid().map(|b| b.smallest_equivalent())
    }

    pub fn seifert_matrix(&self) -> Result<&Mat<i32>, LinkError> {
        let comps = self.comps().map_err(|_| self.unsupported("Seifert matrix"))?;
        cached(&self.cache.seifert, ||
            seifert_matrix(comps.vector(), comps.homology_gens())
        )
    }

    pub fn genus(&self) -> Result<isize, LinkError> {
        let comps = self.comps().map_err(|_| self.unsupported("genus"))?;
        cached(&self.cache.genus, || {
            let g = genus_of(comps);
            debug!("genus: {g}");
            Ok(g)
        }).copied()
    }

    pub fn signature(&self) -> Result<isize, LinkError> {
        cached(&self.cache.signature, || {
            let v = self.seifert_matrix()?;
            let s = signature_of(v);
            debug!("signature: {s}");
            Ok(s)
        }).copied()
    }

    pub fn alexander_polynomial(&self) -> Result<&Poly<BigInt>, LinkError> {
        cached(&self.cache.alexander, || {
            let v = self.seifert_matrix()?;
            let p = alexander_polynomial_of::<BigInt>(v);
            debug!("alexander polynomial: {p}");
            Ok(p)
        })
    }

    pub fn alexander_polynomial_in(&self, var: &str) -> Result<String, LinkError> {
        self.alexander_polynomial().map(|p| p.display(var))
    }

    fn ensure_knot(&self, op: &'static str) -> Result<(), LinkError> {
        if self.is_knot() {
            Ok(())
        } else {
            Err(LinkError::NotKnot { op, components: self.link_number() })
        }
    }

    // Δ(-1)
    fn alexander_at_neg_one(&self) -> Result<BigInt, LinkError> {
        let p = self.alexander_polynomial()?;
        Ok(p.eval(&BigInt::from(-1)))
    }

    pub fn knot_determinant(&self) -> Result<BigInt, LinkError> {
        self.ensure_knot("knot determinant")?;
        self.alexander_at_neg_one().map(|d| d.abs())
    }

    /// 0 if Δ(-1) ≡ ±1 mod 8, otherwise 1.
    pub fn arf_invariant(&self) -> Result<u8, LinkError> {
        self.ensure_knot("Arf invariant")?;
        self.alexander_at_neg_one().map(|d| arf_of(&d))
    }

    /// Whether the signs of the Gauss code alternate. Always false for
    /// multi-component braids.
    pub fn is_alternating(&self) -> Result<bool, LinkError> {
        if !self.is_knot() {
            return Ok(false)
        }
        let gauss = self.gauss_code()?;
        Ok(gauss.iter().tuple_windows().all(|(a, b)| a.signum() != b.signum()))
    }
}
