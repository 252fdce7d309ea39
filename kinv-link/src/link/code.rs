use itertools::Itertools;
use log::debug;
use crate::{Braid, CodeKind, LinkError};
use super::{crossing_labels, LabelConv};

pub type GaussCode = Vec<i32>;
pub type DtCode = Vec<i32>;

pub fn dt_from_braid(braid: &Braid) -> Result<DtCode, LinkError> {
    let n = braid.len();
    let labels = crossing_labels(&braid.word(), LabelConv::Dt)?;

    // crossing j carries the odd label 2i+1 at slot 2j+1.
    let mut dt = vec![0; n];
    for j in 0 .. n {
        let i = (labels[2 * j + 1] as usize - 1) / 2;
        dt[i] = labels[2 * j];
    }

    debug!("DT code of {braid}: {dt:?}");

    Ok(dt)
}

// The crossing `i` is passed at the labels 2i+1 and |dt[i]|.
// A positive entry means the odd pass goes over.
pub fn gauss_from_dt(dt: &[i32]) -> Result<GaussCode, LinkError> {
    validate_dt(dt)?;

    let n = dt.len();
    let mut gauss = vec![0; 2 * n];

    for (i, &d) in dt.iter().enumerate() {
        let id = (i + 1) as i32;
        let over = if d > 0 { id } else { -id };
        gauss[2 * i] = over;
        gauss[d.unsigned_abs() as usize - 1] = -over;
    }

    debug!("Gauss code of DT {dt:?}: {gauss:?}");

    Ok(gauss)
}

pub fn gauss_from_braid(braid: &Braid) -> Result<GaussCode, LinkError> {
    let dt = dt_from_braid(braid)?;
    gauss_from_dt(&dt)
}

// For each odd position p, in order, the position of the other pass
// through the same crossing, negated when the pass at p is under.
// Crossing ids only pair up the two passes, so any numbering works.
pub fn dt_from_gauss(gauss: &[i32]) -> Result<DtCode, LinkError> {
    validate_gauss(gauss)?;

    let mut visits = vec![vec![]; gauss.len() / 2];
    for (i, &v) in gauss.iter().enumerate() {
        visits[v.unsigned_abs() as usize - 1].push(i);
    }

    let dt = gauss.iter().enumerate().step_by(2).map(|(p, &v)| {
        let pos = &visits[v.unsigned_abs() as usize - 1];
        let q = if pos[0] == p { pos[1] } else { pos[0] };
        let label = (q + 1) as i32;
        if v > 0 { label } else { -label }
    }).collect_vec();

    debug!("DT code of Gauss {gauss:?}: {dt:?}");

    Ok(dt)
}

// Slots 2(k-1) and 2k-1 hold the first and the second visit of
// crossing k, as a 1-based position signed by over (+) / under (-).
pub(crate) fn visit_table(gauss: &[i32]) -> Vec<i32> {
    let mut table = vec![0; gauss.len()];
    for (i, &v) in gauss.iter().enumerate() {
        let k = v.unsigned_abs() as usize;
        let p = (i + 1) as i32 * v.signum();
        if table[2 * (k - 1)] == 0 {
            table[2 * (k - 1)] = p;
        } else {
            table[2 * k - 1] = p;
        }
    }
    table
}

pub fn validate_gauss(gauss: &[i32]) -> Result<(), LinkError> {
    let err = |reason: String| Err(LinkError::invalid(CodeKind::Gauss, reason));

    if gauss.len() % 2 != 0 {
        return err(format!("odd length {}", gauss.len()))
    }

    let n = gauss.len() / 2;
    let mut visits: Vec<Vec<usize>> = vec![vec![]; n];

    for (i, &v) in gauss.iter().enumerate() {
        let k = v.unsigned_abs() as usize;
        if k == 0 || k > n {
            return err(format!("crossing id {v} out of range 1..={n}"))
        }
        visits[k - 1].push(i);
    }

    for (k, pos) in visits.iter().enumerate() {
        let id = k + 1;
        let &[p, q] = pos.as_slice() else {
            return err(format!("crossing {id} appears {} times", pos.len()))
        };
        if gauss[p].signum() == gauss[q].signum() {
            return err(format!("crossing {id} is not passed once over and once under"))
        }
        if p % 2 == q % 2 {
            return err(format!("crossing {id} is passed at positions of equal parity"))
        }
    }

    Ok(())
}

pub fn validate_dt(dt: &[i32]) -> Result<(), LinkError> {
    let err = |reason: String| Err(LinkError::invalid(CodeKind::Dt, reason));

    let n = dt.len();
    let mut seen = vec![false; n];

    for &d in dt {
        let a = d.unsigned_abs() as usize;
        if a == 0 || a % 2 != 0 {
            return err(format!("entry {d} is not a non-zero even number"))
        }
        if a > 2 * n {
            return err(format!("entry {d} out of range"))
        }
        if seen[a / 2 - 1] {
            return err(format!("label {a} appears twice"))
        }
        seen[a / 2 - 1] = true;
    }

    Ok(())
}
