use std::cell::OnceCell;
use std::fmt::Display;
use kinv::format::seq;
use kinv::Poly;
use kinv_matrix::dense::Mat;
use num_bigint::BigInt;

use crate::{Braid, CodeKind, LinkError};
use super::{BraidComps, DtCode, GaussCode, PdCode};
use super::{dt_from_braid, dt_from_gauss, gauss_from_dt, pd_code_from_braid, validate_dt, validate_gauss};

/// The defining representation of a `Link`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkCode {
    Braid(Braid),
    Gauss(GaussCode),
    Dt(DtCode),
}

impl LinkCode {
    pub fn kind(&self) -> CodeKind {
        match self {
            LinkCode::Braid(_) => CodeKind::Braid,
            LinkCode::Gauss(_) => CodeKind::Gauss,
            LinkCode::Dt(_)    => CodeKind::Dt,
        }
    }

    pub fn validate(&self) -> Result<(), LinkError> {
        match self {
            LinkCode::Braid(_) => Ok(()),
            LinkCode::Gauss(g) => validate_gauss(g),
            LinkCode::Dt(d)    => validate_dt(d),
        }
    }
}

impl Display for LinkCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkCode::Braid(b) => write!(f, "{b}"),
            LinkCode::Gauss(g) | LinkCode::Dt(g) => write!(f, "{}", seq(g)),
        }
    }
}

// Write-once values derived from the defining code.
#[derive(Clone, Debug, Default)]
pub(super) struct LinkCache {
    pub gauss: OnceCell<GaussCode>,
    pub dt: OnceCell<DtCode>,
    pub pd: OnceCell<PdCode>,
    pub comps: OnceCell<BraidComps>,
    pub seifert: OnceCell<Mat<i32>>,
    pub genus: OnceCell<isize>,
    pub signature: OnceCell<isize>,
    pub alexander: OnceCell<Poly<BigInt>>,
}

pub(super) fn cached<T, F>(cell: &OnceCell<T>, f: F) -> Result<&T, LinkError>
where F: FnOnce() -> Result<T, LinkError> {
    if let Some(v) = cell.get() {
        return Ok(v)
    }
    let v = f()?;
    Ok(cell.get_or_init(|| v))
}

/// A knot or link given by one of its codes.
///
/// Derived codes and invariants are computed on first access and
/// cached in `OnceCell`s, so a `Link` is `Send` but not `Sync`.
#[derive(Clone, Debug)]
pub struct Link {
    code: LinkCode,
    pub(super) cache: LinkCache,
}

impl Link {
    pub fn new(code: LinkCode) -> Result<Self, LinkError> {
        code.validate()?;
        Ok(Self { code, cache: LinkCache::default() })
    }

    pub fn from_braid(braid: Braid) -> Self {
        Self { code: LinkCode::Braid(braid), cache: LinkCache::default() }
    }

    pub fn from_gauss_code(code: GaussCode) -> Result<Self, LinkError> {
        Self::new(LinkCode::Gauss(code))
    }

    pub fn from_dt_code(code: DtCode) -> Result<Self, LinkError> {
        Self::new(LinkCode::Dt(code))
    }

    /// Exactly one of the three must be given.
    pub fn from_codes(braid: Option<Braid>, gauss: Option<GaussCode>, dt: Option<DtCode>) -> Result<Self, LinkError> {
        match (braid, gauss, dt) {
            (None, None, None) => Err(LinkError::NoInput),
            (Some(b), None, None) => Ok(Self::from_braid(b)),
            (None, Some(g), None) => Self::from_gauss_code(g),
            (None, None, Some(d)) => Self::from_dt_code(d),
            _ => Err(LinkError::AmbiguousInput)
        }
    }

    pub fn code(&self) -> &LinkCode {
        &self.code
    }

    pub fn kind(&self) -> CodeKind {
        self.code.kind()
    }

    pub(super) fn unsupported(&self, op: &'static str) -> LinkError {
        LinkError::Unsupported { op, from: self.kind() }
    }

    pub fn braid(&self) -> Result<&Braid, LinkError> {
        match &self.code {
            LinkCode::Braid(b) => Ok(b),
            _ => Err(self.unsupported("braid word"))
        }
    }

    pub fn braid_word(&self) -> Result<Vec<i32>, LinkError> {
        self.braid().map(|b| b.word())
    }

    pub fn crossing_num(&self) -> usize {
        match &self.code {
            LinkCode::Braid(b) => b.len(),
            LinkCode::Gauss(g) => g.len() / 2,
            LinkCode::Dt(d)    => d.len(),
        }
    }

    pub fn gauss_code(&self) -> Result<&[i32], LinkError> {
        match &self.code {
            LinkCode::Gauss(g) => Ok(g),
            _ => cached(&self.cache.gauss, || {
                let dt = self.dt_code()?;
                gauss_from_dt(dt)
            }).map(Vec::as_slice)
        }
    }

    pub fn dt_code(&self) -> Result<&[i32], LinkError> {
        match &self.code {
            LinkCode::Dt(d)    => Ok(d),
            LinkCode::Gauss(g) => cached(&self.cache.dt, || dt_from_gauss(g)).map(Vec::as_slice),
            LinkCode::Braid(b) => cached(&self.cache.dt, || dt_from_braid(b)).map(Vec::as_slice),
        }
    }

    /// Gauss and DT codes carry no crossing signs; use `OrientedGaussCode` for those.
    pub fn pd_code(&self) -> Result<&PdCode, LinkError> {
        let b = self.braid().map_err(|_| self.unsupported("PD code"))?;
        cached(&self.cache.pd, || pd_code_from_braid(b))
    }

    pub(super) fn comps(&self) -> Result<&BraidComps, LinkError> {
        let b = self.braid().map_err(|_| self.unsupported("braid decomposition"))?;
        cached(&self.cache.comps, || Ok(BraidComps::new(b)))
    }

    pub fn braid_components(&self) -> Result<&[Braid], LinkError> {
        self.comps().map(|c| c.comps())
    }

    pub fn braid_comps_vector(&self) -> Result<&[i32], LinkError> {
        self.comps().map(|c| c.vector())
    }

    pub fn homology_generators(&self) -> Result<&[usize], LinkError> {
        self.comps().map(|c| c.homology_gens())
    }
}

impl From<Braid> for Link {
    fn from(braid: Braid) -> Self {
        Self::from_braid(braid)
    }
}

impl Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.code)
    }
}
