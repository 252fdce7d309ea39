use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::ops::{MulAssign, Mul};
use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::Itertools;
use num_traits::Zero;
use kinv::{GetSign, Sign};
use kinv::format::{subscript, superscript};

use crate::{CodeKind, LinkError};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generator(i32);

impl Generator {
    pub fn new(index: usize, sign: Sign) -> Self {
        assert!(!index.is_zero() && index <= i32::MAX as usize);
        Self(index as i32 * sign.to_i32())
    }

    pub fn index(&self) -> usize {
        self.0.unsigned_abs() as usize
    }

    pub fn sign(&self) -> Sign {
        self.0.sign()
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn inv(&self) -> Self {
        Self(-self.0)
    }
}

impl TryFrom<i32> for Generator {
    type Error = LinkError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value.is_zero() || value == i32::MIN {
            Err(LinkError::invalid(CodeKind::Braid, format!("generator {value}")))
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = subscript(self.index() as isize);
        if self.sign().is_positive() {
            write!(f, "σ{i}")
        } else {
            write!(f, "σ{i}{}", superscript(-1))
        }
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

/// A braid on `strands` strands, read left to right.
/// Built from a word, the strand count is `1 + max |g|`
/// and the empty word is the trivial braid on one strand.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Braid {
    strands: usize,
    elements: Vec<Generator>
}

impl Braid {
    pub fn new(strands: usize, elements: Vec<Generator>) -> Self {
        assert!(elements.iter().all(|g| g.index() < strands));
        Self { strands, elements }
    }

    pub fn id(strands: usize) -> Self {
        Self::new(strands, vec![])
    }

    pub fn from_word(word: &[i32]) -> Result<Self, LinkError> {
        let elements = word.iter().map(|&g| Generator::try_from(g)).collect::<Result<Vec<_>, _>>()?;
        let strands = Self::strands_for(&elements);
        Ok(Self::new(strands, elements))
    }

    fn strands_for(elements: &[Generator]) -> usize {
        elements.iter().map(|g| g.index() + 1).max().unwrap_or(1)
    }

    pub fn strands(&self) -> usize {
        self.strands
    }

    pub fn elements(&self) -> &[Generator] {
        &self.elements
    }

    pub fn word(&self) -> Vec<i32> {
        self.elements.iter().map(|g| g.value()).collect()
    }

    delegate! {
        to self.elements {
            pub fn len(&self) -> usize;
            #[call(is_empty)]
            pub fn is_triv(&self) -> bool;
        }
    }

    pub fn inv(&self) -> Self {
        Self::new(
            self.strands,
            self.elements.iter().rev().map(|g| g.inv()).collect()
        )
    }

    pub fn writhe(&self) -> i32 {
        self.elements.iter().map(|g| g.sign().to_i32()).sum()
    }

    pub fn min_index(&self) -> Option<usize> {
        self.elements.iter().map(|g| g.index()).min()
    }

    /// The permutation of strands on the positions touched by some
    /// generator, `perm[i]` being the strand that ends at position `i`.
    /// Every other strand is fixed.
    pub fn perm(&self) -> BTreeMap<usize, usize> {
        let mut p = BTreeMap::new();
        for g in self.elements.iter() {
            let k = g.index() - 1;
            let a = p.get(&k).copied().unwrap_or(k);
            let b = p.get(&(k + 1)).copied().unwrap_or(k + 1);
            p.insert(k, b);
            p.insert(k + 1, a);
        }
        p
    }

    /// Number of components of the closure.
    pub fn perm_cycles(&self) -> usize {
        let p = self.perm();
        let mut seen = HashSet::new();
        let mut cycles = self.strands - p.len();

        for &i in p.keys() {
            if seen.contains(&i) { continue }
            cycles += 1;

            let mut j = i;
            while seen.insert(j) {
                j = p[&j];
            }
        }

        cycles
    }

    /// Shifts every index down so that the smallest one becomes 1.
    pub fn smallest_equivalent(&self) -> Self {
        let Some(m) = self.min_index() else {
            return self.clone()
        };
        let shift = (m - 1) as i32;
        Self::from_iter(self.elements.iter().map(|g|
            g.value() - g.sign().to_i32() * shift
        ))
    }
}

impl<const N: usize> From<[i32; N]> for Braid {
    fn from(value: [i32; N]) -> Self {
        Self::from_iter(value)
    }
}

// Panics on a zero generator; use `Braid::from_word` for unchecked input.
impl FromIterator<i32> for Braid {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        let elements = iter.into_iter().map(|g| {
            assert!(!g.is_zero() && g != i32::MIN, "generator {g}");
            Generator(g)
        }).collect_vec();
        let strands = Self::strands_for(&elements);
        Self::new(strands, elements)
    }
}

impl FromStr for Braid {
    type Err = LinkError;

    // A JSON array, e.g. `[1, -2, 1]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word: Vec<i32> = serde_json::from_str(s).map_err(|e|
            LinkError::invalid(CodeKind::Braid, e.to_string())
        )?;
        Self::from_word(&word)
    }
}

impl fmt::Display for Braid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_triv() {
            return write!(f, "e")
        }
        for g in self.elements.iter() {
            write!(f, "{g}")?
        }
        Ok(())
    }
}

impl fmt::Debug for Braid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

#[auto_ops]
impl MulAssign<&Braid> for Braid {
    fn mul_assign(&mut self, rhs: &Braid) {
        self.strands = self.strands.max(rhs.strands);
        self.elements.extend(rhs.elements.iter().cloned());
    }
}
