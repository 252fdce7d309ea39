use itertools::Itertools;
use log::debug;
use crate::Braid;

/// Splits a braid word at the indices it never uses.
/// Generators on either side of such a gap never cross each other,
/// so each side closes up independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BraidComps {
    comps: Vec<Braid>,
    vector: Vec<i32>,
    homology: Vec<usize>,
}

impl BraidComps {
    pub fn new(braid: &Braid) -> Self {
        let comps = Self::split(braid);
        let vector = comps.iter().flat_map(|c| c.word()).collect_vec();
        let homology = Self::homology_gens_of(&vector);

        debug!("components of {braid}: {comps:?}, homology: {homology:?}");

        Self { comps, vector, homology }
    }

    fn split(braid: &Braid) -> Vec<Braid> {
        let used = braid.elements().iter().map(|g| g.index()).sorted().dedup().collect_vec();
        let gaps = used.iter().copied().tuple_windows::<(usize, usize)>().filter(|&(a, b)|
            b - a > 1
        ).map(|(a, _)| a + 1).collect_vec();

        let mut buckets = vec![vec![]; gaps.len() + 1];
        for g in braid.elements() {
            let k = gaps.partition_point(|&i| i < g.index());
            buckets[k].push(g.value());
        }

        buckets.into_iter()
            .filter(|b| !b.is_empty())
            .map(Braid::from_iter)
            .collect()
    }

    // entry i is the next position j > i with |v[j]| == |v[i]|, or 0.
    fn homology_gens_of(vector: &[i32]) -> Vec<usize> {
        (0 .. vector.len()).map(|i| {
            let a = vector[i].unsigned_abs();
            (i + 1 .. vector.len()).find(|&j| vector[j].unsigned_abs() == a).unwrap_or(0)
        }).collect()
    }

    pub fn comps(&self) -> &[Braid] {
        &self.comps
    }

    pub fn vector(&self) -> &[i32] {
        &self.vector
    }

    pub fn homology_gens(&self) -> &[usize] {
        &self.homology
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(c: &BraidComps) -> Vec<Vec<i32>> {
        c.comps().iter().map(|b| b.word()).collect()
    }

    #[test]
    fn connected() {
        let c = BraidComps::new(&Braid::from([1, 2, 1, 2]));
        assert_eq!(words(&c), vec![vec![1, 2, 1, 2]]);
        assert_eq!(c.vector(), &[1, 2, 1, 2]);
        assert_eq!(c.homology_gens(), &[2, 3, 0, 0]);
    }

    #[test]
    fn one_gap() {
        let c = BraidComps::new(&Braid::from([-1, 3, 1, 3]));
        assert_eq!(words(&c), vec![vec![-1, 1], vec![3, 3]]);
        assert_eq!(c.vector(), &[-1, 1, 3, 3]);
        assert_eq!(c.homology_gens(), &[1, 0, 3, 0]);
    }

    #[test]
    fn two_gaps() {
        let c = BraidComps::new(&Braid::from([-2, 4, 1, 6, 1, 4]));
        assert_eq!(words(&c), vec![vec![-2, 1, 1], vec![4, 4], vec![6]]);
        assert_eq!(c.vector(), &[-2, 1, 1, 4, 4, 6]);
        assert_eq!(c.homology_gens(), &[0, 2, 0, 4, 0, 0]);
    }

    #[test]
    fn many_gaps() {
        let c = BraidComps::new(&Braid::from([-1, 3, 1, 5, 1, 7, 1, 6]));
        assert_eq!(words(&c), vec![vec![-1, 1, 1, 1], vec![3], vec![5, 7, 6]]);
        assert_eq!(c.homology_gens(), &[1, 2, 3, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn far_apart() {
        let c = BraidComps::new(&Braid::from([1, 2_000_000_000, -1]));
        assert_eq!(words(&c), vec![vec![1, -1], vec![2_000_000_000]]);
        assert_eq!(c.homology_gens(), &[1, 0, 0]);
    }

    #[test]
    fn empty() {
        let c = BraidComps::new(&Braid::id(1));
        assert!(c.comps().is_empty());
        assert!(c.vector().is_empty());
        assert!(c.homology_gens().is_empty());
    }
}
