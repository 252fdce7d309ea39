use log::trace;
use crate::LinkError;

/// Seed convention of the twist accumulator. The DT pass starts
/// with `+1` on a negative first crossing, the PD pass with `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelConv {
    Dt,
    Pd,
}

impl LabelConv {
    fn seed(&self, g: i32) -> i32 {
        let s = if g < 0 { 1 } else { -1 };
        match self {
            LabelConv::Dt => s,
            LabelConv::Pd => -s,
        }
    }

    fn op(&self) -> &'static str {
        match self {
            LabelConv::Dt => "DT code",
            LabelConv::Pd => "PD code",
        }
    }
}

// Walks the closure of `word` strand by strand, writing labels
// 1..=2N into the slots `2c` (even labels) and `2c + 1` (odd labels)
// of the crossing `c` being passed. An even label is negated
// when the pass and the twist disagree.
pub fn crossing_labels(word: &[i32], conv: LabelConv) -> Result<Vec<i32>, LinkError> {
    let n = word.len();
    let err = || LinkError::MultiComponent { op: conv.op() };

    let mut labels = vec![0; 2 * n];
    let mut strand = 1u32;
    let mut pos = 0;
    let mut twist = None;

    for next in 1 ..= 2 * n {
        let touches = |c: &usize| {
            let k = word[*c].unsigned_abs();
            k != 0 && (k == strand || k + 1 == strand)
        };
        let c = (pos .. n).chain(0 .. pos).find(touches).ok_or_else(err)?;
        let g = word[c];

        let slot = 2 * c + next % 2;
        if labels[slot] != 0 {
            return Err(err())
        }
        labels[slot] = next as i32;

        match twist {
            None => {
                twist = Some(conv.seed(g))
            },
            Some(t) => {
                let t = -t;
                let over = g.unsigned_abs() == strand;
                let s = g.signum() * t;
                if next % 2 == 0 && (over && s > 0 || !over && s < 0) {
                    labels[2 * c] *= -1;
                }
                twist = Some(t);
            }
        }

        if g.unsigned_abs() == strand {
            strand += 1
        } else {
            strand -= 1
        }
        pos = c + 1;
    }

    trace!("labels ({conv:?}): {labels:?}");

    Ok(labels)
}
