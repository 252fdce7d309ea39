use derive_more::{Display, Debug};
use num_traits::Signed;

/// Orientation of a braid generator or of a crossing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Display, Debug)]
#[cfg_attr(feature = "serde", derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr))]
#[repr(i8)]
pub enum Sign {
    #[display("+")]
    #[debug("+")]
    Pos = 1,

    #[display("-")]
    #[debug("-")]
    Neg = -1
}

impl Sign {
    pub fn is_positive(&self) -> bool {
        self == &Sign::Pos
    }

    pub fn to_i32(self) -> i32 {
        match self {
            Sign::Pos =>  1,
            Sign::Neg => -1
        }
    }
}

// Crossing signs are written as `+` / `-`.
impl TryFrom<char> for Sign {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Sign::Pos),
            '-' => Ok(Sign::Neg),
             _  => Err(c)
        }
    }
}

pub trait GetSign {
    fn sign(&self) -> Sign;
}

// zero is treated as positive.
impl<T> GetSign for T where T: Signed {
    fn sign(&self) -> Sign {
        if self.is_negative() { Sign::Neg } else { Sign::Pos }
    }
}
