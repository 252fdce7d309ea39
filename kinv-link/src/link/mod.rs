mod link;
mod label;
mod code;
mod comp;
mod seifert;
mod inv;
mod pd;

pub use link::{Link, LinkCode};
pub use label::{LabelConv, crossing_labels};
pub use code::*;
pub use comp::BraidComps;
pub use seifert::{SeifertRule, seifert_matrix};
pub use inv::{alexander_polynomial_of, signature_of};
pub use pd::*;

use link::cached;
