mod err;
mod braid;
pub mod link;

pub use err::*;
pub use braid::*;
pub use link::*;
