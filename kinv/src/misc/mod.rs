mod sign;
mod digits;

pub mod format;

pub use sign::*;
pub use digits::*;
