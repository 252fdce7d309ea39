mod helper;
mod input;

pub use helper::*;
pub use input::*;
