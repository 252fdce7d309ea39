mod mat;
mod det;
mod sym;

pub use mat::*;
pub use det::*;
pub use sym::*;
