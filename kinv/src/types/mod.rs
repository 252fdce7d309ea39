mod poly;

pub use poly::*;
