pub mod code;
pub mod inv;
pub mod pd;
