pub mod assembler;
pub mod entities;

pub use entities::*;
