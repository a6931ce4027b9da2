pub mod ports;
pub mod router;
pub mod services;
pub mod value_objects;

pub use ports::*;
pub use value_objects::*;
