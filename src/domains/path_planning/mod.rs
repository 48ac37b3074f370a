pub mod aggregate;
pub mod loader;
pub mod ports;

pub use aggregate::*;
pub use loader::*;
pub use ports::*;
